use crate::analysis::IngredientScan;
use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

pub mod loader;

pub use loader::ConfigLoader;

pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1/";
pub const DEFAULT_AREA: &str = "Canadian";
pub const DEFAULT_TARGET_CATEGORY: &str = "Dessert";
pub const DEFAULT_CHART_PATH: &str = "mealdb_analysis.svg";

/// Get the platform directory holding `config.toml`
pub fn get_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "mealdb", "mealdb-analysis")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Settings for one analysis run.
///
/// Every field has a default, so an empty TOML file (or none at all) yields
/// the stock Canadian dessert analysis against the public API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Base URL of the API; endpoint paths are joined onto it
    pub base_url: String,
    /// Nationality used for the `filter.php?a=` query
    pub area: String,
    /// Category a meal must have to count towards the ingredient table
    pub target_category: String,
    pub ingredient_scan: IngredientScan,
    pub chart_path: PathBuf,
    pub render_chart: bool,
    pub chart_width: u32,
    pub chart_height: u32,
    pub request_timeout_secs: u64,
    pub show_progress: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            area: DEFAULT_AREA.to_string(),
            target_category: DEFAULT_TARGET_CATEGORY.to_string(),
            ingredient_scan: IngredientScan::default(),
            chart_path: PathBuf::from(DEFAULT_CHART_PATH),
            render_chart: true,
            chart_width: 800,
            chart_height: 800,
            request_timeout_secs: 30,
            show_progress: false,
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge_env_vars(&mut self) {
        self.merge_env_with(|key| std::env::var(key).ok());
    }

    /// Apply `MEALDB_*` overrides read through `lookup`.
    pub fn merge_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup("MEALDB_BASE_URL") {
            self.base_url = base_url;
        }

        if let Some(area) = lookup("MEALDB_AREA") {
            self.area = area;
        }

        if let Some(category) = lookup("MEALDB_CATEGORY") {
            self.target_category = category;
        }

        if let Some(path) = lookup("MEALDB_CHART_PATH") {
            self.chart_path = PathBuf::from(path);
        }

        if let Some(timeout) = lookup("MEALDB_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(value) => self.request_timeout_secs = value,
                Err(_) => tracing::warn!("Ignoring invalid MEALDB_TIMEOUT_SECS: {}", timeout),
            }
        }
    }

    /// Parsed base URL, normalized to end in `/` so endpoint joins append.
    pub fn api_base(&self) -> Result<Url> {
        let mut raw = self.base_url.clone();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Ok(Url::parse(&raw)?)
    }

    pub fn validate(&self) -> Result<()> {
        let base = self.api_base()?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "base_url must be http(s), got {}",
                base.scheme()
            )));
        }

        if self.area.trim().is_empty() {
            return Err(Error::Config("area must not be empty".to_string()));
        }

        if self.target_category.trim().is_empty() {
            return Err(Error::Config(
                "target_category must not be empty".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(Error::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        if self.render_chart && (self.chart_width == 0 || self.chart_height == 0) {
            return Err(Error::Config(format!(
                "chart dimensions must be non-zero, got {}x{}",
                self.chart_width, self.chart_height
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
