use super::{get_config_dir, AnalysisConfig};
use crate::error::Result;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Builds an [`AnalysisConfig`] from defaults, an optional TOML file and the
/// process environment.
pub struct ConfigLoader {
    config_dir: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_dir: get_config_dir(),
        }
    }

    /// Loader that looks for `config.toml` in `dir` instead of the platform directory
    pub fn with_config_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: Some(dir.into()),
        }
    }

    /// Load the configuration. An explicit path must exist; the implicit
    /// `config.toml` is only read when present.
    pub async fn load(&self, explicit_path: Option<&Path>) -> Result<AnalysisConfig> {
        let mut config = match explicit_path {
            Some(path) => Self::load_file(path).await?,
            None => match self.default_config_path() {
                Some(path) if path.exists() => Self::load_file(&path).await?,
                _ => {
                    debug!("No configuration file found, using defaults");
                    AnalysisConfig::default()
                }
            },
        };

        config.merge_env_vars();
        Ok(config)
    }

    pub async fn load_file(path: &Path) -> Result<AnalysisConfig> {
        debug!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path).await?;
        let config: AnalysisConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn default_config_path(&self) -> Option<PathBuf> {
        self.config_dir.as_ref().map(|dir| dir.join("config.toml"))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
