//! In-memory [`RecipeSource`] for tests and offline runs

use super::{MealRecord, RecipeSource};
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Requests made against a [`MockRecipeSource`], in call order
pub type CalledRequests = Arc<Mutex<Vec<String>>>;

/// Fixture-backed recipe source
#[derive(Debug, Default)]
pub struct MockRecipeSource {
    categories: Vec<(String, usize)>,
    areas: HashMap<String, Vec<String>>,
    meals: HashMap<String, MealRecord>,
    failing: HashSet<String>,
    /// Track requests for verification
    pub called_requests: CalledRequests,
}

impl MockRecipeSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category with a given number of recipes
    #[must_use]
    pub fn with_category(mut self, name: &str, recipe_count: usize) -> Self {
        self.categories.push((name.to_string(), recipe_count));
        self
    }

    /// Register the meal ids returned for an area
    #[must_use]
    pub fn with_area(mut self, area: &str, ids: &[&str]) -> Self {
        self.areas.insert(
            area.to_string(),
            ids.iter().map(|id| id.to_string()).collect(),
        );
        self
    }

    /// Register a meal record from a JSON object
    ///
    /// # Panics
    ///
    /// Panics if `record` is not a JSON object.
    #[must_use]
    pub fn with_meal(mut self, id: &str, record: Value) -> Self {
        let record: MealRecord =
            serde_json::from_value(record).expect("meal fixture must be a JSON object");
        self.meals.insert(id.to_string(), record);
        self
    }

    /// Make every request naming `key` (category, area or meal id) fail
    #[must_use]
    pub fn failing_on(mut self, key: &str) -> Self {
        self.failing.insert(key.to_string());
        self
    }

    pub async fn get_called_requests(&self) -> Vec<String> {
        self.called_requests.lock().await.clone()
    }

    async fn record(&self, request: String) {
        self.called_requests.lock().await.push(request);
    }

    fn check_failure(&self, key: &str) -> Result<()> {
        if self.failing.contains(key) {
            return Err(Error::HttpStatus(format!(
                "mock failure for {key}: 500 Internal Server Error"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl RecipeSource for MockRecipeSource {
    async fn list_categories(&self) -> Result<Vec<String>> {
        self.record("categories".to_string()).await;
        let names = self.categories.iter().map(|(name, _)| name.clone());
        Ok(names.collect())
    }

    async fn count_recipes_in_category(&self, category: &str) -> Result<usize> {
        self.record(format!("filter c={category}")).await;
        self.check_failure(category)?;
        Ok(self
            .categories
            .iter()
            .find(|(name, _)| name == category)
            .map_or(0, |(_, count)| *count))
    }

    async fn list_meal_ids_by_area(&self, area: &str) -> Result<Vec<String>> {
        self.record(format!("filter a={area}")).await;
        self.check_failure(area)?;
        Ok(self.areas.get(area).cloned().unwrap_or_default())
    }

    async fn lookup_meal(&self, id: &str) -> Result<MealRecord> {
        self.record(format!("lookup i={id}")).await;
        self.check_failure(id)?;
        self.meals
            .get(id)
            .cloned()
            .ok_or_else(|| Error::UnexpectedShape(format!("lookup for meal {id} returned no meal")))
    }
}
