//! Access to the recipe database
//!
//! `RecipeSource` is the seam between the aggregation logic and the remote
//! API so the analysis can run against fixtures in tests.

pub mod client;
pub mod mock;
pub mod models;

pub use client::MealDbClient;
pub use mock::MockRecipeSource;
pub use models::{MealRecord, INGREDIENT_FIELD_PREFIX};

use crate::error::Result;
use async_trait::async_trait;

/// The four lookups the analysis needs from the recipe database
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Names of every category, in listing order
    async fn list_categories(&self) -> Result<Vec<String>>;

    /// Number of recipes filed under `category`
    async fn count_recipes_in_category(&self, category: &str) -> Result<usize>;

    /// Identifiers of every meal from `area` (nationality)
    async fn list_meal_ids_by_area(&self, area: &str) -> Result<Vec<String>>;

    /// Full record for one meal
    async fn lookup_meal(&self, id: &str) -> Result<MealRecord>;
}
