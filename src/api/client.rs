//! HTTP implementation of [`RecipeSource`] for TheMealDB

use super::models::{
    AreaFilterResponse, CategoryFilterResponse, CategoryListResponse, MealLookupResponse,
};
use super::{MealRecord, RecipeSource};
use crate::config::AnalysisConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

const CATEGORIES_ENDPOINT: &str = "categories.php";
const FILTER_ENDPOINT: &str = "filter.php";
const LOOKUP_ENDPOINT: &str = "lookup.php";

/// TheMealDB client sharing one connection pool across all requests
#[derive(Debug, Clone)]
pub struct MealDbClient {
    client: Client,
    base_url: Url,
}

impl MealDbClient {
    /// Create a client rooted at `base_url` (must end in `/`).
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &AnalysisConfig) -> Result<Self> {
        Self::new(
            config.api_base()?,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.base_url.join(endpoint)?;
        trace!("GET {} {:?}", url, query);

        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus(format!(
                "{endpoint} {query:?} returned {status}"
            )));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            Error::Deserialization(format!("Failed to parse {endpoint} response: {e}"))
        })
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn list_categories(&self) -> Result<Vec<String>> {
        let response: CategoryListResponse = self.get_json(CATEGORIES_ENDPOINT, &[]).await?;
        let categories: Vec<String> = response
            .categories
            .into_iter()
            .map(|entry| entry.name)
            .collect();

        debug!("Fetched {} categories", categories.len());
        Ok(categories)
    }

    async fn count_recipes_in_category(&self, category: &str) -> Result<usize> {
        let response: CategoryFilterResponse =
            self.get_json(FILTER_ENDPOINT, &[("c", category)]).await?;
        Ok(response.recipe_count())
    }

    async fn list_meal_ids_by_area(&self, area: &str) -> Result<Vec<String>> {
        let response: AreaFilterResponse = self.get_json(FILTER_ENDPOINT, &[("a", area)]).await?;
        let ids: Vec<String> = response
            .meals
            .unwrap_or_default()
            .into_iter()
            .map(|meal| meal.id)
            .collect();

        debug!("Fetched {} meal ids for area {}", ids.len(), area);
        Ok(ids)
    }

    async fn lookup_meal(&self, id: &str) -> Result<MealRecord> {
        let response: MealLookupResponse = self.get_json(LOOKUP_ENDPOINT, &[("i", id)]).await?;
        response
            .meals
            .and_then(|meals| meals.into_iter().next())
            .ok_or_else(|| Error::UnexpectedShape(format!("lookup for meal {id} returned no meal")))
    }
}
