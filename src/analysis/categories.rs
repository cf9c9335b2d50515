//! Recipe counts per category

use crate::api::RecipeSource;
use crate::error::Result;
use futures::future::try_join_all;
use indicatif::ProgressBar;
use serde::Serialize;
use tracing::{debug, info};

/// One category paired with the number of recipes filed under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

impl CategoryCount {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Fetch the recipe count of every category concurrently.
///
/// All requests are in flight at once and the result is only produced after
/// every one has completed; the first failure fails the whole batch. Output
/// order matches `categories`.
pub async fn count_recipes_by_category<S>(
    source: &S,
    categories: &[String],
    progress: &ProgressBar,
) -> Result<Vec<CategoryCount>>
where
    S: RecipeSource + ?Sized,
{
    info!("Counting recipes for {} categories", categories.len());

    let requests = categories.iter().map(|category| async move {
        let count = source.count_recipes_in_category(category).await?;
        progress.inc(1);
        debug!("Category {} has {} recipes", category, count);
        Ok::<_, crate::error::Error>(CategoryCount::new(category.as_str(), count))
    });

    let counts = try_join_all(requests).await?;
    progress.finish_and_clear();

    Ok(counts)
}

/// Category names and counts as parallel sequences, for charting
pub fn split_labels_and_counts(counts: &[CategoryCount]) -> (Vec<String>, Vec<usize>) {
    counts
        .iter()
        .map(|entry| (entry.name.clone(), entry.count))
        .unzip()
}
