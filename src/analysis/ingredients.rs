//! Ingredient frequency across the meals of one category

use crate::api::{MealRecord, RecipeSource};
use crate::error::Result;
use futures::future::try_join_all;
use indicatif::ProgressBar;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, trace};

/// How far into a meal record's ingredient slots to look
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IngredientScan {
    /// Slots are contiguous; the first null slot ends the record
    #[default]
    StopAtNull,
    /// Visit every slot, skipping nulls
    Full,
}

/// Lowercased ingredient name to number of occurrences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngredientTable {
    counts: BTreeMap<String, usize>,
}

impl IngredientTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `ingredient`. Blank names are ignored.
    pub fn record(&mut self, ingredient: &str) -> bool {
        if ingredient.trim().is_empty() {
            return false;
        }

        *self.counts.entry(ingredient.to_lowercase()).or_insert(0) += 1;
        true
    }

    /// Count the ingredients of one meal; returns how many were counted.
    pub fn absorb_meal(&mut self, meal: &MealRecord, scan: IngredientScan) -> usize {
        let mut counted = 0;

        for (field, value) in meal.ingredient_fields() {
            match value {
                None if scan == IngredientScan::StopAtNull => {
                    trace!("{} is null, ending scan", field);
                    break;
                }
                None => continue,
                Some(name) => {
                    if self.record(name) {
                        counted += 1;
                    }
                }
            }
        }

        counted
    }

    pub fn get(&self, ingredient: &str) -> Option<usize> {
        self.counts.get(&ingredient.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries sorted by ingredient name
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
    }

    /// Names and counts as parallel sequences, for charting
    pub fn labels_and_counts(&self) -> (Vec<String>, Vec<usize>) {
        self.counts
            .iter()
            .map(|(name, count)| (name.clone(), *count))
            .unzip()
    }
}

impl<S: AsRef<str>> FromIterator<(S, usize)> for IngredientTable {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        let mut table = IngredientTable::new();
        for (name, count) in iter {
            let name = name.as_ref();
            if count == 0 || name.trim().is_empty() {
                continue;
            }
            *table.counts.entry(name.to_lowercase()).or_insert(0) += count;
        }
        table
    }
}

/// Result of tallying one batch of meals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngredientTally {
    /// Meals whose category matched the target
    pub qualifying_meals: usize,
    pub table: IngredientTable,
}

impl IngredientTally {
    /// Reduce already-fetched meals; only those in `target_category` count.
    pub fn from_meals<'a, I>(meals: I, target_category: &str, scan: IngredientScan) -> Self
    where
        I: IntoIterator<Item = &'a MealRecord>,
    {
        let mut tally = IngredientTally::default();

        for meal in meals {
            if meal.category() != Some(target_category) {
                continue;
            }
            tally.qualifying_meals += 1;
            let counted = tally.table.absorb_meal(meal, scan);
            debug!(
                "Counted {} ingredients from a {} meal",
                counted, target_category
            );
        }

        tally
    }
}

/// Fetch every meal concurrently, then tally ingredients of the ones in
/// `target_category`.
///
/// Nothing is counted until all lookups have completed; the first failed
/// lookup fails the whole batch.
pub async fn tally_ingredients<S>(
    source: &S,
    meal_ids: &[String],
    target_category: &str,
    scan: IngredientScan,
    progress: &ProgressBar,
) -> Result<IngredientTally>
where
    S: RecipeSource + ?Sized,
{
    info!("Looking up {} meals", meal_ids.len());

    let lookups = meal_ids.iter().map(|id| async move {
        let meal = source.lookup_meal(id).await?;
        progress.inc(1);
        Ok::<_, crate::error::Error>(meal)
    });

    let meals = try_join_all(lookups).await?;
    progress.finish_and_clear();

    let tally = IngredientTally::from_meals(&meals, target_category, scan);
    info!(
        "{} of {} meals are {}, {} distinct ingredients",
        tally.qualifying_meals,
        meals.len(),
        target_category,
        tally.table.len()
    );

    Ok(tally)
}
