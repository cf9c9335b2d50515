//! Aggregation of recipe data into frequency tables and extremal answers

pub mod categories;
pub mod ingredients;
pub mod report;

pub use categories::{count_recipes_by_category, CategoryCount};
pub use ingredients::{tally_ingredients, IngredientScan, IngredientTable, IngredientTally};
pub use report::{tied_extremum, ExtremalReport, Extremum, ReportTemplate, TiedExtremum};

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for one fan-out batch; hidden unless `visible`.
pub fn create_progress_bar(total: usize, message: &'static str, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message(message);
    pb
}
