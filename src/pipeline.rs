//! The full run: fetch, aggregate, report and plot

use crate::analysis::categories::split_labels_and_counts;
use crate::analysis::{
    count_recipes_by_category, create_progress_bar, tally_ingredients, CategoryCount,
    ExtremalReport, Extremum, IngredientTally, ReportTemplate,
};
use crate::api::{MealDbClient, RecipeSource};
use crate::chart::{render_bar_charts, BarSeries};
use crate::config::AnalysisConfig;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info};

/// Everything one run computed
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub area: String,
    pub target_category: String,
    pub categories: Vec<CategoryCount>,
    /// Meals listed for the area, before category filtering
    pub area_meal_count: usize,
    pub ingredients: IngredientTally,
    pub category_report: ExtremalReport,
    pub ingredient_report: ExtremalReport,
}

impl Analysis {
    /// Print the counts followed by both question/answer pairs.
    pub fn write_summary<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(
            out,
            "There are {} categories of meal in mealdb.",
            self.categories.len()
        )?;
        writeln!(
            out,
            "There are {} {} recipes in mealdb",
            self.area_meal_count, self.area
        )?;
        writeln!(
            out,
            "There are {} {} {}s in the mealdb.",
            self.ingredients.qualifying_meals,
            self.area,
            self.target_category.to_lowercase()
        )?;
        writeln!(out, "{}", self.category_report)?;
        writeln!(out, "{}", self.ingredient_report)?;
        Ok(())
    }

    pub fn category_series(&self) -> BarSeries {
        let (labels, counts) = split_labels_and_counts(&self.categories);
        BarSeries::new("Counts of Recipes by Category from MealDB", labels, counts)
    }

    pub fn ingredient_series(&self) -> BarSeries {
        let (labels, counts) = self.ingredients.table.labels_and_counts();
        BarSeries::new(
            format!(
                "Counts of {} {} Recipes by Ingredient from MealDB",
                self.area, self.target_category
            ),
            labels,
            counts,
        )
        .x_desc("Ingredient")
        .rotate_labels(true)
    }

    /// Write the stacked chart unless rendering is disabled.
    pub fn render_charts(&self, config: &AnalysisConfig) -> Result<()> {
        if !config.render_chart {
            debug!("Chart rendering disabled");
            return Ok(());
        }

        render_bar_charts(
            &config.chart_path,
            (config.chart_width, config.chart_height),
            &self.category_series(),
            &self.ingredient_series(),
        )
    }
}

/// Run both aggregations against `source` and build the reports.
///
/// The two listings are fetched one after the other, then each fan-out runs
/// to completion before the next starts.
pub async fn run_analysis<S>(source: &S, config: &AnalysisConfig) -> Result<Analysis>
where
    S: RecipeSource + ?Sized,
{
    let category_names = source.list_categories().await?;
    info!("There are {} categories", category_names.len());

    let meal_ids = source.list_meal_ids_by_area(&config.area).await?;
    info!("There are {} {} meals", meal_ids.len(), config.area);

    let progress = create_progress_bar(
        category_names.len(),
        "Counting recipes per category",
        config.show_progress,
    );
    let categories = count_recipes_by_category(source, &category_names, &progress).await?;

    let progress = create_progress_bar(meal_ids.len(), "Looking up meals", config.show_progress);
    let ingredients = tally_ingredients(
        source,
        &meal_ids,
        &config.target_category,
        config.ingredient_scan,
        &progress,
    )
    .await?;

    let category_report = ExtremalReport::build(
        categories.iter().map(|c| (c.name.as_str(), c.count)),
        Extremum::Max,
        &ReportTemplate::most_recipes_by_category(),
    )?;

    let ingredient_report = ExtremalReport::build(
        ingredients.table.iter(),
        Extremum::Min,
        &ReportTemplate::fewest_recipes_by_ingredient(&config.area, &config.target_category),
    )?;

    Ok(Analysis {
        area: config.area.clone(),
        target_category: config.target_category.clone(),
        categories,
        area_meal_count: meal_ids.len(),
        ingredients,
        category_report,
        ingredient_report,
    })
}

/// Query TheMealDB, print the answers to stdout and write the chart.
pub async fn perform_analysis(config: &AnalysisConfig) -> Result<Analysis> {
    config.validate()?;

    let client = MealDbClient::from_config(config)?;
    info!("Querying {}", client.base_url());

    let analysis = run_analysis(&client, config).await?;

    let stdout = std::io::stdout();
    analysis.write_summary(&mut stdout.lock())?;

    analysis.render_charts(config)?;
    Ok(analysis)
}
