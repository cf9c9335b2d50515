use clap::Parser;
use mealdb_analysis::analysis::IngredientScan;
use mealdb_analysis::config::{AnalysisConfig, ConfigLoader};
use std::path::PathBuf;
use tracing::{debug, error, trace};

/// Which TheMealDB categories hold the most recipes, and which dessert
/// ingredients are used the least
#[derive(Parser)]
#[command(name = "mealdb-analysis")]
#[command(about = "Analyze recipe categories and dessert ingredients from TheMealDB", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Base URL of the recipe API
    #[arg(long)]
    base_url: Option<String>,

    /// Nationality whose meals feed the ingredient question
    #[arg(long)]
    area: Option<String>,

    /// Category a meal must belong to for its ingredients to count
    #[arg(long)]
    category: Option<String>,

    /// Where to write the SVG chart
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Skip writing the chart
    #[arg(long)]
    no_chart: bool,

    /// Keep scanning ingredient slots past an empty one
    #[arg(long)]
    scan_all_ingredients: bool,

    /// Show progress bars while requests are in flight
    #[arg(long)]
    progress: bool,
}

impl Cli {
    fn apply_overrides(&self, config: &mut AnalysisConfig) {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(area) = &self.area {
            config.area = area.clone();
        }
        if let Some(category) = &self.category {
            config.target_category = category.clone();
        }
        if let Some(output) = &self.output {
            config.chart_path = output.clone();
        }
        if self.no_chart {
            config.render_chart = false;
        }
        if self.scan_all_ingredients {
            config.ingredient_scan = IngredientScan::Full;
        }
        if self.progress {
            config.show_progress = true;
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        2 => "trace",
        _ => "trace,hyper=debug,reqwest=debug", // -vvv shows everything including dependencies
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(cli.verbose >= 3) // Show thread IDs for -vvv
        .with_line_number(cli.verbose >= 3) // Show line numbers for -vvv
        .init();

    debug!("mealdb-analysis started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    if let Err(e) = run(cli).await {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ConfigLoader::new().load(cli.config.as_deref()).await?;
    cli.apply_overrides(&mut config);
    debug!("Effective configuration: {:?}", config);

    mealdb_analysis::pipeline::perform_analysis(&config).await?;
    Ok(())
}
