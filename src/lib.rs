//! # mealdb-analysis
//!
//! Queries [TheMealDB](https://www.themealdb.com) and answers two questions:
//! which categor(ies) hold the most recipes, and which ingredient(s) are used
//! least across the desserts of one nationality. Both aggregates are also
//! drawn as stacked bar charts.
//!
//! ## Usage
//!
//! ```bash
//! mealdb-analysis [-v] [--config file.toml] [--area Canadian] [-o chart.svg]
//! ```
//!
//! ## Modules
//!
//! - `api` - `RecipeSource` abstraction over TheMealDB, HTTP client and mock
//! - `analysis` - Category/ingredient aggregation and extremal reports
//! - `chart` - Stacked SVG bar charts
//! - `config` - Layered configuration (defaults, TOML, environment)
//! - `pipeline` - Fetch, aggregate, report and plot in one run
pub mod analysis;
pub mod api;
pub mod chart;
pub mod config;
pub mod error;
pub mod pipeline;

pub use error::{Error, Result};
