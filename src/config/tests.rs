use super::*;
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

fn setup_test_dir() -> TempDir {
    TempDir::new().unwrap()
}

fn write_test_config(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let path = dir.path().join(filename);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_default_config() {
    let config = AnalysisConfig::default();

    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.area, "Canadian");
    assert_eq!(config.target_category, "Dessert");
    assert_eq!(config.ingredient_scan, IngredientScan::StopAtNull);
    assert_eq!(config.chart_path, PathBuf::from("mealdb_analysis.svg"));
    assert!(config.render_chart);
    assert!(!config.show_progress);
    assert!(config.validate().is_ok());
}

#[tokio::test]
async fn test_load_partial_toml_keeps_defaults() {
    let temp_dir = setup_test_dir();
    let path = write_test_config(
        &temp_dir,
        "custom.toml",
        r#"
area = "British"
ingredient_scan = "full"
chart_width = 1200
"#,
    );

    let config = ConfigLoader::load_file(&path).await.unwrap();

    assert_eq!(config.area, "British");
    assert_eq!(config.ingredient_scan, IngredientScan::Full);
    assert_eq!(config.chart_width, 1200);
    assert_eq!(config.chart_height, 800);
    assert_eq!(config.target_category, "Dessert");
}

#[tokio::test]
async fn test_load_from_config_dir() {
    let temp_dir = setup_test_dir();
    write_test_config(&temp_dir, "config.toml", "target_category = \"Starter\"\n");

    let loader = ConfigLoader::with_config_dir(temp_dir.path());
    let config = loader.load(None).await.unwrap();

    assert_eq!(config.target_category, "Starter");
}

#[tokio::test]
async fn test_missing_implicit_config_uses_defaults() {
    let temp_dir = setup_test_dir();
    let loader = ConfigLoader::with_config_dir(temp_dir.path().join("absent"));

    let config = loader.load(None).await.unwrap();

    assert_eq!(config.area, DEFAULT_AREA);
}

#[tokio::test]
async fn test_missing_explicit_config_is_error() {
    let temp_dir = setup_test_dir();
    let loader = ConfigLoader::with_config_dir(temp_dir.path());

    let result = loader.load(Some(&temp_dir.path().join("nope.toml"))).await;

    assert!(matches!(result, Err(Error::Io(_))));
}

#[tokio::test]
async fn test_invalid_toml_is_error() {
    let temp_dir = setup_test_dir();
    let path = write_test_config(&temp_dir, "bad.toml", "chart_width = \"wide\"\n");

    let result = ConfigLoader::load_file(&path).await;

    assert!(matches!(result, Err(Error::Toml(_))));
}

#[test]
fn test_env_overrides() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("MEALDB_BASE_URL", "http://localhost:8080/api"),
        ("MEALDB_AREA", "Japanese"),
        ("MEALDB_CATEGORY", "Side"),
        ("MEALDB_CHART_PATH", "/tmp/out.svg"),
        ("MEALDB_TIMEOUT_SECS", "5"),
    ]);

    let mut config = AnalysisConfig::new();
    config.merge_env_with(|key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.base_url, "http://localhost:8080/api");
    assert_eq!(config.area, "Japanese");
    assert_eq!(config.target_category, "Side");
    assert_eq!(config.chart_path, PathBuf::from("/tmp/out.svg"));
    assert_eq!(config.request_timeout_secs, 5);
}

#[test]
fn test_invalid_timeout_env_is_ignored() {
    let mut config = AnalysisConfig::new();
    config.merge_env_with(|key| (key == "MEALDB_TIMEOUT_SECS").then(|| "soon".to_string()));

    assert_eq!(config.request_timeout_secs, 30);
}

#[test]
fn test_api_base_appends_trailing_slash() {
    let config = AnalysisConfig {
        base_url: "http://localhost:8080/api/json/v1/1".to_string(),
        ..AnalysisConfig::default()
    };

    let base = config.api_base().unwrap();
    assert_eq!(base.as_str(), "http://localhost:8080/api/json/v1/1/");
    assert_eq!(
        base.join("categories.php").unwrap().as_str(),
        "http://localhost:8080/api/json/v1/1/categories.php"
    );
}

#[test]
fn test_validate_rejects_bad_values() {
    let bad_url = AnalysisConfig {
        base_url: "not a url".to_string(),
        ..AnalysisConfig::default()
    };
    assert!(matches!(bad_url.validate(), Err(Error::Url(_))));

    let bad_scheme = AnalysisConfig {
        base_url: "ftp://example.com/".to_string(),
        ..AnalysisConfig::default()
    };
    assert!(matches!(bad_scheme.validate(), Err(Error::Config(_))));

    let zero_timeout = AnalysisConfig {
        request_timeout_secs: 0,
        ..AnalysisConfig::default()
    };
    assert!(matches!(zero_timeout.validate(), Err(Error::Config(_))));

    let blank_area = AnalysisConfig {
        area: "  ".to_string(),
        ..AnalysisConfig::default()
    };
    assert!(matches!(blank_area.validate(), Err(Error::Config(_))));
}

#[test]
fn test_zero_chart_size_allowed_when_not_rendering() {
    let config = AnalysisConfig {
        render_chart: false,
        chart_width: 0,
        ..AnalysisConfig::default()
    };

    assert!(config.validate().is_ok());
}
