use shopfront::catalog::CatalogRules;
use shopfront::config::{Config, ConfigError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

/// Test that Config::default() carries the business rules and UI timing.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.rules.low_stock_threshold, 10);
    assert_eq!(config.rules.discount_threshold, 100.0);
    assert_eq!(config.rules.discount_rate, 0.10);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.notification_ticks, 12);
    assert!(config.fixture.path.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("shopfront/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = write_config(
        r#"
[rules]
discount_rate = 0.25

[fixture]
path = "/tmp/items.json"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.rules.discount_rate, 0.25);
    assert_eq!(config.rules.low_stock_threshold, 10);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.fixture.path, Some(PathBuf::from("/tmp/items.json")));
}

#[test]
fn test_empty_file_is_default() {
    let (_dir, path) = write_config("");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.rules, CatalogRules::default());
}

#[test]
fn test_parse_error_reports_path() {
    let (_dir, path) = write_config("[rules\nlow_stock_threshold = ");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_full_discount() {
    let (_dir, path) = write_config("[rules]\ndiscount_rate = 1.0\n");
    match Config::load_from(&path).unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("discount_rate"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_zero_thresholds() {
    let mut config = Config::default();
    config.rules.low_stock_threshold = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.rules.discount_threshold = -1.0;
    assert!(config.validate().is_err());
}
