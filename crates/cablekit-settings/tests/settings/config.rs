use cablekit_core::{Catalog, Connection, Device, PathType, Point};
use cablekit_routing::AggregationStrategy;
use cablekit_settings::{Config, ConfigError, SettingsError};
use tempfile::TempDir;

fn custom_config() -> Config {
    let mut config = Config::new();
    config.routing.path_type = PathType::Ceiling;
    config.routing.ceiling_height = 2.7;
    config.routing.conduit_required = true;
    config.aggregation.strategy = AggregationStrategy::Parallel;
    config
}

#[test]
fn test_toml_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let config = custom_config();
    config.save_to_file(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("path_type = \"ceiling\""));
    assert!(content.contains("strategy = \"parallel\""));

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_json_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let config = custom_config();
    config.save_to_file(&path).unwrap();
    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[routing]\nslack_percentage = 15.0\n").unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.routing.slack_percentage, 15.0);
    assert!(config.routing.include_slack);
    assert_eq!(config.routing.ceiling_height, 3.0);
    assert_eq!(config.aggregation.strategy, AggregationStrategy::Sequential);
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    let err = Config::new().save_to_file(&path).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::Config(ConfigError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_invalid_values_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[routing]\nceiling_height = -2.0\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::Config(ConfigError::ValueOutOfRange { .. })
    ));
}

#[test]
fn test_missing_catalog_file_rejected() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::new();
    config.catalog.catalog_path = Some(dir.path().join("absent.json"));

    assert!(matches!(
        config.validate(),
        Err(SettingsError::Config(ConfigError::MissingCatalog(_)))
    ));
}

#[test]
fn test_load_or_default_without_file() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_or_default(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_engine_from_custom_catalog() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("catalog.json");
    let mut file = Catalog::standard().to_file();
    file.cables.retain(|c| c.id == "fiber-os2");
    std::fs::write(&catalog_path, serde_json::to_string(&file).unwrap()).unwrap();

    let mut config = Config::new();
    config.routing.include_slack = false;
    config.catalog.catalog_path = Some(catalog_path);

    let engine = config.build_engine().unwrap();
    assert_eq!(engine.catalog().cables.len(), 1);

    let devices = vec![
        Device::new("a", Point::new(0.0, 0.0)),
        Device::new("b", Point::new(30.0, 40.0)),
    ];
    let connections = vec![
        Connection::new("c1", "a", "b", "fiber-os2"),
        Connection::new("c2", "a", "b", "utp-cat6"),
    ];
    let report = engine.generate_cable_report(&connections, &devices);
    assert_eq!(report.total_cable_length, 50.0);
    assert_eq!(report.skipped.len(), 1);
}

#[test]
fn test_malformed_catalog_is_catalog_error() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("catalog.json");
    std::fs::write(&catalog_path, "{ \"cables\": 3 }").unwrap();

    let mut config = Config::new();
    config.catalog.catalog_path = Some(catalog_path);
    assert!(matches!(
        config.build_engine(),
        Err(SettingsError::Catalog(_))
    ));
}
