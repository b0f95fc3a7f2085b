use std::path::PathBuf;

use shelfview::config::{Config, ConfigError};
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn full_config_parses() {
    let (_dir, path) = write_config(
        r#"
[catalog]
path = "/tmp/catalog.json"

[favorites]
path = "/tmp/favorites.json"

[search]
debounce_ms = 200

[ui]
tick_ms = 100
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.catalog.path, Some(PathBuf::from("/tmp/catalog.json")));
    assert_eq!(
        config.favorites.path,
        Some(PathBuf::from("/tmp/favorites.json"))
    );
    assert_eq!(config.search.debounce_ms, 200);
    assert_eq!(config.ui.tick_ms, 100);
}

#[test]
fn empty_file_yields_defaults() {
    let (_dir, path) = write_config("");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let result = Config::load_from(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let (_dir, path) = write_config("not toml [");
    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn zero_debounce_fails_validation() {
    let (_dir, path) = write_config("[search]\ndebounce_ms = 0\n");
    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::Validation { .. })));
}

#[test]
fn zero_tick_fails_validation() {
    let config: Config = toml::from_str("[ui]\ntick_ms = 0\n").unwrap();
    assert!(config.validate().is_err());
}
