//! Tests for config file loading

use super::*;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_missing_file_uses_defaults_without_warning() {
    let dir = TempDir::new().unwrap();
    let result = load_config_from_path(&dir.path().join("absent.toml"));

    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_none());
}

#[test]
fn test_valid_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[search]
debounce_ms = 300
base_url = "http://cards.local"
"#,
    );

    let result = load_config_from_path(&path);

    assert!(result.warning.is_none());
    assert_eq!(result.config.search.debounce_ms, 300);
    assert_eq!(result.config.search.base_url, "http://cards.local");
    assert_eq!(result.config.search.max_suggestions, 10);
}

#[test]
fn test_invalid_toml_falls_back_with_warning() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[search\ndebounce_ms = ");

    let result = load_config_from_path(&path);

    assert_eq!(result.config, Config::default());
    let warning = result.warning.expect("warning expected");
    assert!(warning.contains("Config ignored"));
    assert!(warning.contains("Invalid config"));
}

#[test]
fn test_zero_max_suggestions_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[search]\nmax_suggestions = 0\n");

    let result = load_config_from_path(&path);

    assert_eq!(result.config, Config::default());
    assert!(result.warning.unwrap().contains("max_suggestions"));
}

#[test]
fn test_empty_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "");

    let result = load_config_from_path(&path);

    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_none());
}

#[test]
fn test_default_config_path_ends_with_app_dir() {
    if let Some(path) = default_config_path() {
        assert!(path.ends_with("cardsearch/config.toml"));
    }
}
