//! Config file loading
//!
//! A missing file is normal and yields defaults. A file that exists but
//! cannot be read or parsed also yields defaults, with a warning the UI can
//! surface, so a typo never prevents startup.

use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::CardsearchError;

/// Loaded configuration plus an optional warning for the user
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// `<config_dir>/cardsearch/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cardsearch").join("config.toml"))
}

/// Load from the default location
pub fn load_config() -> ConfigResult {
    match default_config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult::default(),
    }
}

/// Load from an explicit path
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult::default();
    }

    match read_config(path) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            log::warn!("Ignoring config {}: {}", path.display(), e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Config ignored ({}), using defaults", e)),
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config, CardsearchError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config =
        toml::from_str(&content).map_err(|e| CardsearchError::InvalidConfig(e.to_string()))?;

    if config.search.max_suggestions == 0 {
        return Err(CardsearchError::InvalidConfig(
            "max_suggestions must be at least 1".to_string(),
        ));
    }

    Ok(config)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
