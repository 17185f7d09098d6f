//! Configuration
//!
//! Fixed search parameters, read once at startup from an optional TOML file.

mod loader;
mod types;

pub use loader::{ConfigResult, default_config_path, load_config, load_config_from_path};
pub use types::{
    Config, DEBOUNCE_DELAY_MS, DEFAULT_BASE_URL, MAX_SUGGESTIONS, REQUEST_TIMEOUT_MS,
    SUGGEST_ENDPOINT, SearchConfig,
};
