// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

/// Quiet period after the last keystroke before a lookup is issued
pub const DEBOUNCE_DELAY_MS: u64 = 150;

/// Maximum number of suggestions shown in the dropdown
pub const MAX_SUGGESTIONS: usize = 10;

/// Path of the suggestion lookup, relative to the base URL
pub const SUGGEST_ENDPOINT: &str = "/suggest";

/// Server hosting the suggestion lookup
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Upper bound on a single lookup, so a hung request cannot linger
pub const REQUEST_TIMEOUT_MS: u64 = 5000;

/// Search configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u64,
    pub max_suggestions: usize,
    pub base_url: String,
    pub suggest_endpoint: String,
    pub request_timeout_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            debounce_ms: DEBOUNCE_DELAY_MS,
            max_suggestions: MAX_SUGGESTIONS,
            base_url: DEFAULT_BASE_URL.to_string(),
            suggest_endpoint: SUGGEST_ENDPOINT.to_string(),
            request_timeout_ms: REQUEST_TIMEOUT_MS,
        }
    }
}

impl SearchConfig {
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Full lookup URL: base URL joined with the endpoint path
    pub fn suggest_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.suggest_endpoint.trim_start_matches('/')
        )
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = SearchConfig::default();
        assert_eq!(config.debounce_ms, 150);
        assert_eq!(config.max_suggestions, 10);
        assert_eq!(config.suggest_endpoint, "/suggest");
        assert_eq!(config.debounce_delay(), Duration::from_millis(150));
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_suggest_url_joins_slashes() {
        let mut config = SearchConfig::default();
        assert_eq!(config.suggest_url(), "http://localhost:8080/suggest");

        config.base_url = "http://cards.local/".to_string();
        config.suggest_endpoint = "api/suggest".to_string();
        assert_eq!(config.suggest_url(), "http://cards.local/api/suggest");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str("[search]\nmax_suggestions = 5\n").unwrap();
        assert_eq!(config.search.max_suggestions, 5);
        assert_eq!(config.search.debounce_ms, DEBOUNCE_DELAY_MS);
        assert_eq!(config.search.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let config: Result<Config, _> = toml::from_str("[search]\ndebounce_ms = \"fast\"\n");
        assert!(config.is_err());
    }

    // For any combination of present and absent fields, parsing succeeds and
    // absent fields take their defaults
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_section in prop::bool::ANY,
            debounce in prop::option::of(0u64..5000),
            max in prop::option::of(1usize..50)
        ) {
            let mut toml_content = String::new();
            if include_section {
                toml_content.push_str("[search]\n");
                if let Some(d) = debounce {
                    toml_content.push_str(&format!("debounce_ms = {}\n", d));
                }
                if let Some(m) = max {
                    toml_content.push_str(&format!("max_suggestions = {}\n", m));
                }
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse: {}", toml_content);
            let config = config.unwrap();

            let expected_debounce = debounce.filter(|_| include_section).unwrap_or(DEBOUNCE_DELAY_MS);
            let expected_max = max.filter(|_| include_section).unwrap_or(MAX_SUGGESTIONS);
            prop_assert_eq!(config.search.debounce_ms, expected_debounce);
            prop_assert_eq!(config.search.max_suggestions, expected_max);
            prop_assert_eq!(config.search.suggest_endpoint, SUGGEST_ENDPOINT);
        }
    }
}
