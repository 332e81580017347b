//! Configuration data model for the runner record

use crate::config::defaults;
use crate::error::ConfigResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Runner-level settings for the e2e block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct E2eConfig {
    /// Base URL the runner points the browser at
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    /// Default command timeout in milliseconds
    #[serde(rename = "defaultCommandTimeout")]
    pub default_command_timeout_ms: u64,
}

impl Default for E2eConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::BASE_URL.to_string(),
            default_command_timeout_ms: defaults::DEFAULT_COMMAND_TIMEOUT_MS,
        }
    }
}

/// Values surfaced to the tests through the runner's env block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Base URL for backend API calls made from the tests
    #[serde(rename = "baseApiURL")]
    pub base_api_url: String,
    /// Resolved OpenAI API key
    #[serde(rename = "OPENAI_API_KEY")]
    pub openai_api_key: String,
    /// Base URL of the locally served application instance
    #[serde(rename = "localBaseUrl")]
    pub local_base_url: String,
    /// Feature flag forwarded to the application under test
    #[serde(rename = "NEXT_PUBLIC_FF")]
    pub feature_flag_enabled: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            base_api_url: defaults::BASE_API_URL.to_string(),
            openai_api_key: defaults::API_KEY_FALLBACK.to_string(),
            local_base_url: defaults::LOCAL_BASE_URL.to_string(),
            feature_flag_enabled: defaults::FEATURE_FLAG_ENABLED,
        }
    }
}

/// Configuration record consumed by the e2e test runner
///
/// Constructed once per process by [`crate::config::resolver::resolve`] and
/// read-only afterwards. Every field is always populated; the record has no
/// optional or empty state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RunnerConfig {
    /// Runner-level e2e settings
    pub e2e: E2eConfig,
    /// Values surfaced to tests via the runner environment
    pub env: EnvConfig,
}

impl RunnerConfig {
    /// Create a record with every field at its default (placeholder API key)
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the base URL the runner points the browser at
    pub fn base_url(&self) -> &str {
        &self.e2e.base_url
    }

    /// Get the default command timeout in milliseconds
    pub fn default_command_timeout_ms(&self) -> u64 {
        self.e2e.default_command_timeout_ms
    }

    /// Get the default command timeout as Duration
    pub fn default_command_timeout(&self) -> Duration {
        Duration::from_millis(self.e2e.default_command_timeout_ms)
    }

    /// Get the base URL for backend API calls made from the tests
    pub fn base_api_url(&self) -> &str {
        &self.env.base_api_url
    }

    /// Get the resolved OpenAI API key
    pub fn openai_api_key(&self) -> &str {
        &self.env.openai_api_key
    }

    /// Get the base URL of the locally served application instance
    pub fn local_base_url(&self) -> &str {
        &self.env.local_base_url
    }

    /// Whether the NEXT_PUBLIC_FF feature flag is enabled
    pub fn feature_flag_enabled(&self) -> bool {
        self.env.feature_flag_enabled
    }

    /// Render the record as the JSON value the runner consumes
    pub fn to_value(&self) -> ConfigResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Render the record as pretty-printed JSON
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a record from runner-shaped JSON
    ///
    /// Missing fields fall back to their defaults, so a partial record is
    /// still fully populated after parsing.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_values() {
        let config = RunnerConfig::default();
        assert_eq!(config.base_url(), "http://localhost");
        assert_eq!(config.default_command_timeout_ms(), 8000);
        assert_eq!(config.base_api_url(), "http://localhost/api");
        assert_eq!(config.openai_api_key(), "your_api_key_here");
        assert_eq!(config.local_base_url(), "http://localhost");
        assert!(!config.feature_flag_enabled());
    }

    #[test]
    fn test_timeout_as_duration() {
        let config = RunnerConfig::default();
        assert_eq!(config.default_command_timeout(), Duration::from_millis(8000));
    }

    #[test]
    fn test_wire_keys() {
        let value = RunnerConfig::default().to_value().unwrap();
        assert_eq!(value["e2e"]["baseUrl"], "http://localhost");
        assert_eq!(value["e2e"]["defaultCommandTimeout"], 8000);
        assert_eq!(value["env"]["baseApiURL"], "http://localhost/api");
        assert_eq!(value["env"]["OPENAI_API_KEY"], "your_api_key_here");
        assert_eq!(value["env"]["localBaseUrl"], "http://localhost");
        assert_eq!(value["env"]["NEXT_PUBLIC_FF"], false);
    }

    #[test]
    fn test_json_round_trip() {
        let config = RunnerConfig {
            env: EnvConfig {
                openai_api_key: "sk-test-round-trip".to_string(),
                ..EnvConfig::default()
            },
            ..RunnerConfig::default()
        };

        let json = config.to_json().unwrap();
        let parsed = RunnerConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let parsed = RunnerConfig::from_json(r#"{"env": {"OPENAI_API_KEY": "sk-partial"}}"#).unwrap();
        assert_eq!(parsed.openai_api_key(), "sk-partial");
        assert_eq!(parsed.base_url(), "http://localhost");
        assert_eq!(parsed.default_command_timeout_ms(), 8000);
        assert!(!parsed.feature_flag_enabled());
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let result = RunnerConfig::from_json("{not json");
        assert!(result.is_err());
    }

    #[test]
    fn test_records_compare_field_for_field() {
        assert_eq!(RunnerConfig::new(), RunnerConfig::default());

        let mut other = RunnerConfig::default();
        other.env.openai_api_key = "sk-different".to_string();
        assert_ne!(other, RunnerConfig::default());
    }
}
