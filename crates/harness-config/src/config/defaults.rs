//! Default values for the runner configuration record
//!
//! Every literal the resolver emits lives here as a named constant, so the
//! record defaults, the resolver, and the tests all read from one place.

use std::time::Duration;

/// Base URL the runner points the browser at.
pub const BASE_URL: &str = "http://localhost";

/// Default command timeout in milliseconds (8 seconds).
pub const DEFAULT_COMMAND_TIMEOUT_MS: u64 = 8000;

/// Base URL for backend API calls made from the tests.
pub const BASE_API_URL: &str = "http://localhost/api";

/// Base URL of the locally served application instance.
pub const LOCAL_BASE_URL: &str = "http://localhost";

/// Environment variable consulted for the OpenAI API key.
pub const API_KEY_ENV_VAR: &str = "CYPRESS_OPEN_AI_KEY";

/// Placeholder substituted when the environment has no usable key.
pub const API_KEY_FALLBACK: &str = "your_api_key_here";

/// Default state of the NEXT_PUBLIC_FF feature flag.
pub const FEATURE_FLAG_ENABLED: bool = false;

/// Get the default command timeout as Duration
pub fn default_command_timeout() -> Duration {
    Duration::from_millis(DEFAULT_COMMAND_TIMEOUT_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_defaults() {
        assert_eq!(BASE_URL, "http://localhost");
        assert_eq!(BASE_API_URL, "http://localhost/api");
        assert_eq!(LOCAL_BASE_URL, "http://localhost");
    }

    #[test]
    fn test_timeout_default() {
        assert_eq!(DEFAULT_COMMAND_TIMEOUT_MS, 8000);
        assert_eq!(default_command_timeout(), Duration::from_millis(8000));
    }

    #[test]
    fn test_api_key_defaults() {
        assert_eq!(API_KEY_ENV_VAR, "CYPRESS_OPEN_AI_KEY");
        assert_eq!(API_KEY_FALLBACK, "your_api_key_here");
    }

    #[test]
    fn test_feature_flag_default() {
        assert!(!FEATURE_FLAG_ENABLED);
    }
}
