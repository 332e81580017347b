//! Error types for the harness configuration crate

use thiserror::Error;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Error type for the fallible edges of the crate
///
/// Resolution itself is total and never constructs one of these; only the
/// JSON surface does.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    /// Configuration usage errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl ConfigError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string())
    }
}
