//! API key resolution metadata and masking

use crate::config::defaults;
use std::env;
use std::fmt;

/// Source of the resolved API key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeySource {
    /// From an environment variable
    Environment {
        /// The environment variable name
        var_name: String,
    },
    /// The literal placeholder; the environment had no usable value
    Fallback,
}

impl fmt::Display for ApiKeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiKeySource::Environment { var_name } => {
                write!(f, "environment variable {}", var_name)
            }
            ApiKeySource::Fallback => write!(f, "fallback placeholder"),
        }
    }
}

/// A resolved API key with its source information
///
/// The value is always populated: resolution substitutes the placeholder
/// instead of failing, so there is no missing state to represent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedApiKey {
    /// The resolved key value
    value: String,
    /// Where the key came from
    pub source: ApiKeySource,
}

impl ResolvedApiKey {
    /// Resolve a key by looking up an environment variable
    ///
    /// A set, non-empty value wins; an unset, empty, or non-unicode value
    /// resolves to the placeholder.
    pub fn from_env(var_name: &str) -> Self {
        match env::var(var_name) {
            Ok(value) if !value.is_empty() => Self {
                value,
                source: ApiKeySource::Environment {
                    var_name: var_name.to_string(),
                },
            },
            _ => Self::fallback(),
        }
    }

    /// The placeholder key
    pub fn fallback() -> Self {
        Self {
            value: defaults::API_KEY_FALLBACK.to_string(),
            source: ApiKeySource::Fallback,
        }
    }

    /// Get the resolved key value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the key value, consuming self
    pub fn into_value(self) -> String {
        self.value
    }

    /// Check whether the placeholder was substituted
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, ApiKeySource::Fallback)
    }

    /// Get a display-safe (masked) version of the key
    pub fn masked_value(&self) -> String {
        mask_api_key(&self.value)
    }

    /// Get a log-friendly summary of where the key came from
    ///
    /// Never contains the raw key.
    pub fn source_summary(&self) -> String {
        format!("{} (from {})", self.masked_value(), self.source)
    }
}

impl fmt::Display for ResolvedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked_value())
    }
}

/// Mask an API key for safe display (e.g., "sk-...3xyz")
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }

    let prefix: String = chars[..3].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", prefix, suffix)
}
