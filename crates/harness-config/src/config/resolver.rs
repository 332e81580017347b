//! Environment-based resolution of the runner configuration
//!
//! One total mapping from the process environment to the runner record: the
//! API key comes from `CYPRESS_OPEN_AI_KEY` when set and non-empty, the
//! placeholder otherwise, and every other field is a fixed default.
//! Resolution has no failure path.

use crate::config::api_key::{ApiKeySource, ResolvedApiKey};
use crate::config::defaults;
use crate::config::model::{EnvConfig, RunnerConfig};
use tracing::debug;

/// Resolve the runner configuration from the process environment
///
/// Performs the single environment lookup and returns the fully populated
/// record. Calling this twice under the same environment state yields equal
/// records.
pub fn resolve() -> RunnerConfig {
    let api_key = resolve_api_key();
    match &api_key.source {
        ApiKeySource::Environment { var_name } => {
            debug!(
                "Found OpenAI API key from environment variable {} ({})",
                var_name,
                api_key.masked_value()
            );
        }
        ApiKeySource::Fallback => {
            debug!("No OpenAI API key in the environment, using the placeholder");
        }
    }

    RunnerConfig {
        env: EnvConfig {
            openai_api_key: api_key.into_value(),
            ..EnvConfig::default()
        },
        ..RunnerConfig::default()
    }
}

/// Resolve the OpenAI API key with source information
pub fn resolve_api_key() -> ResolvedApiKey {
    ResolvedApiKey::from_env(defaults::API_KEY_ENV_VAR)
}
