//! Harness Config Library
//!
//! This crate resolves the configuration record the end-to-end test harness
//! consumes: fixed base URLs and timeout, plus an OpenAI API key read from
//! the `CYPRESS_OPEN_AI_KEY` environment variable with a placeholder
//! fallback. Resolution is total: it cannot fail under any environment
//! state.

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::api_key::{mask_api_key, ApiKeySource, ResolvedApiKey};
pub use config::model::{E2eConfig, EnvConfig, RunnerConfig};
pub use config::resolver::{resolve, resolve_api_key};
pub use error::{ConfigError, ConfigResult};
