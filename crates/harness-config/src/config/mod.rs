//! Configuration management for the e2e test harness

pub mod api_key;
pub mod defaults;
pub mod model;
pub mod resolver;

// Re-export public API
pub use api_key::{mask_api_key, ApiKeySource, ResolvedApiKey};
pub use model::{E2eConfig, EnvConfig, RunnerConfig};
pub use resolver::{resolve, resolve_api_key};
