//! Configuration for the content generator
//!
//! - `generation.rs`: counts, ratios and probabilities (`GenerationConfig`)
//! - `pools.rs`: content pools and the draw helpers over them (`PoolsConfig`)
//! - `settings.rs`: seed policy and the JSON settings document

pub mod generation;
pub mod pools;
pub mod settings;

pub use generation::GenerationConfig;
pub use pools::PoolsConfig;
pub use settings::{GeneratorSettings, SeedConfig};

use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: String) -> Self {
        ConfigError::InvalidArgument { field, reason }
    }
}
