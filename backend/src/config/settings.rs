//! On-disk generator settings
//!
//! A single JSON document carrying the seed policy and both configs. Every
//! section and field is optional; missing values take the defaults.
//!
//! ```json
//! {
//!   "seed": { "use_fixed_seed": true, "fixed_seed": 12345 },
//!   "generation": { "min_container_count": 5, "max_container_count": 5 },
//!   "pools": { "zone_names": ["North Yard", "South Yard"] }
//! }
//! ```

use crate::config::{ConfigError, GenerationConfig, PoolsConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Seed used when fixed seeding is on and none is configured
pub const DEFAULT_FIXED_SEED: i32 = 12345;

/// How the seed for a run is chosen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Use `fixed_seed` instead of a clock-derived seed
    pub use_fixed_seed: bool,

    pub fixed_seed: i32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            use_fixed_seed: true,
            fixed_seed: DEFAULT_FIXED_SEED,
        }
    }
}

impl SeedConfig {
    /// Seed for the next run
    ///
    /// The clock path is for interactive use only; reproducible runs keep
    /// `use_fixed_seed` on or pass a seed explicitly.
    pub fn run_seed(&self) -> i32 {
        if self.use_fixed_seed {
            return self.fixed_seed;
        }

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos())
            .unwrap_or(0);
        // Fold the 128-bit timestamp down to 32 bits
        (nanos ^ (nanos >> 32) ^ (nanos >> 64)) as u32 as i32
    }
}

/// Complete settings document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    pub seed: SeedConfig,
    pub generation: GenerationConfig,
    pub pools: PoolsConfig,
}

impl GeneratorSettings {
    /// Parse and validate settings from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let settings: GeneratorSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generation.validate()?;
        self.pools.validate()
    }
}
