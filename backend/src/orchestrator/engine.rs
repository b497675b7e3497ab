//! Orchestrator Engine
//!
//! Runs one day's generation pipeline end to end:
//!
//! ```text
//! generate_all(seed, generation, pools):
//! 1. Validate both configs (fail fast)
//! 2. Seed the random source
//! 3. Stage 1: containers
//! 4. Stage 2: task rule + target marking
//! 5. Stage 3: placement map + expected zones
//! 6. Stage 4: ships + round-robin distribution
//! 7. Bundle artifacts, checkpoints and config fingerprint
//! ```
//!
//! The engine holds no state between calls. Same seed + same config gives
//! an identical [`GenerationResult`].
//!
//! # Example
//!
//! ```rust
//! use portday_core::{generate_all, GenerationConfig, PoolsConfig};
//!
//! let config = GenerationConfig {
//!     min_container_count: 5,
//!     max_container_count: 5,
//!     ..GenerationConfig::default()
//! };
//! let pools = PoolsConfig::default();
//!
//! let first = generate_all(12345, &config, &pools).unwrap();
//! let second = generate_all(12345, &config, &pools).unwrap();
//!
//! assert_eq!(first.containers().len(), 5);
//! assert_eq!(first.determinism_report(), second.determinism_report());
//! ```

use crate::config::{ConfigError, GenerationConfig, PoolsConfig};
use crate::generation::{
    generate_containers, generate_placement, generate_ships, generate_task_rule, DrawCheckpoints,
};
use crate::models::{ContainerRecord, ShipRecord};
use crate::orchestrator::checkpoint::fingerprint_configs;
use crate::orchestrator::determinism::DeterminismReport;
use crate::rng::DeterministicRng;
use crate::rules::{PlacementMap, RuleTree};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ============================================================================
// Generation Result
// ============================================================================

/// Everything one pipeline run produced
///
/// In a result returned by [`generate_all`], containers are shared with the
/// ships that carry them: `containers()[i]` is the same allocation as
/// `ships()[i % ships().len()].containers()[i / ships().len()]`. A result
/// rebuilt through serde holds independent copies with equal content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    seed: i32,
    containers: Vec<Arc<ContainerRecord>>,
    ships: Vec<ShipRecord>,
    task_rule: RuleTree,
    placement: PlacementMap,
    checkpoints: DrawCheckpoints,

    /// SHA-256 fingerprint of the generation and pool configs
    config_hash: String,
}

impl GenerationResult {
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Containers in generation order
    pub fn containers(&self) -> &[Arc<ContainerRecord>] {
        &self.containers
    }

    /// Ships in generation order
    pub fn ships(&self) -> &[ShipRecord] {
        &self.ships
    }

    pub fn task_rule(&self) -> &RuleTree {
        &self.task_rule
    }

    pub fn placement(&self) -> &PlacementMap {
        &self.placement
    }

    pub fn draw_checkpoints(&self) -> DrawCheckpoints {
        self.checkpoints
    }

    /// Checkpoints as an ordered list, one per stage
    pub fn checkpoint_list(&self) -> Vec<u64> {
        self.checkpoints.as_array().to_vec()
    }

    pub fn config_hash(&self) -> &str {
        &self.config_hash
    }

    /// Containers selected as targets
    pub fn targets(&self) -> impl Iterator<Item = &Arc<ContainerRecord>> + '_ {
        self.containers.iter().filter(|c| c.is_target())
    }

    /// Hash every artifact for regression comparison
    pub fn determinism_report(&self) -> DeterminismReport {
        DeterminismReport::compute(&self.containers, &self.ships, &self.checkpoints)
    }
}

// ============================================================================
// Pipeline Entry Point
// ============================================================================

/// Generate one complete day from a seed and two configs
///
/// # Errors
///
/// Returns [`GenerationError::InvalidConfig`] when either config fails
/// validation. No stage runs in that case.
pub fn generate_all(
    seed: i32,
    generation: &GenerationConfig,
    pools: &PoolsConfig,
) -> Result<GenerationResult, GenerationError> {
    generation.validate()?;
    pools.validate()?;
    let config_hash = fingerprint_configs(generation, pools)?;

    let rng = DeterministicRng::new(seed);
    let containers = generate_containers(rng, generation, pools);
    let task_rule = generate_task_rule(containers, generation);
    let placement = generate_placement(task_rule, generation, pools);
    let ships = generate_ships(placement, generation, pools);

    let parts = ships.into_parts();
    let checkpoints = parts.checkpoints;

    info!(
        seed,
        containers = parts.containers.len(),
        ships = parts.ships.len(),
        targets = parts.containers.iter().filter(|c| c.is_target()).count(),
        checkpoints = ?checkpoints.as_array(),
        "generation complete"
    );

    Ok(GenerationResult {
        seed,
        containers: parts.containers,
        ships: parts.ships,
        task_rule: parts.task_rule,
        placement: parts.placement,
        checkpoints,
        config_hash,
    })
}
