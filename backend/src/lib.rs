//! Port Day Core - Deterministic Content Generator
//!
//! Turns one integer seed plus tunable configuration into a reproducible
//! day of port content: containers with ground-truth attributes, a task
//! rule deciding which containers are targets, a placement map assigning
//! storage zones, and the ships that carry everything in.
//!
//! # Architecture
//!
//! - **rng**: Deterministic random source with a draw counter
//! - **models**: Domain records (ContainerRecord, ShipRecord)
//! - **rules**: Rule trees, conditions and placement maps
//! - **config**: Generation tuning, content pools, JSON settings
//! - **generation**: The four typed pipeline stages
//! - **orchestrator**: `generate_all` and determinism hashes
//!
//! # Critical Invariants
//!
//! 1. All randomness flows through one seeded `DeterministicRng`
//! 2. Stages run in a fixed order enforced by their argument types
//! 3. Same seed + same config → identical output and draw counts

// Module declarations
pub mod config;
pub mod generation;
pub mod models;
pub mod orchestrator;
pub mod rng;
pub mod rules;

// Re-exports for convenience
pub use config::{ConfigError, GenerationConfig, GeneratorSettings, PoolsConfig, SeedConfig};
pub use generation::DrawCheckpoints;
pub use models::{ContainerFields, ContainerRecord, ShipRecord, NO_ZONE};
pub use orchestrator::{
    generate_all, DeterminismReport, GenerationError, GenerationResult,
};
pub use rng::DeterministicRng;
pub use rules::{
    validate_rule_tree, Connectives, FieldKind, LogicalOperator, PlacementMap, RuleCondition,
    RuleTree, RuleValidationError,
};
