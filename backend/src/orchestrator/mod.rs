//! Orchestrator - pipeline entry point
//!
//! - `engine.rs`: `generate_all` and the terminal `GenerationResult`
//! - `checkpoint.rs`: draw-count checks and config fingerprints
//! - `determinism.rs`: regression hashes over a generated day

pub mod checkpoint;
pub mod determinism;
pub mod engine;

pub use checkpoint::{compute_config_hash, fingerprint_configs, validate_checkpoints};
pub use determinism::DeterminismReport;
pub use engine::{generate_all, GenerationError, GenerationResult};
