//! Checkpoints - Draw Counts and Config Fingerprints
//!
//! Two audit aids for a generated day:
//!
//! - the four draw-count checkpoints, which must never decrease from one
//!   stage to the next
//! - a fingerprint of the configuration the day was generated from, so two
//!   runs can be confirmed to share inputs before their outputs are compared
//!
//! # Critical Invariants
//!
//! - **Determinism**: Same seed + config produces identical checkpoints
//! - **Canonical hashing**: Key order in the serialized config never changes
//!   the fingerprint

use crate::config::{GenerationConfig, PoolsConfig};
use crate::generation::DrawCheckpoints;
use crate::orchestrator::GenerationError;
use serde::Serialize;
use sha2::{Digest, Sha256};

// ============================================================================
// Config Fingerprint
// ============================================================================

#[derive(Serialize)]
struct FingerprintInput<'a> {
    generation: &'a GenerationConfig,
    pools: &'a PoolsConfig,
}

/// Fingerprint of both configs as one SHA-256 hex digest
pub fn fingerprint_configs(
    generation: &GenerationConfig,
    pools: &PoolsConfig,
) -> Result<String, GenerationError> {
    compute_config_hash(&FingerprintInput { generation, pools })
}

/// Compute SHA256 hash of any serializable configuration
///
/// Object keys are sorted recursively before hashing so the digest only
/// depends on content.
pub fn compute_config_hash<T: Serialize>(config: &T) -> Result<String, GenerationError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    let value = serde_json::to_value(config)
        .map_err(|e| GenerationError::Serialization(format!("Config serialization failed: {}", e)))?;

    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let json = serde_json::to_string(&canonicalize(value))
        .map_err(|e| GenerationError::Serialization(format!("Config serialization failed: {}", e)))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

// ============================================================================
// Validation Functions
// ============================================================================

/// Check that draw counts never decrease across stages
///
/// Returns the index of the first stage whose checkpoint is lower than its
/// predecessor's.
pub fn validate_checkpoints(checkpoints: &DrawCheckpoints) -> Result<(), usize> {
    let values = checkpoints.as_array();
    match values.windows(2).position(|pair| pair[1] < pair[0]) {
        Some(index) => Err(index + 1),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_config_hash_deterministic() {
        let config = GenerationConfig::default();
        let hash1 = compute_config_hash(&config).unwrap();
        let hash2 = compute_config_hash(&config.clone()).unwrap();

        assert_eq!(hash1, hash2, "Same config should produce same hash");
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_fingerprint_changes_with_pools() {
        let generation = GenerationConfig::default();
        let pools = PoolsConfig::default();
        let mut renamed = pools.clone();
        renamed.zone_names[0] = "North Yard".to_string();

        assert_ne!(
            fingerprint_configs(&generation, &pools).unwrap(),
            fingerprint_configs(&generation, &renamed).unwrap(),
        );
    }

    #[test]
    fn test_validate_checkpoints() {
        let ordered = DrawCheckpoints {
            after_containers: 10,
            after_task_rule: 10,
            after_placement: 14,
            after_ships: 20,
        };
        assert_eq!(validate_checkpoints(&ordered), Ok(()));

        let broken = DrawCheckpoints {
            after_placement: 9,
            ..ordered
        };
        assert_eq!(validate_checkpoints(&broken), Err(2));
    }
}
