//! Determinism validation hashes
//!
//! Short, stable fingerprints of a generated day for regression checks:
//! same seed + same config must give the same five hashes.
//!
//! | Hash      | Canonical input                                        |
//! |-----------|--------------------------------------------------------|
//! | container | container IDs in generation order, comma-joined        |
//! | ship      | ship names in generation order, comma-joined           |
//! | target    | sorted IDs of containers with `is_target`              |
//! | placement | sorted `id:zone` pairs for containers with a zone      |
//! | pipeline  | the four hashes above plus checkpoints, `|`-joined      |
//!
//! Each digest is SHA-256 over the UTF-8 input, truncated to its first 8
//! bytes and rendered as 16 lowercase hex characters. Degenerate inputs map
//! to sentinel strings so "no data" never looks like a real digest.

use crate::generation::DrawCheckpoints;
use crate::models::{ContainerRecord, ShipRecord};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::borrow::Borrow;

/// Empty container or ship list
pub const EMPTY: &str = "EMPTY";

/// Containers exist but none is a target
pub const NO_TARGETS: &str = "NO_TARGETS";

/// Containers exist but none has an expected zone
pub const NO_PLACEMENTS: &str = "NO_PLACEMENTS";

/// Empty canonical string handed to the digest
pub const EMPTY_INPUT: &str = "EMPTY_INPUT";

/// Missing checkpoint list in the pipeline hash
pub const NO_CHECKPOINTS: &str = "NO_CHECKPOINTS";

const SHORT_HASH_BYTES: usize = 8;

fn record<C: Borrow<ContainerRecord>>(container: &C) -> &ContainerRecord {
    container.borrow()
}

/// First 8 bytes of SHA-256 as hex, or [`EMPTY_INPUT`] for an empty string
///
/// ```
/// use portday_core::orchestrator::determinism::short_hash;
///
/// assert_eq!(short_hash("abc"), "ba7816bf8f01cfea");
/// assert_eq!(short_hash(""), "EMPTY_INPUT");
/// ```
pub fn short_hash(input: &str) -> String {
    if input.is_empty() {
        return EMPTY_INPUT.to_string();
    }

    let digest = Sha256::digest(input.as_bytes());
    digest[..SHORT_HASH_BYTES]
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect()
}

/// Hash of the container-ID sequence
///
/// Accepts owned records as well as the shared `Arc` handles of a
/// finished day.
pub fn container_hash<C: Borrow<ContainerRecord>>(containers: &[C]) -> String {
    if containers.is_empty() {
        return EMPTY.to_string();
    }

    let ids: Vec<&str> = containers.iter().map(|c| record(c).container_id()).collect();
    short_hash(&ids.join(","))
}

/// Hash of the ship-name sequence
pub fn ship_hash(ships: &[ShipRecord]) -> String {
    if ships.is_empty() {
        return EMPTY.to_string();
    }

    let names: Vec<&str> = ships.iter().map(|s| s.ship_name()).collect();
    short_hash(&names.join(","))
}

/// Hash of the sorted target-ID set
pub fn target_hash<C: Borrow<ContainerRecord>>(containers: &[C]) -> String {
    if containers.is_empty() {
        return EMPTY.to_string();
    }

    let mut ids: Vec<&str> = containers
        .iter()
        .map(record)
        .filter(|c| c.is_target())
        .map(|c| c.container_id())
        .collect();
    if ids.is_empty() {
        return NO_TARGETS.to_string();
    }

    ids.sort_unstable();
    short_hash(&ids.join(","))
}

/// Hash of the sorted `containerId:zoneId` pairs
pub fn placement_hash<C: Borrow<ContainerRecord>>(containers: &[C]) -> String {
    if containers.is_empty() {
        return EMPTY.to_string();
    }

    let mut pairs: Vec<String> = containers
        .iter()
        .map(record)
        .filter(|c| c.has_expected_zone())
        .map(|c| format!("{}:{}", c.container_id(), c.expected_zone_id()))
        .collect();
    if pairs.is_empty() {
        return NO_PLACEMENTS.to_string();
    }

    pairs.sort_unstable();
    short_hash(&pairs.join(","))
}

/// Combined hash over the four artifact hashes and the checkpoints
pub fn pipeline_hash<C: Borrow<ContainerRecord>>(
    containers: &[C],
    ships: &[ShipRecord],
    checkpoints: Option<&DrawCheckpoints>,
) -> String {
    let checkpoint_text = match checkpoints {
        Some(checkpoints) => checkpoints
            .as_array()
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(","),
        None => NO_CHECKPOINTS.to_string(),
    };

    let data = [
        container_hash(containers),
        ship_hash(ships),
        target_hash(containers),
        placement_hash(containers),
        checkpoint_text,
    ]
    .join("|");
    short_hash(&data)
}

/// All five hashes of one generated day
///
/// Two reports compare equal exactly when every hash matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeterminismReport {
    pub container_hash: String,
    pub ship_hash: String,
    pub target_hash: String,
    pub placement_hash: String,
    pub pipeline_hash: String,
}

impl DeterminismReport {
    pub fn compute<C: Borrow<ContainerRecord>>(
        containers: &[C],
        ships: &[ShipRecord],
        checkpoints: &DrawCheckpoints,
    ) -> Self {
        Self {
            container_hash: container_hash(containers),
            ship_hash: ship_hash(ships),
            target_hash: target_hash(containers),
            placement_hash: placement_hash(containers),
            pipeline_hash: pipeline_hash(containers, ships, Some(checkpoints)),
        }
    }

    /// Names of the hashes that differ from `other`
    pub fn mismatches(&self, other: &DeterminismReport) -> Vec<&'static str> {
        let pairs = [
            ("container", &self.container_hash, &other.container_hash),
            ("ship", &self.ship_hash, &other.ship_hash),
            ("target", &self.target_hash, &other.target_hash),
            ("placement", &self.placement_hash, &other.placement_hash),
            ("pipeline", &self.pipeline_hash, &other.pipeline_hash),
        ];
        pairs
            .into_iter()
            .filter(|(_, left, right)| left != right)
            .map(|(name, _, _)| name)
            .collect()
    }
}

impl std::fmt::Display for DeterminismReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "container: {}", self.container_hash)?;
        writeln!(f, "ship:      {}", self.ship_hash)?;
        writeln!(f, "target:    {}", self.target_hash)?;
        writeln!(f, "placement: {}", self.placement_hash)?;
        write!(f, "pipeline:  {}", self.pipeline_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContainerFields;
    use std::sync::Arc;

    fn make(id: &str) -> ContainerRecord {
        ContainerRecord::new(ContainerFields::new(id, "Varna", "Food"))
    }

    #[test]
    fn test_short_hash_is_sixteen_hex_chars() {
        let hash = short_hash("TRBU-1001,TRBU-1002");
        assert_eq!(hash.len(), 16);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_sentinels() {
        let none: Vec<ContainerRecord> = Vec::new();
        assert_eq!(container_hash(&none), EMPTY);
        assert_eq!(target_hash(&none), EMPTY);
        assert_eq!(placement_hash(&none), EMPTY);
        assert_eq!(ship_hash(&[]), EMPTY);

        let plain = vec![make("A-1")];
        assert_eq!(target_hash(&plain), NO_TARGETS);
        assert_eq!(placement_hash(&plain), NO_PLACEMENTS);
    }

    #[test]
    fn test_target_hash_ignores_order() {
        let mut first = vec![make("B-2"), make("A-1")];
        let mut second = vec![make("A-1"), make("B-2")];
        for c in first.iter_mut().chain(second.iter_mut()) {
            c.set_target(true);
        }
        assert_eq!(target_hash(&first), target_hash(&second));
        assert_ne!(container_hash(&first), container_hash(&second));
    }

    #[test]
    fn test_arc_and_owned_hash_alike() {
        let mut owned = vec![make("A-1"), make("A-2")];
        owned[1].set_expected_zone(3);
        let shared: Vec<Arc<ContainerRecord>> = owned.iter().cloned().map(Arc::new).collect();
        assert_eq!(placement_hash(&owned), placement_hash(&shared));
        assert_eq!(placement_hash(&owned), short_hash("A-2:3"));
    }

    #[test]
    fn test_pipeline_hash_sees_checkpoints() {
        let containers = vec![make("A-1")];
        let checkpoints = DrawCheckpoints {
            after_containers: 4,
            after_task_rule: 4,
            after_placement: 5,
            after_ships: 9,
        };
        let with = pipeline_hash(&containers, &[], Some(&checkpoints));
        let without = pipeline_hash(&containers, &[], None);
        assert_ne!(with, without);
    }
}
