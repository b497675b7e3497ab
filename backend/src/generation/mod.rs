//! Procedural content generation stages
//!
//! Four stages run strictly in order, threading one random source:
//!
//! 1. **containers**: base population with unique IDs
//! 2. **task_rule**: target selection and the rule that classifies them
//! 3. **placement**: coverage selection and the key → zone map
//! 4. **ships**: ship roster and round-robin container distribution
//!
//! # Key Principles
//!
//! 1. **Determinism**: Same seed + same config → same content, same draw counts
//! 2. **Type-enforced ordering**: each stage consumes the previous stage's result
//! 3. **Total output**: bounded retries fall back deterministically, never fail

pub mod containers;
pub mod placement;
pub mod ships;
pub mod stages;
pub mod task_rule;

pub use containers::generate_containers;
pub use placement::{build_placement_map, generate_placement};
pub use ships::generate_ships;
pub use stages::{
    ContainersGenerated, DrawCheckpoints, PlacementGenerated, ShipsGenerated, ShipsGeneratedParts,
    TaskRuleGenerated,
};
pub use task_rule::generate_task_rule;

use crate::rng::DeterministicRng;

/// Pick `count` distinct indices out of `0..len` by shuffle-then-take-prefix
///
/// When `count >= len` every index is returned in order and no draws are
/// consumed; otherwise a copy of the index list is shuffled (`len - 1`
/// draws) and its first `count` entries are returned.
pub(crate) fn select_indices(rng: &mut DeterministicRng, len: usize, count: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    if count >= len {
        return indices;
    }

    rng.shuffle_in_place(&mut indices);
    indices.truncate(count);
    indices
}
