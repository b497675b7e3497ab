//! Stage 3: placement rule generation
//!
//! Chooses which field keys the placement map, selects the covered
//! containers and assigns each distinct key a zone:
//!
//! - Cargo-based: every container of one cargo type shares a zone
//! - ID-based: every container gets its own zone draw
//! - Origin-based: every container from one port shares a zone
//!
//! The candidate list offers cargo- and ID-based keys only, driven by the
//! two config toggles. Origin-based maps are built by calling
//! [`build_placement_map`] directly; the stage itself never selects them.
//!
//! Draw order: key kind, coverage shuffle, then one zone draw per new key.

use crate::config::{GenerationConfig, PoolsConfig};
use crate::generation::select_indices;
use crate::generation::stages::{PlacementGenerated, TaskRuleGenerated};
use crate::models::ContainerRecord;
use crate::rng::DeterministicRng;
use crate::rules::{FieldKind, PlacementMap};
use std::collections::HashMap;
use tracing::debug;

/// Build the placement map and write expected zones onto covered containers
pub fn generate_placement(
    previous: TaskRuleGenerated,
    config: &GenerationConfig,
    pools: &PoolsConfig,
) -> PlacementGenerated {
    let mut previous = previous;
    let stage = &mut previous.previous;

    let key_kind = decide_key_kind(&mut stage.rng, config);

    let container_count = stage.containers.len();
    let coverage_count = resolve_coverage_count(
        config.calculate_coverage_count(container_count),
        container_count,
    );
    let selected = select_indices(&mut stage.rng, container_count, coverage_count);

    let placement = build_placement_map(
        &mut stage.rng,
        pools,
        key_kind,
        &mut stage.containers,
        &selected,
    );

    let checkpoint = stage.rng.draw_count();
    debug!(
        key_kind = %key_kind,
        covered = selected.len(),
        mappings = placement.len(),
        checkpoint,
        "placement stage complete"
    );

    PlacementGenerated {
        previous,
        placement,
        checkpoint,
    }
}

/// Candidate key kinds from the config toggles, CargoType if none is on
pub fn placement_candidates(config: &GenerationConfig) -> Vec<FieldKind> {
    let mut candidates = Vec::with_capacity(2);
    if config.use_cargo_based_placement {
        candidates.push(FieldKind::CargoType);
    }
    if config.use_id_based_placement {
        candidates.push(FieldKind::ContainerId);
    }
    if candidates.is_empty() {
        candidates.push(FieldKind::CargoType);
    }
    candidates
}

/// Draws once when both toggles are on; a single candidate is taken without drawing.
fn decide_key_kind(rng: &mut DeterministicRng, config: &GenerationConfig) -> FieldKind {
    let candidates = placement_candidates(config);
    let index = rng.range_int(0, candidates.len() as i32).max(0) as usize;
    candidates.get(index).copied().unwrap_or(FieldKind::CargoType)
}

/// Non-positive coverage means "cover everyone"
pub fn resolve_coverage_count(raw: i64, container_count: usize) -> usize {
    if raw <= 0 {
        return container_count;
    }
    usize::try_from(raw).unwrap_or(container_count).min(container_count)
}

/// Assign zones to `containers[selected[..]]` keyed by `key_kind`
///
/// Visits the selected containers in order. A key seen for the first time
/// draws a zone from the catalog and is recorded in the map; a repeated key
/// reuses its zone without drawing. Container IDs are unique, so ID-keyed
/// maps draw once per container. Each visited container receives its
/// resolved zone as `expected_zone_id`.
pub fn build_placement_map(
    rng: &mut DeterministicRng,
    pools: &PoolsConfig,
    key_kind: FieldKind,
    containers: &mut [ContainerRecord],
    selected: &[usize],
) -> PlacementMap {
    let mut placement = PlacementMap::new(key_kind);
    let mut resolved: HashMap<String, u32> = HashMap::new();

    for &index in selected {
        let Some(container) = containers.get_mut(index) else {
            continue;
        };

        let key = key_kind.value_of(container.fields()).to_string();
        let zone_id = match resolved.get(&key) {
            Some(&zone_id) => zone_id,
            None => {
                let (zone_id, zone_name) = pools.random_zone(rng);
                placement.add_mapping(&key, zone_id, &zone_name);
                resolved.insert(key, zone_id);
                zone_id
            }
        };

        container.set_expected_zone(zone_id);
    }

    placement
}
