//! Stage 1: container generation
//!
//! Draws the day's container count, then for each container a unique ID,
//! an origin port and a cargo label. Target and zone flags stay at their
//! defaults for the later stages to fill.
//!
//! Draw order per container: ID attempts (prefix, number) × tries, origin
//! port, cargo label.

use crate::config::{GenerationConfig, PoolsConfig};
use crate::generation::stages::ContainersGenerated;
use crate::models::{ContainerFields, ContainerRecord};
use crate::rng::DeterministicRng;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Candidate IDs tried before falling back to `FALLBACK-NNNN`
pub const MAX_ID_ATTEMPTS: usize = 100;

/// Generate the base container population
///
/// Takes ownership of the random source; the returned stage result is the
/// only way to reach it again.
///
/// # Example
/// ```
/// use portday_core::generation::generate_containers;
/// use portday_core::{DeterministicRng, GenerationConfig, PoolsConfig};
///
/// let config = GenerationConfig {
///     min_container_count: 5,
///     max_container_count: 5,
///     ..GenerationConfig::default()
/// };
/// let stage = generate_containers(DeterministicRng::new(12345), &config, &PoolsConfig::default());
/// assert_eq!(stage.containers().len(), 5);
/// ```
pub fn generate_containers(
    mut rng: DeterministicRng,
    config: &GenerationConfig,
    pools: &PoolsConfig,
) -> ContainersGenerated {
    let container_count = config.calculate_container_count(&mut rng);
    let mut containers = Vec::with_capacity(container_count);
    let mut used_ids: HashSet<String> = HashSet::with_capacity(container_count);

    for _ in 0..container_count {
        let container_id = generate_unique_id(&mut rng, pools, &used_ids);
        used_ids.insert(container_id.clone());

        let origin_port = pools.random_origin_port(&mut rng);
        let cargo_label = pools.random_cargo_type(&mut rng);

        containers.push(ContainerRecord::new(ContainerFields {
            container_id,
            origin_port,
            cargo_label,
        }));
    }

    let checkpoint = rng.draw_count();
    debug!(
        containers = containers.len(),
        checkpoint, "container stage complete"
    );

    ContainersGenerated {
        rng,
        containers,
        checkpoint,
    }
}

/// Draw candidate IDs until one is unused, up to [`MAX_ID_ATTEMPTS`]
fn generate_unique_id(
    rng: &mut DeterministicRng,
    pools: &PoolsConfig,
    used_ids: &HashSet<String>,
) -> String {
    for _ in 0..MAX_ID_ATTEMPTS {
        let candidate = pools.generate_container_id(rng);
        if !used_ids.contains(&candidate) {
            return candidate;
        }
    }

    let fallback = fallback_id(used_ids);
    warn!(fallback = %fallback, "container ID attempts exhausted, using fallback");
    fallback
}

/// `FALLBACK-NNNN` numbered from the count of IDs already issued
fn fallback_id(used_ids: &HashSet<String>) -> String {
    let mut n = used_ids.len();
    loop {
        let candidate = format!("FALLBACK-{:04}", n);
        if !used_ids.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_unique_within_day() {
        let config = GenerationConfig {
            min_container_count: 60,
            max_container_count: 60,
            ..GenerationConfig::default()
        };
        let stage = generate_containers(DeterministicRng::new(4), &config, &PoolsConfig::default());
        let ids: HashSet<&str> = stage.containers().iter().map(|c| c.container_id()).collect();
        assert_eq!(ids.len(), 60);
    }

    #[test]
    fn test_no_prefixes_falls_back_deterministically() {
        let config = GenerationConfig {
            min_container_count: 3,
            max_container_count: 3,
            ..GenerationConfig::default()
        };
        let pools = PoolsConfig {
            container_id_prefixes: Vec::new(),
            ..PoolsConfig::default()
        };
        let stage = generate_containers(DeterministicRng::new(4), &config, &pools);
        let ids: Vec<&str> = stage.containers().iter().map(|c| c.container_id()).collect();
        // first container takes the placeholder, the rest collide with it
        assert_eq!(ids, vec!["UNKN-0000", "FALLBACK-0001", "FALLBACK-0002"]);
    }

    #[test]
    fn test_flags_left_at_defaults() {
        let stage = generate_containers(
            DeterministicRng::new(99),
            &GenerationConfig::default(),
            &PoolsConfig::default(),
        );
        assert!(stage
            .containers()
            .iter()
            .all(|c| !c.is_target() && !c.has_expected_zone()));
    }
}
