//! Stage 4: ship generation
//!
//! Draws the ship count, builds each ship (ID, unique name, origin port,
//! voyage duration) and deals the full container list round-robin across
//! the roster.
//!
//! Draw order: ship count, then per ship name attempts (adjective, template)
//! × tries, origin port, voyage duration. Distribution draws nothing.
//!
//! # Critical Invariants
//!
//! - Ships share the containers produced by stage 1 (`Arc`), so zones and
//!   target flags written by stages 2 and 3 are visible through every ship
//! - Every container lands on exactly one ship, `container[i] → ship[i % n]`

use crate::config::{GenerationConfig, PoolsConfig};
use crate::generation::stages::{DrawCheckpoints, PlacementGenerated, ShipsGenerated};
use crate::models::{ContainerRecord, ShipRecord};
use crate::rng::DeterministicRng;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Candidate names tried before falling back to `M/V Ship #N`
pub const MAX_NAME_ATTEMPTS: usize = 50;

/// Build the ship roster and distribute containers
pub fn generate_ships(
    previous: PlacementGenerated,
    config: &GenerationConfig,
    pools: &PoolsConfig,
) -> ShipsGenerated {
    let PlacementGenerated {
        previous: task_stage,
        placement,
        checkpoint: after_placement,
    } = previous;
    let after_task_rule = task_stage.checkpoint;
    let task_rule = task_stage.task_rule;
    let after_containers = task_stage.previous.checkpoint;
    let mut rng = task_stage.previous.rng;
    let containers: Vec<Arc<ContainerRecord>> = task_stage
        .previous
        .containers
        .into_iter()
        .map(Arc::new)
        .collect();

    let ship_count = clamp_ship_count(config.calculate_ship_count(&mut rng), containers.len());
    let mut ships = Vec::with_capacity(ship_count);
    let mut used_names: HashSet<String> = HashSet::with_capacity(ship_count);

    for index in 0..ship_count {
        let ship_id = pools.ship_id(index + 1);
        let ship_name = generate_unique_name(&mut rng, pools, &used_names);
        used_names.insert(ship_name.clone());
        let origin_port = pools.random_origin_port(&mut rng);
        let voyage_hours = config.generate_voyage_duration(&mut rng);

        ships.push(ShipRecord::new(ship_id, ship_name, origin_port, voyage_hours));
    }

    distribute_round_robin(&containers, &mut ships);

    let checkpoints = DrawCheckpoints {
        after_containers,
        after_task_rule,
        after_placement,
        after_ships: rng.draw_count(),
    };
    debug!(
        ships = ships.len(),
        containers = containers.len(),
        checkpoint = checkpoints.after_ships,
        "ship stage complete"
    );

    ShipsGenerated {
        rng,
        containers,
        ships,
        task_rule,
        placement,
        checkpoints,
    }
}

/// Clamp a drawn ship count into `[1, container_count]`
///
/// A day without containers still gets one (empty) ship.
pub fn clamp_ship_count(drawn: usize, container_count: usize) -> usize {
    drawn.clamp(1, container_count.max(1))
}

/// Deal `containers[i]` to `ships[i % ships.len()]`
pub fn distribute_round_robin(containers: &[Arc<ContainerRecord>], ships: &mut [ShipRecord]) {
    if ships.is_empty() {
        return;
    }

    let ship_count = ships.len();
    for (index, container) in containers.iter().enumerate() {
        ships[index % ship_count].add_container(Arc::clone(container));
    }
}

fn generate_unique_name(
    rng: &mut DeterministicRng,
    pools: &PoolsConfig,
    used_names: &HashSet<String>,
) -> String {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let candidate = pools.generate_ship_name(rng);
        if !used_names.contains(&candidate) {
            return candidate;
        }
    }

    let mut n = used_names.len() + 1;
    loop {
        let candidate = format!("M/V Ship #{}", n);
        if !used_names.contains(&candidate) {
            warn!(fallback = %candidate, "ship name attempts exhausted, using fallback");
            return candidate;
        }
        n += 1;
    }
}
