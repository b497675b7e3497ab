//! Typed stage results
//!
//! Each stage returns a value that only that stage can construct, and each
//! later stage takes the previous result by value. The random source and
//! the container list live inside these results, so the only way to reach
//! them is to run the stages in order:
//!
//! ```text
//! DeterministicRng
//!   → generate_containers → ContainersGenerated
//!   → generate_task_rule  → TaskRuleGenerated
//!   → generate_placement  → PlacementGenerated
//!   → generate_ships      → ShipsGenerated
//! ```
//!
//! Skipping or reordering a stage does not type-check.

use crate::models::{ContainerRecord, ShipRecord};
use crate::rng::DeterministicRng;
use crate::rules::{PlacementMap, RuleTree};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Draw-count checkpoints recorded after each stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrawCheckpoints {
    pub after_containers: u64,
    pub after_task_rule: u64,
    pub after_placement: u64,
    pub after_ships: u64,
}

impl DrawCheckpoints {
    /// Checkpoints in stage order
    pub fn as_array(&self) -> [u64; 4] {
        [
            self.after_containers,
            self.after_task_rule,
            self.after_placement,
            self.after_ships,
        ]
    }
}

/// Output of the container stage
#[derive(Debug, Clone)]
pub struct ContainersGenerated {
    pub(in crate::generation) rng: DeterministicRng,
    pub(in crate::generation) containers: Vec<ContainerRecord>,
    pub(in crate::generation) checkpoint: u64,
}

impl ContainersGenerated {
    pub fn containers(&self) -> &[ContainerRecord] {
        &self.containers
    }

    /// Draw count after this stage
    pub fn checkpoint(&self) -> u64 {
        self.checkpoint
    }

    pub fn rng(&self) -> &DeterministicRng {
        &self.rng
    }
}

/// Output of the task rule stage
#[derive(Debug, Clone)]
pub struct TaskRuleGenerated {
    pub(in crate::generation) previous: ContainersGenerated,
    pub(in crate::generation) task_rule: RuleTree,
    pub(in crate::generation) checkpoint: u64,
}

impl TaskRuleGenerated {
    pub fn previous(&self) -> &ContainersGenerated {
        &self.previous
    }

    pub fn containers(&self) -> &[ContainerRecord] {
        &self.previous.containers
    }

    pub fn task_rule(&self) -> &RuleTree {
        &self.task_rule
    }

    pub fn checkpoint(&self) -> u64 {
        self.checkpoint
    }

    pub fn rng(&self) -> &DeterministicRng {
        &self.previous.rng
    }
}

/// Output of the placement stage
#[derive(Debug, Clone)]
pub struct PlacementGenerated {
    pub(in crate::generation) previous: TaskRuleGenerated,
    pub(in crate::generation) placement: PlacementMap,
    pub(in crate::generation) checkpoint: u64,
}

impl PlacementGenerated {
    pub fn previous(&self) -> &TaskRuleGenerated {
        &self.previous
    }

    pub fn containers(&self) -> &[ContainerRecord] {
        self.previous.containers()
    }

    pub fn task_rule(&self) -> &RuleTree {
        self.previous.task_rule()
    }

    pub fn placement(&self) -> &PlacementMap {
        &self.placement
    }

    pub fn checkpoint(&self) -> u64 {
        self.checkpoint
    }

    pub fn rng(&self) -> &DeterministicRng {
        self.previous.rng()
    }
}

/// Output of the ship stage (final)
///
/// From here on containers are shared (`Arc`) between the day's container
/// list and the ships carrying them, and no flag can change any more.
#[derive(Debug, Clone)]
pub struct ShipsGenerated {
    pub(in crate::generation) rng: DeterministicRng,
    pub(in crate::generation) containers: Vec<Arc<ContainerRecord>>,
    pub(in crate::generation) ships: Vec<ShipRecord>,
    pub(in crate::generation) task_rule: RuleTree,
    pub(in crate::generation) placement: PlacementMap,
    pub(in crate::generation) checkpoints: DrawCheckpoints,
}

impl ShipsGenerated {
    pub fn containers(&self) -> &[Arc<ContainerRecord>] {
        &self.containers
    }

    pub fn ships(&self) -> &[ShipRecord] {
        &self.ships
    }

    pub fn task_rule(&self) -> &RuleTree {
        &self.task_rule
    }

    pub fn placement(&self) -> &PlacementMap {
        &self.placement
    }

    pub fn checkpoint(&self) -> u64 {
        self.checkpoints.after_ships
    }

    /// All four checkpoints in stage order
    pub fn checkpoints(&self) -> DrawCheckpoints {
        self.checkpoints
    }

    pub fn rng(&self) -> &DeterministicRng {
        &self.rng
    }

    /// Take the artifacts apart for the final result
    pub fn into_parts(self) -> ShipsGeneratedParts {
        ShipsGeneratedParts {
            containers: self.containers,
            ships: self.ships,
            task_rule: self.task_rule,
            placement: self.placement,
            checkpoints: self.checkpoints,
            rng: self.rng,
        }
    }
}

/// Owned pieces of a [`ShipsGenerated`]
#[derive(Debug, Clone)]
pub struct ShipsGeneratedParts {
    pub containers: Vec<Arc<ContainerRecord>>,
    pub ships: Vec<ShipRecord>,
    pub task_rule: RuleTree,
    pub placement: PlacementMap,
    pub checkpoints: DrawCheckpoints,
    pub rng: DeterministicRng,
}
