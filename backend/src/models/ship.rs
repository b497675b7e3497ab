//! Ship model
//!
//! Ships carry the day's containers. The ship stage fills each ship's
//! container list round-robin; the lists share the same container records as
//! the pipeline's container list (`Arc` clones, never copies), so zone and
//! target flags read through a ship match the pipeline's view exactly.

use crate::models::container::ContainerRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A generated ship and the containers assigned to it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipRecord {
    /// Sequential ship identifier (e.g. "SH-001")
    ship_id: String,

    /// Unique display name (e.g. "M/V Aegean Star")
    ship_name: String,

    /// Port the ship departed from
    origin_port: String,

    /// Voyage length in hours
    voyage_duration_hours: f32,

    /// Assigned containers in insertion order
    containers: Vec<Arc<ContainerRecord>>,
}

impl ShipRecord {
    pub fn new(
        ship_id: String,
        ship_name: String,
        origin_port: String,
        voyage_duration_hours: f32,
    ) -> Self {
        Self {
            ship_id,
            ship_name,
            origin_port,
            voyage_duration_hours,
            containers: Vec::new(),
        }
    }

    pub fn ship_id(&self) -> &str {
        &self.ship_id
    }

    pub fn ship_name(&self) -> &str {
        &self.ship_name
    }

    pub fn origin_port(&self) -> &str {
        &self.origin_port
    }

    pub fn voyage_duration_hours(&self) -> f32 {
        self.voyage_duration_hours
    }

    pub fn containers(&self) -> &[Arc<ContainerRecord>] {
        &self.containers
    }

    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    pub(crate) fn add_container(&mut self, container: Arc<ContainerRecord>) {
        self.containers.push(container);
    }
}

impl fmt::Display for ShipRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship[{}, {}, {}] Containers={}",
            self.ship_id,
            self.ship_name,
            self.origin_port,
            self.containers.len()
        )
    }
}
