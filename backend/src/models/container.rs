//! Container model
//!
//! A container is created once by the container stage and never changes
//! identity afterwards. Each container has:
//! - Ground-truth fields (ID, origin port, cargo label)
//! - Target flag (set by the task rule stage)
//! - Expected zone (set by the placement stage, 0 = no rule applies)
//!
//! CRITICAL: Identity fields are immutable once created. Only the two
//! generation flags are written, and only by their owning stage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Zone ID meaning "no placement rule applies"
pub const NO_ZONE: u32 = 0;

/// Ground-truth identity of a container
///
/// These are the authoritative generation-time values; the rule tree and
/// placement map are evaluated against them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerFields {
    /// Unique container identifier (e.g. "TRBU-1042")
    pub container_id: String,

    /// Port the container was loaded at
    pub origin_port: String,

    /// Declared cargo type
    pub cargo_label: String,
}

impl ContainerFields {
    /// Build a field set from its three parts
    pub fn new(
        container_id: impl Into<String>,
        origin_port: impl Into<String>,
        cargo_label: impl Into<String>,
    ) -> Self {
        Self {
            container_id: container_id.into(),
            origin_port: origin_port.into(),
            cargo_label: cargo_label.into(),
        }
    }
}

/// A generated container plus the flags later stages write onto it
///
/// # Example
/// ```
/// use portday_core::{ContainerFields, ContainerRecord};
///
/// let container = ContainerRecord::new(ContainerFields::new("TRBU-1042", "Piraeus", "Textiles"));
/// assert!(!container.is_target());
/// assert_eq!(container.expected_zone_id(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerRecord {
    /// Ground truth (never changes after creation)
    fields: ContainerFields,

    /// Whether the task rule classifies this container as a target
    is_target: bool,

    /// Expected storage zone (0 = no rule applies)
    expected_zone_id: u32,
}

impl ContainerRecord {
    /// Create a container with default flags
    pub fn new(fields: ContainerFields) -> Self {
        Self {
            fields,
            is_target: false,
            expected_zone_id: NO_ZONE,
        }
    }

    pub fn fields(&self) -> &ContainerFields {
        &self.fields
    }

    pub fn container_id(&self) -> &str {
        &self.fields.container_id
    }

    pub fn origin_port(&self) -> &str {
        &self.fields.origin_port
    }

    pub fn cargo_label(&self) -> &str {
        &self.fields.cargo_label
    }

    pub fn is_target(&self) -> bool {
        self.is_target
    }

    pub fn expected_zone_id(&self) -> u32 {
        self.expected_zone_id
    }

    /// True when a placement rule assigned this container a zone
    pub fn has_expected_zone(&self) -> bool {
        self.expected_zone_id != NO_ZONE
    }

    /// Written once by the task rule stage
    pub(crate) fn set_target(&mut self, is_target: bool) {
        self.is_target = is_target;
    }

    /// Written at most once by the placement stage
    pub(crate) fn set_expected_zone(&mut self, zone_id: u32) {
        debug_assert_eq!(
            self.expected_zone_id, NO_ZONE,
            "expected zone assigned twice for {}",
            self.fields.container_id
        );
        self.expected_zone_id = zone_id;
    }
}

impl fmt::Display for ContainerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Container[{}, {}, {}] Target={}",
            self.fields.container_id, self.fields.origin_port, self.fields.cargo_label, self.is_target
        )
    }
}
