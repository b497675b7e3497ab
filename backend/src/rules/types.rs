//! Rule vocabulary shared by task rules and placement maps
//!
//! A condition names one ground-truth field and a value; it matches a
//! container iff that field equals the value exactly (case-sensitive).

use crate::models::ContainerFields;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// FIELD KINDS
// ============================================================================

/// Which ground-truth field a condition or placement key reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldKind {
    /// Container identifier (e.g. "TRBU-1001")
    ContainerId,

    /// Origin port (e.g. "Piraeus")
    OriginPort,

    /// Cargo type (e.g. "Electronics")
    CargoType,
}

impl FieldKind {
    /// Read this field from a container's ground truth
    pub fn value_of(self, fields: &ContainerFields) -> &str {
        match self {
            FieldKind::ContainerId => &fields.container_id,
            FieldKind::OriginPort => &fields.origin_port,
            FieldKind::CargoType => &fields.cargo_label,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::ContainerId => "ContainerId",
            FieldKind::OriginPort => "OriginPort",
            FieldKind::CargoType => "CargoType",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a rule group combines its members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOperator {
    /// Every member must match (and there must be at least one)
    And,

    /// At least one member must match
    Or,
}

// ============================================================================
// CONDITIONS
// ============================================================================

/// Leaf condition: `<field> == <value>`
///
/// # Example
/// ```
/// use portday_core::{ContainerFields, FieldKind, RuleCondition};
///
/// let cond = RuleCondition::new(FieldKind::CargoType, "Electronics");
/// let fields = ContainerFields::new("TRBU-1001", "Piraeus", "Electronics");
/// assert!(cond.matches(&fields));
/// assert_eq!(cond.to_string(), "CargoType=Electronics");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleCondition {
    /// Field to compare
    pub field_kind: FieldKind,

    /// Exact value to compare against
    pub value: String,
}

impl RuleCondition {
    pub fn new(field_kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            field_kind,
            value: value.into(),
        }
    }

    /// Exact, case-sensitive equality on the named field
    pub fn matches(&self, fields: &ContainerFields) -> bool {
        self.field_kind.value_of(fields) == self.value
    }
}

impl fmt::Display for RuleCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.field_kind, self.value)
    }
}
