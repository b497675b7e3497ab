//! Task rule tree
//!
//! A recursive boolean expression over container fields:
//!
//! ```text
//! Or
//!   ├─ Leaf: ContainerId=TRBU-1001
//!   ├─ Leaf: ContainerId=TRBU-1002
//!   └─ And
//!      ├─ Leaf: CargoType=Electronics
//!      └─ Leaf: OriginPort=Piraeus
//! ```
//!
//! # Critical Invariants
//!
//! - An `And` group with no members evaluates to false (never vacuously true)
//! - An `Or` group with no members evaluates to false
//! - Leaves directly under a group render before nested groups

use crate::models::ContainerFields;
use crate::rules::types::{FieldKind, LogicalOperator, RuleCondition};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Words used to join group members in [`RuleTree::describe_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connectives {
    pub and: &'static str,
    pub or: &'static str,
}

impl Connectives {
    pub const ENGLISH: Connectives = Connectives { and: "AND", or: "OR" };
    pub const TURKISH: Connectives = Connectives { and: "VE", or: "VEYA" };

    fn for_operator(&self, operator: LogicalOperator) -> &'static str {
        match operator {
            LogicalOperator::And => self.and,
            LogicalOperator::Or => self.or,
        }
    }
}

impl Default for Connectives {
    fn default() -> Self {
        Connectives::ENGLISH
    }
}

/// Boolean rule over a container's ground truth
///
/// # Example
/// ```
/// use portday_core::{ContainerFields, FieldKind, RuleCondition, RuleTree};
///
/// let rule = RuleTree::any_of(vec![
///     RuleTree::leaf(RuleCondition::new(FieldKind::ContainerId, "TRBU-1001")),
///     RuleTree::all_of(vec![
///         RuleTree::leaf(RuleCondition::new(FieldKind::CargoType, "Electronics")),
///         RuleTree::leaf(RuleCondition::new(FieldKind::OriginPort, "Piraeus")),
///     ]),
/// ]);
///
/// let fields = ContainerFields::new("ESBA-2000", "Piraeus", "Electronics");
/// assert!(rule.is_target(&fields));
/// assert_eq!(
///     rule.describe(),
///     "ContainerId=TRBU-1001 OR (CargoType=Electronics AND OriginPort=Piraeus)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleTree {
    /// Single field condition
    Leaf(RuleCondition),

    /// All members must match
    And(Vec<RuleTree>),

    /// At least one member must match
    Or(Vec<RuleTree>),
}

impl RuleTree {
    pub fn leaf(condition: RuleCondition) -> Self {
        RuleTree::Leaf(condition)
    }

    /// `Or` group over `members`
    pub fn any_of(members: Vec<RuleTree>) -> Self {
        RuleTree::Or(members)
    }

    /// `And` group over `members`
    pub fn all_of(members: Vec<RuleTree>) -> Self {
        RuleTree::And(members)
    }

    /// Operator of a group node; `None` for a leaf
    pub fn operator(&self) -> Option<LogicalOperator> {
        match self {
            RuleTree::Leaf(_) => None,
            RuleTree::And(_) => Some(LogicalOperator::And),
            RuleTree::Or(_) => Some(LogicalOperator::Or),
        }
    }

    /// Direct members of a group node (empty for a leaf)
    pub fn members(&self) -> &[RuleTree] {
        match self {
            RuleTree::Leaf(_) => &[],
            RuleTree::And(members) | RuleTree::Or(members) => members,
        }
    }

    /// Leaf conditions directly under this node, in insertion order
    pub fn conditions(&self) -> impl Iterator<Item = &RuleCondition> + '_ {
        self.members().iter().filter_map(|member| match member {
            RuleTree::Leaf(condition) => Some(condition),
            _ => None,
        })
    }

    /// Nested groups directly under this node, in insertion order
    pub fn children(&self) -> impl Iterator<Item = &RuleTree> + '_ {
        self.members()
            .iter()
            .filter(|member| !matches!(member, RuleTree::Leaf(_)))
    }

    /// Append a member to a group node
    ///
    /// Returns false (and drops `member`) when called on a leaf.
    pub fn push(&mut self, member: RuleTree) -> bool {
        match self {
            RuleTree::Leaf(_) => false,
            RuleTree::And(members) | RuleTree::Or(members) => {
                members.push(member);
                true
            }
        }
    }

    /// Number of nested group levels (a leaf is 0, a flat group is 1)
    pub fn depth(&self) -> usize {
        match self {
            RuleTree::Leaf(_) => 0,
            RuleTree::And(members) | RuleTree::Or(members) => {
                1 + members.iter().map(RuleTree::depth).max().unwrap_or(0)
            }
        }
    }

    /// Total leaf conditions anywhere in the tree
    pub fn condition_count(&self) -> usize {
        match self {
            RuleTree::Leaf(_) => 1,
            RuleTree::And(members) | RuleTree::Or(members) => {
                members.iter().map(RuleTree::condition_count).sum()
            }
        }
    }

    /// Does this rule classify the container as a target?
    pub fn is_target(&self, fields: &ContainerFields) -> bool {
        match self {
            RuleTree::Leaf(condition) => condition.matches(fields),
            RuleTree::And(members) => {
                !members.is_empty() && members.iter().all(|member| member.is_target(fields))
            }
            RuleTree::Or(members) => members.iter().any(|member| member.is_target(fields)),
        }
    }

    /// Human-readable text with English connectives
    pub fn describe(&self) -> String {
        self.describe_with(&Connectives::ENGLISH)
    }

    /// Human-readable text: `And` groups parenthesized, `Or` groups flat
    pub fn describe_with(&self, connectives: &Connectives) -> String {
        let mut out = String::new();
        self.render(connectives, &mut out);
        out
    }

    fn render(&self, connectives: &Connectives, out: &mut String) {
        let (operator, members) = match self {
            RuleTree::Leaf(condition) => {
                out.push_str(&condition.to_string());
                return;
            }
            RuleTree::And(members) => (LogicalOperator::And, members),
            RuleTree::Or(members) => (LogicalOperator::Or, members),
        };

        let joiner = connectives.for_operator(operator);
        let parenthesize = operator == LogicalOperator::And;

        if parenthesize {
            out.push('(');
        }

        let leaves = members.iter().filter(|m| matches!(m, RuleTree::Leaf(_)));
        let groups = members.iter().filter(|m| !matches!(m, RuleTree::Leaf(_)));
        for (i, member) in leaves.chain(groups).enumerate() {
            if i > 0 {
                out.push(' ');
                out.push_str(joiner);
                out.push(' ');
            }
            member.render(connectives, out);
        }

        if parenthesize {
            out.push(')');
        }
    }

    /// Degrade to a flat ID list when the rule is `ID OR ID OR ...`
    ///
    /// Succeeds only for a non-empty `Or` node whose members are all
    /// `ContainerId` leaves; appends the IDs to `out` in order. Any other
    /// shape returns false and leaves `out` untouched.
    pub fn try_extract_flat_ids(&self, out: &mut Vec<String>) -> bool {
        let members = match self {
            RuleTree::Or(members) if !members.is_empty() => members,
            _ => return false,
        };

        let all_ids = members.iter().all(|member| {
            matches!(
                member,
                RuleTree::Leaf(RuleCondition {
                    field_kind: FieldKind::ContainerId,
                    ..
                })
            )
        });
        if !all_ids {
            return false;
        }

        out.extend(self.conditions().map(|condition| condition.value.clone()));
        true
    }
}

impl fmt::Display for RuleTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> RuleTree {
        RuleTree::leaf(RuleCondition::new(FieldKind::ContainerId, value))
    }

    #[test]
    fn test_depth_and_counts() {
        let tree = RuleTree::any_of(vec![id("A"), RuleTree::all_of(vec![id("B"), id("C")])]);
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.condition_count(), 3);
        assert_eq!(tree.conditions().count(), 1);
        assert_eq!(tree.children().count(), 1);
        assert_eq!(id("A").depth(), 0);
    }

    #[test]
    fn test_push_on_leaf_is_rejected() {
        let mut leaf = id("A");
        assert!(!leaf.push(id("B")));
        assert_eq!(leaf, id("A"));

        let mut group = RuleTree::any_of(Vec::new());
        assert!(group.push(id("B")));
        assert_eq!(group.members().len(), 1);
    }

    #[test]
    fn test_turkish_connectives() {
        let tree = RuleTree::any_of(vec![id("A"), id("B")]);
        assert_eq!(
            tree.describe_with(&Connectives::TURKISH),
            "ContainerId=A VEYA ContainerId=B"
        );
    }
}
