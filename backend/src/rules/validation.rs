// Rule tree validation
//
// Structural checks for task rules handed in from outside the generator
// (hand-written fixtures, deserialized rules):
// - Empty AND groups (ill-formed, never satisfiable)
// - Empty OR groups
// - Conditions with empty values
// - Nesting depth limit

use crate::rules::tree::RuleTree;
use thiserror::Error;

/// Validation errors
#[derive(Debug, Error, PartialEq)]
pub enum RuleValidationError {
    #[error("Empty AND group at {0}")]
    EmptyAndGroup(String),

    #[error("Empty OR group at {0}")]
    EmptyOrGroup(String),

    #[error("Condition with empty value at {0}")]
    EmptyConditionValue(String),

    #[error("Rule depth {actual} exceeds maximum {max}")]
    ExcessiveDepth { actual: usize, max: usize },
}

/// Validation result
pub type RuleValidationResult = Result<(), Vec<RuleValidationError>>;

/// Maximum allowed nesting of rule groups
pub const MAX_RULE_DEPTH: usize = 16;

/// Validate a rule tree
///
/// Runs every check and returns all errors found. Node paths are written as
/// `root/<member index>/...`.
///
/// # Example
///
/// ```
/// use portday_core::rules::{validate_rule_tree, RuleValidationError};
/// use portday_core::RuleTree;
///
/// let empty_and = RuleTree::any_of(vec![RuleTree::all_of(Vec::new())]);
/// assert_eq!(
///     validate_rule_tree(&empty_and),
///     Err(vec![RuleValidationError::EmptyAndGroup("root/0".to_string())])
/// );
/// ```
pub fn validate_rule_tree(tree: &RuleTree) -> RuleValidationResult {
    let mut errors = Vec::new();

    let depth = tree.depth();
    if depth > MAX_RULE_DEPTH {
        errors.push(RuleValidationError::ExcessiveDepth {
            actual: depth,
            max: MAX_RULE_DEPTH,
        });
    }

    check_node(tree, "root", &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_node(node: &RuleTree, path: &str, errors: &mut Vec<RuleValidationError>) {
    match node {
        RuleTree::Leaf(condition) => {
            if condition.value.is_empty() {
                errors.push(RuleValidationError::EmptyConditionValue(path.to_string()));
            }
        }
        RuleTree::And(members) | RuleTree::Or(members) => {
            if members.is_empty() {
                let error = if matches!(node, RuleTree::And(_)) {
                    RuleValidationError::EmptyAndGroup(path.to_string())
                } else {
                    RuleValidationError::EmptyOrGroup(path.to_string())
                };
                errors.push(error);
            }
            for (i, member) in members.iter().enumerate() {
                check_node(member, &format!("{}/{}", path, i), errors);
            }
        }
    }
}
