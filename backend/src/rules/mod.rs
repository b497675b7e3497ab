// Task rules and placement maps
//
// Architecture:
// - types.rs: Field kinds, logical operators, leaf conditions
// - tree.rs: RuleTree (recursive AND/OR evaluator, description, ID extraction)
// - placement.rs: PlacementMap (key → zone lookup)
// - validation.rs: Structural checks for rule trees

pub mod placement;
pub mod tree;
pub mod types;
pub mod validation;

// Re-export main types for convenience
pub use placement::PlacementMap;
pub use tree::{Connectives, RuleTree};
pub use types::{FieldKind, LogicalOperator, RuleCondition};
pub use validation::{validate_rule_tree, RuleValidationError, RuleValidationResult, MAX_RULE_DEPTH};
