//! Stage 2: task rule generation
//!
//! Selects the day's target containers and builds the rule that classifies
//! them. Two rule shapes:
//!
//! - **Simple**: `ContainerId=A OR ContainerId=B OR ...`, one leaf per target
//! - **Composite**: targets split round-robin into 2..=max_complexity groups;
//!   a group with two or more members may become `(CargoType=x AND OriginPort=y)`,
//!   otherwise it is a single `CargoType` / `ContainerId` leaf, all joined
//!   under a root OR
//!
//! Draw order: target shuffle, composite coin, then (composite only) group
//! count and per-group coins.
//!
//! # Critical Invariants
//!
//! - Every selected target satisfies the finished rule. Composite groups
//!   only describe their leading members, so any selected target the groups
//!   miss is added back as a `ContainerId` leaf (no draws).
//! - `is_target` is set on the selected containers only, here and nowhere
//!   else. A composite rule may also accept unselected containers that
//!   share a cargo type or origin with a target.

use crate::config::GenerationConfig;
use crate::generation::select_indices;
use crate::generation::stages::{ContainersGenerated, TaskRuleGenerated};
use crate::models::ContainerFields;
use crate::rng::DeterministicRng;
use crate::rules::{FieldKind, RuleCondition, RuleTree};
use tracing::debug;

/// Probability used for each per-group shape decision
const GROUP_SHAPE_PROBABILITY: f32 = 0.5;

/// Select targets, build the task rule and mark containers
pub fn generate_task_rule(
    previous: ContainersGenerated,
    config: &GenerationConfig,
) -> TaskRuleGenerated {
    let mut previous = previous;
    let container_count = previous.containers.len();
    let target_count = resolve_target_count(
        config.calculate_target_count(container_count),
        container_count,
    );

    let selected = select_indices(&mut previous.rng, container_count, target_count);
    let targets: Vec<&ContainerFields> = selected
        .iter()
        .filter_map(|&index| previous.containers.get(index))
        .map(|container| container.fields())
        .collect();

    let (task_rule, composite) = build_rule(&mut previous.rng, config, &targets);

    for &index in &selected {
        if let Some(container) = previous.containers.get_mut(index) {
            container.set_target(true);
        }
    }

    let checkpoint = previous.rng.draw_count();
    debug!(
        selected = selected.len(),
        composite,
        rule = %task_rule,
        checkpoint,
        "task rule stage complete"
    );

    TaskRuleGenerated {
        previous,
        task_rule,
        checkpoint,
    }
}

/// Clamp the configured target count into `[1, container_count]`
///
/// A non-positive or oversized count falls back to one third of the
/// population first. An empty population has no targets.
pub fn resolve_target_count(raw: i64, container_count: usize) -> usize {
    if container_count == 0 {
        return 0;
    }

    let population = container_count as i64;
    let count = if raw <= 0 || raw > population {
        population / 3
    } else {
        raw
    };
    count.clamp(1, population) as usize
}

/// Returns the rule and whether the composite shape was used
fn build_rule(
    rng: &mut DeterministicRng,
    config: &GenerationConfig,
    targets: &[&ContainerFields],
) -> (RuleTree, bool) {
    let use_composite = rng.chance(config.composite_rule_probability);

    if !use_composite || config.max_rule_complexity < 2 {
        return (build_simple_rule(targets), false);
    }

    (build_composite_rule(rng, config, targets), true)
}

fn build_simple_rule(targets: &[&ContainerFields]) -> RuleTree {
    RuleTree::any_of(targets.iter().map(|target| id_leaf(target)).collect())
}

fn build_composite_rule(
    rng: &mut DeterministicRng,
    config: &GenerationConfig,
    targets: &[&ContainerFields],
) -> RuleTree {
    let max_groups = config.max_rule_complexity.min(i32::MAX as u32 - 1) as i32;
    let group_count = rng.range_int(2, max_groups + 1).max(1) as usize;
    let groups = split_round_robin(targets, group_count);

    let mut rule = RuleTree::any_of(Vec::new());

    for group in &groups {
        let Some(first) = group.first() else {
            continue;
        };

        // The coin is spent even for a single member, which never pairs.
        let pair_source = group.get(1);
        if let (true, Some(second)) = (rng.chance(GROUP_SHAPE_PROBABILITY), pair_source) {
            rule.push(RuleTree::all_of(vec![
                RuleTree::leaf(RuleCondition::new(FieldKind::CargoType, first.cargo_label.as_str())),
                RuleTree::leaf(RuleCondition::new(FieldKind::OriginPort, second.origin_port.as_str())),
            ]));
        } else if rng.chance(GROUP_SHAPE_PROBABILITY) {
            rule.push(RuleTree::leaf(RuleCondition::new(
                FieldKind::CargoType,
                first.cargo_label.as_str(),
            )));
        } else {
            rule.push(id_leaf(first));
        }
    }

    for target in targets {
        if !rule.is_target(target) {
            rule.push(id_leaf(target));
        }
    }

    rule
}

/// `items[i]` goes to group `i % group_count`
fn split_round_robin<'a, T>(items: &[&'a T], group_count: usize) -> Vec<Vec<&'a T>> {
    let mut groups: Vec<Vec<&'a T>> = (0..group_count).map(|_| Vec::new()).collect();
    if group_count == 0 {
        return groups;
    }

    for (i, item) in items.iter().enumerate() {
        if let Some(group) = groups.get_mut(i % group_count) {
            group.push(*item);
        }
    }
    groups
}

fn id_leaf(fields: &ContainerFields) -> RuleTree {
    RuleTree::leaf(RuleCondition::new(
        FieldKind::ContainerId,
        fields.container_id.as_str(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_target_count() {
        assert_eq!(resolve_target_count(3, 10), 3);
        assert_eq!(resolve_target_count(0, 10), 3); // one-third fallback
        assert_eq!(resolve_target_count(11, 10), 3);
        assert_eq!(resolve_target_count(0, 2), 1); // fallback of 0 clamps up to 1
        assert_eq!(resolve_target_count(5, 0), 0);
    }

    #[test]
    fn test_split_round_robin() {
        let items = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let refs: Vec<&i32> = items.iter().collect();
        let groups = split_round_robin(&refs, 3);
        let flat: Vec<Vec<i32>> = groups
            .iter()
            .map(|g| g.iter().map(|v| **v).collect())
            .collect();
        assert_eq!(flat, vec![vec![0, 3, 6, 9], vec![1, 4, 7], vec![2, 5, 8]]);
    }

    #[test]
    fn test_single_member_groups_never_pair() {
        let config = GenerationConfig {
            max_rule_complexity: 2,
            ..GenerationConfig::default()
        };
        let fields = [
            ContainerFields::new("TRBU-1001", "Marseille", "Books"),
            ContainerFields::new("TRBU-1002", "Trieste", "Automotive"),
        ];
        let targets: Vec<&ContainerFields> = fields.iter().collect();

        for seed in 1..200 {
            let mut rng = DeterministicRng::new(seed);
            let rule = build_composite_rule(&mut rng, &config, &targets);
            assert!(
                rule.members().iter().all(|m| !matches!(m, RuleTree::And(_))),
                "seed {} rule {}",
                seed,
                rule
            );
            assert!(targets.iter().all(|t| rule.is_target(t)), "seed {}", seed);
        }
    }

    #[test]
    fn test_single_member_group_spends_both_coins() {
        let config = GenerationConfig {
            max_rule_complexity: 2,
            ..GenerationConfig::default()
        };
        let fields = [
            ContainerFields::new("TRBU-1001", "Marseille", "Books"),
            ContainerFields::new("TRBU-1002", "Trieste", "Automotive"),
        ];
        let targets: Vec<&ContainerFields> = fields.iter().collect();

        let mut rng = DeterministicRng::new(3);
        build_composite_rule(&mut rng, &config, &targets);
        // group count, then two coins for each of the two groups
        assert_eq!(rng.draw_count(), 5);
    }

    #[test]
    fn test_composite_rule_covers_all_targets() {
        let config = GenerationConfig {
            max_rule_complexity: 4,
            ..GenerationConfig::default()
        };
        let fields: Vec<ContainerFields> = (0..9)
            .map(|i| {
                ContainerFields::new(
                    format!("TRBU-10{:02}", i),
                    ["Varna", "Naples", "Odesa"][i % 3],
                    ["Food", "Books"][i % 2],
                )
            })
            .collect();
        let targets: Vec<&ContainerFields> = fields.iter().collect();

        for seed in 1..50 {
            let mut rng = DeterministicRng::new(seed);
            let rule = build_composite_rule(&mut rng, &config, &targets);
            assert!(targets.iter().all(|t| rule.is_target(t)), "seed {}", seed);
        }
    }
}
