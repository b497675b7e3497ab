//! Placement Map Tests
//!
//! Critical invariants tested:
//! - First assignment wins; repeated keys keep their zone
//! - Lookups read the field named by the map's key kind
//! - Display helpers keep insertion order
//! - The shared map builder draws once per new key for every key kind

use portday_core::generation::build_placement_map;
use portday_core::{
    ContainerFields, ContainerRecord, DeterministicRng, FieldKind, PlacementMap, PoolsConfig,
};

fn record(id: &str, origin: &str, cargo: &str) -> ContainerRecord {
    ContainerRecord::new(ContainerFields::new(id, origin, cargo))
}

// ============================================================================
// Map Behavior
// ============================================================================

#[test]
fn test_first_assignment_wins() {
    let mut map = PlacementMap::new(FieldKind::CargoType);
    assert!(map.add_mapping("Food", 1, "Zone A"));
    assert!(!map.add_mapping("Food", 2, "Zone B"));
    assert_eq!(map.zone_for_key("Food"), Some(1));
    assert_eq!(map.len(), 1);
}

#[test]
fn test_empty_key_rejected() {
    let mut map = PlacementMap::new(FieldKind::OriginPort);
    assert!(!map.add_mapping("", 1, "Zone A"));
    assert!(map.is_empty());
}

#[test]
fn test_expected_zone_reads_key_kind() {
    let mut map = PlacementMap::new(FieldKind::OriginPort);
    map.add_mapping("Varna", 3, "Zone C");

    let fields = ContainerFields::new("A-1", "Varna", "Food");
    assert_eq!(map.expected_zone_for(&fields), Some(3));

    let other = ContainerFields::new("Varna", "Izmir", "Varna");
    assert_eq!(map.expected_zone_for(&other), None);
}

#[test]
fn test_zone_display_name_fallback() {
    let mut map = PlacementMap::new(FieldKind::CargoType);
    map.add_mapping("Food", 2, "North Yard");
    map.add_mapping("Books", 2, "Ignored Name");
    assert_eq!(map.zone_display_name(2), "North Yard");
    assert_eq!(map.zone_display_name(7), "Zone 7");
}

#[test]
fn test_descriptions() {
    let mut map = PlacementMap::new(FieldKind::CargoType);
    assert_eq!(map.ui_instruction(), "Placement instructions: (not defined)");

    map.add_mapping("Textiles", 2, "Zone B");
    map.add_mapping("Food", 1, "Zone A");

    assert_eq!(map.short_description(), "CargoType→ZoneId (2 mappings)");
    assert_eq!(
        map.ui_instruction(),
        "Placement instructions (CargoType):\n- Textiles → Zone B\n- Food → Zone A\n"
    );

    let entries: Vec<(&str, u32)> = map.entries().collect();
    assert_eq!(entries, vec![("Textiles", 2), ("Food", 1)]);
}

#[test]
fn test_placement_map_json_roundtrip() {
    let mut map = PlacementMap::new(FieldKind::ContainerId);
    map.add_mapping("B-2", 1, "Zone A");
    map.add_mapping("A-1", 3, "Zone C");

    let json = serde_json::to_string(&map).unwrap();
    let restored: PlacementMap = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, map);
    assert_eq!(restored.entries().next(), Some(("B-2", 1)));
}

// ============================================================================
// Shared Builder
// ============================================================================

#[test]
fn test_builder_cargo_keys_share_zones() {
    let mut containers = vec![
        record("A-1", "Varna", "Food"),
        record("A-2", "Izmir", "Food"),
        record("A-3", "Izmir", "Books"),
        record("A-4", "Varna", "Food"),
    ];
    let mut rng = DeterministicRng::new(42);
    let map = build_placement_map(
        &mut rng,
        &PoolsConfig::default(),
        FieldKind::CargoType,
        &mut containers,
        &[0, 1, 2, 3],
    );

    assert_eq!(map.len(), 2);
    assert_eq!(rng.draw_count(), 2);
    let food_zone = map.zone_for_key("Food").unwrap();
    for index in [0, 1, 3] {
        assert_eq!(containers[index].expected_zone_id(), food_zone);
    }
    assert_eq!(
        Some(containers[2].expected_zone_id()),
        map.zone_for_key("Books")
    );
}

#[test]
fn test_builder_leaves_unselected_containers_unplaced() {
    let mut containers = vec![
        record("A-1", "Varna", "Food"),
        record("A-2", "Izmir", "Books"),
    ];
    let mut rng = DeterministicRng::new(42);
    build_placement_map(
        &mut rng,
        &PoolsConfig::default(),
        FieldKind::ContainerId,
        &mut containers,
        &[1],
    );

    assert!(!containers[0].has_expected_zone());
    assert!(containers[1].has_expected_zone());
}

#[test]
fn test_builder_empty_zone_catalog_uses_zone_a() {
    let pools = PoolsConfig {
        zone_names: Vec::new(),
        ..PoolsConfig::default()
    };
    let mut containers = vec![record("A-1", "Varna", "Food")];
    let mut rng = DeterministicRng::new(42);
    let map = build_placement_map(&mut rng, &pools, FieldKind::OriginPort, &mut containers, &[0]);

    assert_eq!(rng.draw_count(), 0);
    assert_eq!(containers[0].expected_zone_id(), 1);
    assert_eq!(map.zone_display_name(1), "Zone A");
}

#[test]
fn test_builder_zone_ids_are_one_based() {
    let mut containers: Vec<ContainerRecord> = (0..30)
        .map(|i| record(&format!("C-{}", i), "Varna", "Food"))
        .collect();
    let selected: Vec<usize> = (0..30).collect();
    let pools = PoolsConfig::default();
    let mut rng = DeterministicRng::new(7);
    build_placement_map(&mut rng, &pools, FieldKind::ContainerId, &mut containers, &selected);

    let zone_count = pools.zone_names.len() as u32;
    for container in &containers {
        let zone = container.expected_zone_id();
        assert!(zone >= 1 && zone <= zone_count, "zone {} out of range", zone);
    }
}
