//! Placement map
//!
//! Maps one ground-truth field (cargo type, container ID or origin port) to
//! a storage zone:
//! - Cargo-based: "Electronics" → Zone 1
//! - ID-based: "TRBU-1001" → Zone 3
//! - Origin-based: "Piraeus" → Zone 2
//!
//! # Critical Invariants
//!
//! - Each distinct key is assigned a zone at most once (first assignment wins)
//! - Insertion order is preserved for display; lookups are by key
//! - Zone display names are recorded the first time a zone ID appears

use crate::models::ContainerFields;
use crate::rules::types::FieldKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key → zone mapping built by the placement stage
///
/// # Example
/// ```
/// use portday_core::{ContainerFields, FieldKind, PlacementMap};
///
/// let mut map = PlacementMap::new(FieldKind::CargoType);
/// assert!(map.add_mapping("Food", 2, "Zone B"));
/// assert!(!map.add_mapping("Food", 3, "Zone C")); // first assignment wins
///
/// let fields = ContainerFields::new("TRBU-1001", "Varna", "Food");
/// assert_eq!(map.expected_zone_for(&fields), Some(2));
/// assert_eq!(map.zone_display_name(2), "Zone B");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementMap {
    /// Which field the keys are read from
    key_kind: FieldKind,

    /// Key → zone ID
    mapping: BTreeMap<String, u32>,

    /// Keys in the order they were first assigned
    order: Vec<String>,

    /// Zone ID → display name
    zone_names: BTreeMap<u32, String>,
}

impl PlacementMap {
    pub fn new(key_kind: FieldKind) -> Self {
        Self {
            key_kind,
            mapping: BTreeMap::new(),
            order: Vec::new(),
            zone_names: BTreeMap::new(),
        }
    }

    pub fn key_kind(&self) -> FieldKind {
        self.key_kind
    }

    /// Number of distinct keys mapped
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Record `key → zone_id` unless `key` is empty or already mapped
    ///
    /// Returns true when a new mapping was recorded.
    pub fn add_mapping(&mut self, key: &str, zone_id: u32, zone_display_name: &str) -> bool {
        if key.is_empty() || self.mapping.contains_key(key) {
            return false;
        }

        self.mapping.insert(key.to_string(), zone_id);
        self.order.push(key.to_string());
        self.zone_names
            .entry(zone_id)
            .or_insert_with(|| zone_display_name.to_string());
        true
    }

    /// Zone mapped to a raw key value
    pub fn zone_for_key(&self, key: &str) -> Option<u32> {
        self.mapping.get(key).copied()
    }

    /// Zone a container is expected in, read through this map's key kind
    pub fn expected_zone_for(&self, fields: &ContainerFields) -> Option<u32> {
        let key = self.key_kind.value_of(fields);
        if key.is_empty() {
            return None;
        }
        self.zone_for_key(key)
    }

    /// Display name for a zone, falling back to `Zone <id>`
    pub fn zone_display_name(&self, zone_id: u32) -> String {
        self.zone_names
            .get(&zone_id)
            .cloned()
            .unwrap_or_else(|| format!("Zone {}", zone_id))
    }

    /// Mappings in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.order.iter().filter_map(move |key| {
            self.mapping
                .get(key)
                .map(|zone_id| (key.as_str(), *zone_id))
        })
    }

    /// One-line summary for logs, e.g. `CargoType→ZoneId (5 mappings)`
    pub fn short_description(&self) -> String {
        format!("{}→ZoneId ({} mappings)", self.key_kind, self.len())
    }

    /// Multi-line placement instructions for display
    pub fn ui_instruction(&self) -> String {
        if self.is_empty() {
            return "Placement instructions: (not defined)".to_string();
        }

        let mut out = format!("Placement instructions ({}):\n", self.key_kind);
        for (key, zone_id) in self.entries() {
            out.push_str(&format!("- {} → {}\n", key, self.zone_display_name(zone_id)));
        }
        out
    }
}
