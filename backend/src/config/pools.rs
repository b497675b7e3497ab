//! Content pools
//!
//! Origin ports, cargo types, container ID prefixes, ship-name parts and
//! zone names that generated content is drawn from. Every helper here that
//! touches the random source documents its draw count; empty pools fall back
//! to a fixed placeholder without drawing.

use crate::config::generation::MAX_POPULATION;
use crate::config::ConfigError;
use crate::rng::DeterministicRng;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Placeholder substituted when a string pool is empty
pub const UNKNOWN_ENTRY: &str = "Unknown";

/// Container ID used when no prefixes are configured
pub const UNKNOWN_CONTAINER_ID: &str = "UNKN-0000";

/// Ship name used when templates or adjectives are missing
pub const UNKNOWN_SHIP_NAME: &str = "M/V Unknown";

/// Placeholder in ship-name templates replaced by an adjective
pub const TEMPLATE_SLOT: &str = "{}";

/// Pool data for procedural generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolsConfig {
    pub origin_ports: Vec<String>,
    pub cargo_types: Vec<String>,
    pub container_id_prefixes: Vec<String>,

    /// Templates such as `"M/V {} Star"`; `{}` receives an adjective
    pub ship_name_templates: Vec<String>,
    pub ship_adjectives: Vec<String>,

    /// Zone catalog; zone ID = index + 1
    pub zone_names: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for PoolsConfig {
    fn default() -> Self {
        Self {
            origin_ports: owned(&[
                "Piraeus", "Izmir", "Varna", "Trieste", "Marseille",
                "Iskenderun", "Antalya", "Barcelona", "Naples", "Odesa",
            ]),
            cargo_types: owned(&[
                "Machine Parts", "Food", "Textiles", "Chemicals", "Electronics",
                "Furniture", "Construction Materials", "Automotive", "Medical Supplies", "Books",
            ]),
            container_id_prefixes: owned(&[
                "TRBU", "TRIS", "TRAN", "USNY", "GRPI", "ITNA", "ESBA", "FRMA", "BGVA", "UAOD",
            ]),
            ship_name_templates: owned(&[
                "M/V {} Star", "M/V {} Pride", "M/V {} Spirit", "M/V {} Voyager",
                "M/V {} Navigator", "M/V {} Trader", "M/V {} Express", "M/V {} Discovery",
            ]),
            ship_adjectives: owned(&[
                "Aegean", "Mediterranean", "Black Sea", "Atlantic", "Pacific", "Golden",
                "Silver", "Blue", "Royal", "Imperial", "Eastern", "Western",
            ]),
            zone_names: owned(&["Zone A", "Zone B", "Zone C"]),
        }
    }
}

impl PoolsConfig {
    /// Reject blank pool entries
    ///
    /// Empty pools are allowed (helpers fall back to placeholders), but a
    /// blank entry would produce blank ground truth that no rule can key on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pools: [(&'static str, &Vec<String>); 6] = [
            ("origin_ports", &self.origin_ports),
            ("cargo_types", &self.cargo_types),
            ("container_id_prefixes", &self.container_id_prefixes),
            ("ship_name_templates", &self.ship_name_templates),
            ("ship_adjectives", &self.ship_adjectives),
            ("zone_names", &self.zone_names),
        ];

        for (field, entries) in pools {
            if let Some(index) = entries.iter().position(|entry| entry.trim().is_empty()) {
                return Err(ConfigError::invalid(
                    field,
                    format!("entry {} is blank", index),
                ));
            }
        }

        if self.zone_names.len() > MAX_POPULATION as usize {
            return Err(ConfigError::invalid(
                "zone_names",
                format!("{} zones exceed maximum {}", self.zone_names.len(), MAX_POPULATION),
            ));
        }

        Ok(())
    }

    /// Uniform origin port (one draw; none when the pool is empty)
    pub fn random_origin_port(&self, rng: &mut DeterministicRng) -> String {
        pick_or_unknown(rng, &self.origin_ports, "origin_ports")
    }

    /// Uniform cargo type (one draw; none when the pool is empty)
    pub fn random_cargo_type(&self, rng: &mut DeterministicRng) -> String {
        pick_or_unknown(rng, &self.cargo_types, "cargo_types")
    }

    /// Candidate container ID `<PREFIX>-<NNNN>` with NNNN in `[1000, 9999]`
    ///
    /// Two draws (prefix, then number); none when no prefixes are configured.
    pub fn generate_container_id(&self, rng: &mut DeterministicRng) -> String {
        let Some(prefix) = rng.pick(&self.container_id_prefixes) else {
            return UNKNOWN_CONTAINER_ID.to_string();
        };
        let number = rng.range_int(1000, 10000);
        format!("{}-{}", prefix, number)
    }

    /// Candidate ship name from an adjective and a template
    ///
    /// Two draws (adjective, then template); none when either pool is empty.
    pub fn generate_ship_name(&self, rng: &mut DeterministicRng) -> String {
        if self.ship_name_templates.is_empty() || self.ship_adjectives.is_empty() {
            return UNKNOWN_SHIP_NAME.to_string();
        }

        let adjective = rng.pick(&self.ship_adjectives).map(String::as_str).unwrap_or(UNKNOWN_ENTRY);
        let template = rng
            .pick(&self.ship_name_templates)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_SHIP_NAME);
        template.replacen(TEMPLATE_SLOT, adjective, 1)
    }

    /// Ship ID for a 1-based sequence number, e.g. `SH-001` (no draws)
    pub fn ship_id(&self, sequence_number: usize) -> String {
        format!("SH-{:03}", sequence_number)
    }

    /// Uniform zone from the catalog as `(zone_id, display_name)`
    ///
    /// Zone IDs are 1-based so that 0 keeps meaning "no zone". One draw;
    /// an empty catalog yields `(1, "Zone A")` without drawing.
    pub fn random_zone(&self, rng: &mut DeterministicRng) -> (u32, String) {
        if self.zone_names.is_empty() {
            warn!("zone catalog is empty, using Zone A");
            return (1, "Zone A".to_string());
        }

        let index = rng.range_int(0, self.zone_names.len() as i32).max(0) as usize;
        let name = self
            .zone_names
            .get(index)
            .cloned()
            .unwrap_or_else(|| "Zone A".to_string());
        (index as u32 + 1, name)
    }
}

fn pick_or_unknown(rng: &mut DeterministicRng, pool: &[String], pool_name: &str) -> String {
    match rng.pick(pool) {
        Some(entry) => entry.clone(),
        None => {
            warn!(pool = pool_name, "pool is empty, using placeholder");
            UNKNOWN_ENTRY.to_string()
        }
    }
}
