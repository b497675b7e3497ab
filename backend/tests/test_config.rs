//! Configuration Tests
//!
//! Critical invariants tested:
//! - Missing JSON fields take the shipped defaults
//! - Values that cannot be clamped are rejected up front
//! - Fixed seeding is reproducible

use portday_core::config::settings::DEFAULT_FIXED_SEED;
use portday_core::{ConfigError, GenerationConfig, GeneratorSettings, PoolsConfig, SeedConfig};

#[test]
fn test_defaults_match_shipped_tuning() {
    let config = GenerationConfig::default();
    assert_eq!((config.min_container_count, config.max_container_count), (20, 40));
    assert_eq!((config.min_ships, config.max_ships), (2, 5));
    assert_eq!((config.min_voyage_hours, config.max_voyage_hours), (24.0, 72.0));
    assert_eq!(config.max_rule_complexity, 2);
    assert!(config.use_cargo_based_placement);
    assert!(!config.use_id_based_placement);

    let pools = PoolsConfig::default();
    assert_eq!(pools.origin_ports.len(), 10);
    assert_eq!(pools.cargo_types.len(), 10);
    assert_eq!(pools.container_id_prefixes.len(), 10);
    assert_eq!(pools.ship_name_templates.len(), 8);
    assert_eq!(pools.ship_adjectives.len(), 12);
    assert_eq!(pools.zone_names, vec!["Zone A", "Zone B", "Zone C"]);
}

#[test]
fn test_partial_json_fills_defaults() {
    let settings = GeneratorSettings::from_json_str(
        r#"{
            "seed": { "fixed_seed": 7 },
            "generation": { "min_container_count": 5, "max_container_count": 5 },
            "pools": { "zone_names": ["North Yard", "South Yard"] }
        }"#,
    )
    .unwrap();

    assert!(settings.seed.use_fixed_seed);
    assert_eq!(settings.seed.run_seed(), 7);
    assert_eq!(settings.generation.min_container_count, 5);
    assert_eq!(settings.generation.max_ships, 5);
    assert_eq!(settings.pools.zone_names.len(), 2);
    assert_eq!(settings.pools.origin_ports, PoolsConfig::default().origin_ports);
}

#[test]
fn test_fixed_seed_is_stable() {
    let seed = SeedConfig::default();
    assert!(seed.use_fixed_seed);
    assert_eq!(seed.run_seed(), DEFAULT_FIXED_SEED);
    assert_eq!(seed.run_seed(), seed.run_seed());
}

#[test]
fn test_malformed_json_is_json_error() {
    let err = GeneratorSettings::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_out_of_range_values_rejected() {
    let err = GeneratorSettings::from_json_str(
        r#"{ "generation": { "composite_rule_probability": 2.0 } }"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidArgument {
            field: "composite_rule_probability",
            ..
        }
    ));

    let negative_hours = GenerationConfig {
        min_voyage_hours: -1.0,
        ..GenerationConfig::default()
    };
    assert!(negative_hours.validate().is_err());

    let blank_port = PoolsConfig {
        origin_ports: vec!["Varna".to_string(), "".to_string()],
        ..PoolsConfig::default()
    };
    let err = blank_port.validate().unwrap_err();
    assert!(err.to_string().contains("origin_ports"));
}

#[test]
fn test_inverted_ranges_are_not_errors() {
    let config = GenerationConfig {
        min_container_count: 9,
        max_container_count: 3,
        ..GenerationConfig::default()
    };
    assert!(config.validate().is_ok());

    let normalized = config.normalized();
    assert_eq!(normalized.max_container_count, 9);
    assert!(normalized.max_ships <= normalized.max_container_count);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("portday-settings-does-not-exist.json");
    let err = GeneratorSettings::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("portday-settings-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "seed": { "use_fixed_seed": true, "fixed_seed": 99 } }"#).unwrap();

    let settings = GeneratorSettings::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(settings.seed.run_seed(), 99);
}

#[test]
fn test_settings_json_roundtrip() {
    let settings = GeneratorSettings {
        seed: SeedConfig {
            use_fixed_seed: false,
            fixed_seed: -4,
        },
        ..GeneratorSettings::default()
    };
    let json = serde_json::to_string(&settings).unwrap();
    let restored = GeneratorSettings::from_json_str(&json).unwrap();
    assert_eq!(restored, settings);
}
