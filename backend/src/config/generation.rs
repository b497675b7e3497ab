//! Generation tuning parameters
//!
//! Counts, ratios and probabilities that shape one generated day. Defaults
//! match the shipped tuning.

use crate::config::ConfigError;
use crate::rng::DeterministicRng;
use serde::{Deserialize, Serialize};

/// Upper bound on any configured population (containers or ships)
pub const MAX_POPULATION: u32 = 100_000;

/// Upper bound on rule complexity (number of composite groups)
pub const MAX_RULE_COMPLEXITY: u32 = 64;

/// Master generation configuration
///
/// # Example
/// ```
/// use portday_core::GenerationConfig;
///
/// let config = GenerationConfig {
///     min_container_count: 5,
///     max_container_count: 5,
///     ..GenerationConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Minimum containers per day (inclusive)
    pub min_container_count: u32,

    /// Maximum containers per day (inclusive)
    pub max_container_count: u32,

    /// Minimum ships per day (inclusive)
    pub min_ships: u32,

    /// Maximum ships per day (inclusive)
    pub max_ships: u32,

    /// Shortest voyage in hours
    pub min_voyage_hours: f32,

    /// Longest voyage in hours
    pub max_voyage_hours: f32,

    /// Share of containers selected as targets (0.3 = 30%)
    pub target_container_ratio: f32,

    /// Upper bound on composite rule groups; below 2 forces simple rules
    pub max_rule_complexity: u32,

    /// Probability of building a composite AND/OR task rule
    pub composite_rule_probability: f32,

    /// Share of containers that receive an expected zone
    pub placement_coverage_ratio: f32,

    /// Offer cargo-keyed placement
    pub use_cargo_based_placement: bool,

    /// Offer container-ID-keyed placement
    pub use_id_based_placement: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            min_container_count: 20,
            max_container_count: 40,
            min_ships: 2,
            max_ships: 5,
            min_voyage_hours: 24.0,
            max_voyage_hours: 72.0,
            target_container_ratio: 0.3,
            max_rule_complexity: 2,
            composite_rule_probability: 0.3,
            placement_coverage_ratio: 0.8,
            use_cargo_based_placement: true,
            use_id_based_placement: false,
        }
    }
}

impl GenerationConfig {
    /// Reject values that cannot be clamped to anything meaningful
    ///
    /// Inverted min/max pairs are not errors; the random source absorbs them
    /// by returning the minimum.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_ratio("target_container_ratio", self.target_container_ratio)?;
        check_ratio("composite_rule_probability", self.composite_rule_probability)?;
        check_ratio("placement_coverage_ratio", self.placement_coverage_ratio)?;
        check_hours("min_voyage_hours", self.min_voyage_hours)?;
        check_hours("max_voyage_hours", self.max_voyage_hours)?;
        check_population("min_container_count", self.min_container_count)?;
        check_population("max_container_count", self.max_container_count)?;
        check_population("min_ships", self.min_ships)?;
        check_population("max_ships", self.max_ships)?;

        if self.max_rule_complexity > MAX_RULE_COMPLEXITY {
            return Err(ConfigError::invalid(
                "max_rule_complexity",
                format!(
                    "{} exceeds maximum {}",
                    self.max_rule_complexity, MAX_RULE_COMPLEXITY
                ),
            ));
        }

        Ok(())
    }

    /// Copy with ordered ranges and ships capped at the container maximum
    pub fn normalized(&self) -> Self {
        let mut config = self.clone();
        if config.min_container_count > config.max_container_count {
            config.max_container_count = config.min_container_count;
        }
        if config.min_ships > config.max_ships {
            config.max_ships = config.min_ships;
        }
        if config.min_voyage_hours > config.max_voyage_hours {
            config.max_voyage_hours = config.min_voyage_hours;
        }
        if config.max_ships > config.max_container_count {
            config.max_ships = config.max_container_count;
        }
        config
    }

    /// Container count drawn uniformly in `[min, max]` (one draw)
    pub fn calculate_container_count(&self, rng: &mut DeterministicRng) -> usize {
        inclusive_count(rng, self.min_container_count, self.max_container_count)
    }

    /// Ship count drawn uniformly in `[min, max]` (one draw)
    pub fn calculate_ship_count(&self, rng: &mut DeterministicRng) -> usize {
        inclusive_count(rng, self.min_ships, self.max_ships)
    }

    /// Voyage length interpolated between the configured bounds (one draw)
    pub fn generate_voyage_duration(&self, rng: &mut DeterministicRng) -> f32 {
        let t = rng.next_uniform_float();
        self.min_voyage_hours + (self.max_voyage_hours - self.min_voyage_hours) * t
    }

    /// `container_count × target_container_ratio` rounded half to even, before clamping
    pub fn calculate_target_count(&self, container_count: usize) -> i64 {
        scaled_count(container_count, self.target_container_ratio)
    }

    /// `container_count × placement_coverage_ratio` rounded half to even, before fallback
    pub fn calculate_coverage_count(&self, container_count: usize) -> i64 {
        scaled_count(container_count, self.placement_coverage_ratio)
    }
}

fn inclusive_count(rng: &mut DeterministicRng, min: u32, max: u32) -> usize {
    let min = min.min(MAX_POPULATION) as i32;
    let max = max.min(MAX_POPULATION) as i32;
    rng.range_int(min, max + 1).max(0) as usize
}

/// Product taken in single precision, so `35 × 0.3` lands on the tie `10.5`
fn scaled_count(count: usize, ratio: f32) -> i64 {
    (count as f32 * ratio).round_ties_even() as i64
}

fn check_ratio(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::invalid(
            field,
            format!("{} is not a ratio in [0, 1]", value),
        ));
    }
    Ok(())
}

fn check_hours(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::invalid(
            field,
            format!("{} is not a non-negative duration", value),
        ));
    }
    Ok(())
}

fn check_population(field: &'static str, value: u32) -> Result<(), ConfigError> {
    if value > MAX_POPULATION {
        return Err(ConfigError::invalid(
            field,
            format!("{} exceeds maximum {}", value, MAX_POPULATION),
        ));
    }
    Ok(())
}
