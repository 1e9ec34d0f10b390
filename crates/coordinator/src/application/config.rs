//! Application Configuration

use crate::domain::value_objects::DifficultyRange;

/// Coordinator configuration
#[derive(Debug, Clone)]
pub struct CoordinatorConfig {
    /// Inclusive range each new transaction's difficulty is drawn from
    pub difficulty_range: DifficultyRange,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            difficulty_range: DifficultyRange::default(),
        }
    }
}

impl CoordinatorConfig {
    /// Build a config with explicit difficulty bounds; out-of-range or
    /// inverted bounds are normalized, never rejected
    pub fn with_difficulty_bounds(min: i64, max: i64) -> Self {
        Self {
            difficulty_range: DifficultyRange::new(min, max),
        }
    }
}
