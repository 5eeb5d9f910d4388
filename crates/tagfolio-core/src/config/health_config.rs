use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::LONG_SHOT_ODDS;

/// Composite weights. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthWeights {
    pub budget: f64,
    pub frequency: f64,
    pub exposure: f64,
    pub horizon: f64,
    pub discipline: f64,
}

impl HealthWeights {
    pub fn sum(&self) -> f64 {
        self.budget + self.frequency + self.exposure + self.horizon + self.discipline
    }
}

impl Default for HealthWeights {
    fn default() -> Self {
        Self {
            budget: defaults::DEFAULT_WEIGHT_BUDGET,
            frequency: defaults::DEFAULT_WEIGHT_FREQUENCY,
            exposure: defaults::DEFAULT_WEIGHT_EXPOSURE,
            horizon: defaults::DEFAULT_WEIGHT_HORIZON,
            discipline: defaults::DEFAULT_WEIGHT_DISCIPLINE,
        }
    }
}

/// Portfolio health scoring settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    pub weights: HealthWeights,
    pub frequency_penalty_per_year: f64,
    pub long_shot_odds: f64,
    /// Inclusive ideal age window for most species.
    pub ideal_age: (i32, i32),
    /// Inclusive ideal age window for physically demanding species.
    pub demanding_age: (i32, i32),
    pub horizon_penalty_per_year: f64,
    pub horizon_penalty_cap: f64,
    pub horizon_unknown_age: f64,
    pub horizon_no_hunt: f64,
    pub ceiling_penalty_cap: f64,
    pub critical_penalty: f64,
    pub warning_penalty: f64,
    pub info_penalty: f64,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            weights: HealthWeights::default(),
            frequency_penalty_per_year: defaults::DEFAULT_FREQUENCY_PENALTY_PER_YEAR,
            long_shot_odds: LONG_SHOT_ODDS,
            ideal_age: (defaults::DEFAULT_IDEAL_AGE_MIN, defaults::DEFAULT_IDEAL_AGE_MAX),
            demanding_age: (
                defaults::DEFAULT_DEMANDING_AGE_MIN,
                defaults::DEFAULT_DEMANDING_AGE_MAX,
            ),
            horizon_penalty_per_year: defaults::DEFAULT_HORIZON_PENALTY_PER_YEAR,
            horizon_penalty_cap: defaults::DEFAULT_HORIZON_PENALTY_CAP,
            horizon_unknown_age: defaults::DEFAULT_HORIZON_UNKNOWN_AGE,
            horizon_no_hunt: defaults::DEFAULT_HORIZON_NO_HUNT,
            ceiling_penalty_cap: defaults::DEFAULT_CEILING_PENALTY_CAP,
            critical_penalty: defaults::DEFAULT_DISCIPLINE_CRITICAL_PENALTY,
            warning_penalty: defaults::DEFAULT_DISCIPLINE_WARNING_PENALTY,
            info_penalty: defaults::DEFAULT_DISCIPLINE_INFO_PENALTY,
        }
    }
}
