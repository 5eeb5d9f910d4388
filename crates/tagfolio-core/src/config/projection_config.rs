use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MAX_PROJECTION_YEARS;

/// Point-creep and draw-odds projection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Creep rate at a competitiveness signal of 0.
    pub base_creep_rate: f64,
    /// Additional creep rate per unit of competitiveness signal.
    pub creep_per_signal: f64,
    /// Horizon cap for every year-by-year projection.
    pub max_projection_years: u32,
    /// Single-year odds treated as "likely to draw".
    pub likely_draw_odds: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            base_creep_rate: defaults::DEFAULT_BASE_CREEP_RATE,
            creep_per_signal: defaults::DEFAULT_CREEP_PER_SIGNAL,
            max_projection_years: MAX_PROJECTION_YEARS,
            likely_draw_odds: defaults::DEFAULT_LIKELY_DRAW_ODDS,
        }
    }
}
