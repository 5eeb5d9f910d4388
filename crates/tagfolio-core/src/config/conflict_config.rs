use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::ROADMAP_DAYS_PER_HUNT;

/// Conflict resolver thresholds. Mandate values take precedence where set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConflictConfig {
    pub max_hunts_per_year: u32,
    pub days_per_hunt: u32,
    pub budget_warning_ratio: f64,
    pub budget_critical_ratio: f64,
    pub abandon_info_points: u32,
    pub abandon_warning_points: u32,
}

impl Default for ConflictConfig {
    fn default() -> Self {
        Self {
            max_hunts_per_year: defaults::DEFAULT_MAX_HUNTS_PER_YEAR,
            days_per_hunt: ROADMAP_DAYS_PER_HUNT,
            budget_warning_ratio: defaults::DEFAULT_BUDGET_WARNING_RATIO,
            budget_critical_ratio: defaults::DEFAULT_BUDGET_CRITICAL_RATIO,
            abandon_info_points: defaults::DEFAULT_ABANDON_INFO_POINTS,
            abandon_warning_points: defaults::DEFAULT_ABANDON_WARNING_POINTS,
        }
    }
}
