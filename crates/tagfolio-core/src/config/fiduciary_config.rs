use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MILESTONE_DAYS_PER_HUNT;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FiduciaryConfig {
    pub days_per_hunt: u32,
    /// Look-ahead for upcoming application deadlines.
    pub upcoming_window_days: i64,
}

impl Default for FiduciaryConfig {
    fn default() -> Self {
        Self {
            days_per_hunt: MILESTONE_DAYS_PER_HUNT,
            upcoming_window_days: defaults::DEFAULT_UPCOMING_WINDOW_DAYS,
        }
    }
}
