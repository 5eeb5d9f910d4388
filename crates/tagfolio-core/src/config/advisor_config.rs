use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Total insights returned after ranking.
    pub max_insights: usize,
    /// Savings commentary never exceeds this many insights.
    pub max_savings_insights: usize,
    /// Shortfall ratio at or above which a goal is red.
    pub red_shortfall_ratio: f64,
    /// Composite score at or above which a positive insight is emitted.
    pub positive_health_threshold: f64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            max_insights: defaults::DEFAULT_MAX_INSIGHTS,
            max_savings_insights: defaults::DEFAULT_MAX_SAVINGS_INSIGHTS,
            red_shortfall_ratio: defaults::DEFAULT_RED_SHORTFALL_RATIO,
            positive_health_threshold: defaults::DEFAULT_POSITIVE_HEALTH_THRESHOLD,
        }
    }
}
