use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Five sub-scores (0–100 each) and their weighted composite (0–100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthScoreBreakdown {
    pub budget: f64,
    pub frequency: f64,
    pub exposure: f64,
    pub horizon: f64,
    pub discipline: f64,
    pub composite: f64,
}
