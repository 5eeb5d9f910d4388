use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A savings target earmarked for a future hunt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SavingsGoal {
    pub id: String,
    pub label: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub monthly_contribution: f64,
    pub target_date: NaiveDate,
}

/// Traffic-light status. Declaration order is the ranking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Red,
    Amber,
    OnTrack,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GoalAssessment {
    pub goal_id: String,
    pub label: String,
    pub status: GoalStatus,
    pub projected_amount: f64,
    pub shortfall: f64,
    pub months_remaining: u32,
}
