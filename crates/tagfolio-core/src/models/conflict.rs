use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use super::roadmap::ActionRef;
use super::severity::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ConflictType {
    Overdraw,
    TimeOffConflict,
    BudgetOverflow,
    ScheduleOverlap,
    PointAbandon,
}

impl ConflictType {
    pub fn as_str(self) -> &'static str {
        match self {
            ConflictType::Overdraw => "overdraw",
            ConflictType::TimeOffConflict => "time_off_conflict",
            ConflictType::BudgetOverflow => "budget_overflow",
            ConflictType::ScheduleOverlap => "schedule_overlap",
            ConflictType::PointAbandon => "point_abandon",
        }
    }
}

impl fmt::Display for ConflictType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected problem with the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlanConflict {
    pub id: String,
    #[serde(rename = "type")]
    pub conflict_type: ConflictType,
    pub severity: Severity,
    pub year: i32,
    pub title: String,
    pub description: String,
    pub resolution: String,
    pub affected_actions: Vec<ActionRef>,
}
