use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::severity::Severity;
use crate::catalog::{Region, Species};

/// An application deadline that passed without the milestone being completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MissedDeadline {
    pub milestone_id: String,
    pub region: Region,
    pub species: Species,
    pub due_date: NaiveDate,
    pub days_overdue: i64,
}

/// An incomplete application deadline inside the look-ahead window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UpcomingDeadline {
    pub milestone_id: String,
    pub region: Region,
    pub species: Species,
    pub due_date: NaiveDate,
    pub days_remaining: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DisasterKind {
    Budget,
    TimeOff,
}

/// Drawn tags in one year that the budget or time off cannot support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SuccessDisasterAlert {
    pub id: String,
    pub kind: DisasterKind,
    pub severity: Severity,
    pub year: i32,
    pub title: String,
    pub description: String,
    /// Dollars over budget, or days over the time-off allowance.
    pub overage: f64,
    pub milestone_ids: Vec<String>,
}
