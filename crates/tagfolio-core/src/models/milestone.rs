use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{Region, Species};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneType {
    BuyPoints,
    Apply,
    Hunt,
    Scout,
    Deadline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DrawOutcome {
    Drew,
    DidntDraw,
}

/// A dated commitment tracked by the user.
///
/// Only `Apply` milestones carry deadline semantics; `completed = true`
/// permanently suppresses missed-deadline detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Milestone {
    pub id: String,
    #[serde(rename = "type")]
    pub milestone_type: MilestoneType,
    pub region: Region,
    pub species: Species,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub total_cost: f64,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draw_outcome: Option<DrawOutcome>,
}

impl Milestone {
    pub fn drew(&self) -> bool {
        self.draw_outcome == Some(DrawOutcome::Drew)
    }

    /// An incomplete application with a known deadline.
    pub fn open_deadline(&self) -> Option<NaiveDate> {
        if self.milestone_type == MilestoneType::Apply && !self.completed {
            self.due_date
        } else {
            None
        }
    }
}
