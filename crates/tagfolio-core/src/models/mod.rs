mod capital;
mod conflict;
mod fees;
mod fiduciary;
mod health;
mod insight;
mod ledger;
mod mandate;
mod milestone;
mod odds;
mod purge;
mod roadmap;
mod savings;
mod severity;

pub use capital::{BurnRateRow, CapitalSummary, CreepTrend, DrawHistory, RegionCapital};
pub use conflict::{ConflictType, PlanConflict};
pub use fees::{FeeEntry, FeeSchedule};
pub use fiduciary::{DisasterKind, MissedDeadline, SuccessDisasterAlert, UpcomingDeadline};
pub use health::HealthScoreBreakdown;
pub use insight::{AdvisorInsight, InsightCategory};
pub use ledger::{PointType, PointsLedgerEntry};
pub use mandate::Mandate;
pub use milestone::{DrawOutcome, Milestone, MilestoneType};
pub use odds::{DrawOdds, DrawProjection};
pub use purge::{PurgeAlert, PurgeRule};
pub use roadmap::{
    ActionRef, ActionType, CostKind, CostLineItem, Phase, Roadmap, RoadmapAction, RoadmapYear,
    SeasonWindow, Weapon,
};
pub use savings::{GoalAssessment, GoalStatus, SavingsGoal};
pub use severity::{Severity, Urgency};
