use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tagfolio_core::errors::TagfolioResult;
use tagfolio_core::models::{
    DrawHistory, FeeEntry, FeeSchedule, Mandate, Milestone, PointsLedgerEntry, Roadmap,
    SavingsGoal,
};
use tagfolio_core::validation;

/// Everything the engine reads for one analysis run.
///
/// `as_of` is the caller's notion of today; nothing in the engine reads the
/// system clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    pub roadmap: Roadmap,
    #[serde(default)]
    pub ledger: Vec<PointsLedgerEntry>,
    pub mandate: Mandate,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub savings_goals: Vec<SavingsGoal>,
    #[serde(default)]
    pub draw_histories: Vec<DrawHistory>,
    /// Explicit annual holding costs. Keys missing here fall back to the
    /// roadmap's latest point or application cost.
    #[serde(default)]
    pub fees: Vec<FeeEntry>,
    pub as_of: NaiveDate,
}

impl PortfolioSnapshot {
    pub fn from_json(s: &str) -> TagfolioResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn as_of_year(&self) -> i32 {
        self.as_of.year()
    }

    pub fn validate(&self) -> TagfolioResult<()> {
        validation::validate_roadmap(&self.roadmap)?;
        validation::validate_ledger(&self.ledger)?;
        validation::validate_mandate(&self.mandate)?;
        validation::validate_milestones(&self.milestones)?;
        Ok(())
    }

    /// Roadmap-derived holding costs with explicit fees layered on top.
    pub fn fee_schedule(&self) -> FeeSchedule {
        FeeSchedule::from_roadmap(&self.roadmap).merged(&FeeSchedule::from_entries(&self.fees))
    }
}
