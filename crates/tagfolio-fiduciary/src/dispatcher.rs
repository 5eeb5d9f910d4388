//! FiduciaryDispatcher: deadline and success-disaster checks under one config.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tagfolio_core::config::FiduciaryConfig;
use tagfolio_core::models::{
    Mandate, Milestone, MissedDeadline, SuccessDisasterAlert, UpcomingDeadline,
};

use crate::{deadlines, disaster};

#[derive(Debug, Clone, Default)]
pub struct FiduciaryDispatcher {
    config: FiduciaryConfig,
}

impl FiduciaryDispatcher {
    pub fn new(config: FiduciaryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FiduciaryConfig {
        &self.config
    }

    pub fn missed_deadlines(&self, milestones: &[Milestone], as_of: NaiveDate) -> Vec<MissedDeadline> {
        deadlines::detect_missed_deadlines(milestones, as_of)
    }

    pub fn upcoming_deadlines(
        &self,
        milestones: &[Milestone],
        as_of: NaiveDate,
    ) -> Vec<UpcomingDeadline> {
        deadlines::detect_upcoming_deadlines(milestones, as_of, self.config.upcoming_window_days)
    }

    /// Success-disaster check for one year using the mandate's budgets.
    pub fn success_disaster(
        &self,
        milestones: &[Milestone],
        mandate: &Mandate,
        year: i32,
    ) -> Vec<SuccessDisasterAlert> {
        disaster::detect_success_disaster(
            milestones,
            mandate.hunt_year_budget(),
            mandate.pto_days(),
            year,
            self.config.days_per_hunt,
        )
    }

    /// Success-disaster checks over `years` plus every year a milestone
    /// falls in, in ascending year order.
    pub fn success_disasters(
        &self,
        milestones: &[Milestone],
        mandate: &Mandate,
        years: impl IntoIterator<Item = i32>,
    ) -> Vec<SuccessDisasterAlert> {
        let years: BTreeSet<i32> = years
            .into_iter()
            .chain(milestones.iter().map(|m| m.year))
            .collect();
        years
            .into_iter()
            .flat_map(|y| self.success_disaster(milestones, mandate, y))
            .collect()
    }
}
