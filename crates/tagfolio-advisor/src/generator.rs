//! InsightGenerator: collects every source and ranks the result.

use chrono::NaiveDate;
use tagfolio_core::config::AdvisorConfig;
use tagfolio_core::models::{
    AdvisorInsight, HealthScoreBreakdown, MissedDeadline, PlanConflict, PurgeAlert, SavingsGoal,
    SuccessDisasterAlert, UpcomingDeadline,
};
use tracing::debug;

use crate::{ranking, savings, sources};

/// Detector output and goals for one portfolio.
#[derive(Debug, Clone, Copy)]
pub struct AdvisorInput<'a> {
    pub missed_deadlines: &'a [MissedDeadline],
    pub upcoming_deadlines: &'a [UpcomingDeadline],
    pub purges: &'a [PurgeAlert],
    pub conflicts: &'a [PlanConflict],
    pub disasters: &'a [SuccessDisasterAlert],
    pub health: Option<&'a HealthScoreBreakdown>,
    pub savings_goals: &'a [SavingsGoal],
    pub as_of: NaiveDate,
}

#[derive(Debug, Clone, Default)]
pub struct InsightGenerator {
    config: AdvisorConfig,
}

impl InsightGenerator {
    pub fn new(config: AdvisorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    pub fn savings_insights(&self, goals: &[SavingsGoal], as_of: NaiveDate) -> Vec<AdvisorInsight> {
        savings::savings_insights(
            goals,
            as_of,
            self.config.red_shortfall_ratio,
            self.config.max_savings_insights,
        )
    }

    /// Every insight, ranked and truncated to `max_insights`.
    pub fn generate(&self, input: &AdvisorInput<'_>) -> Vec<AdvisorInsight> {
        let mut all: Vec<AdvisorInsight> = Vec::new();

        all.extend(input.missed_deadlines.iter().map(sources::from_missed_deadline));
        all.extend(input.purges.iter().map(sources::from_purge));
        all.extend(input.disasters.iter().map(sources::from_disaster));
        all.extend(input.conflicts.iter().map(sources::from_conflict));
        all.extend(input.upcoming_deadlines.iter().map(sources::from_upcoming_deadline));
        all.extend(self.savings_insights(input.savings_goals, input.as_of));
        if let Some(health) = input.health {
            all.extend(sources::from_health(health, self.config.positive_health_threshold));
        }

        let candidates = all.len();
        let ranked = ranking::rank(all, self.config.max_insights);
        debug!(candidates, returned = ranked.len(), "advisor insights ranked");
        ranked
    }
}
