use serde::{Deserialize, Serialize};
use tagfolio_core::models::{
    AdvisorInsight, BurnRateRow, CapitalSummary, HealthScoreBreakdown, MissedDeadline,
    PlanConflict, PurgeAlert, Severity, SuccessDisasterAlert, UpcomingDeadline, Urgency,
};
use ts_rs::TS;

/// Output of one [`PortfolioEngine::analyze`](crate::PortfolioEngine::analyze) run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PortfolioReport {
    pub conflicts: Vec<PlanConflict>,
    pub purge_alerts: Vec<PurgeAlert>,
    pub missed_deadlines: Vec<MissedDeadline>,
    pub upcoming_deadlines: Vec<UpcomingDeadline>,
    pub success_disasters: Vec<SuccessDisasterAlert>,
    pub capital: CapitalSummary,
    pub burn_rate: Vec<BurnRateRow>,
    pub health: HealthScoreBreakdown,
    pub insights: Vec<AdvisorInsight>,
}

impl PortfolioReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Critical findings across conflicts, purges, and success disasters.
    pub fn critical_count(&self) -> usize {
        self.conflicts
            .iter()
            .map(|c| c.severity)
            .chain(self.purge_alerts.iter().map(|p| p.severity))
            .chain(self.success_disasters.iter().map(|d| d.severity))
            .filter(|s| *s == Severity::Critical)
            .count()
    }

    pub fn needs_attention(&self) -> bool {
        self.insights.iter().any(|i| i.urgency == Urgency::Immediate)
    }
}
