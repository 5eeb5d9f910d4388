use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::severity::Urgency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    Deadline,
    Purge,
    Conflict,
    SuccessDisaster,
    Savings,
    PortfolioHealth,
}

/// A ranked, user-facing recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdvisorInsight {
    pub id: String,
    pub category: InsightCategory,
    pub urgency: Urgency,
    pub interpretation: String,
    pub recommendation: String,
    pub call_to_action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporal_context: Option<String>,
}
