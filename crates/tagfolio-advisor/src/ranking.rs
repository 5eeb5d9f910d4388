use std::collections::HashSet;

use tagfolio_core::models::AdvisorInsight;

/// Stable sort by urgency, drop repeated ids (first wins), keep `limit`.
pub fn rank(mut insights: Vec<AdvisorInsight>, limit: usize) -> Vec<AdvisorInsight> {
    insights.sort_by_key(|i| i.urgency);

    let mut seen = HashSet::new();
    insights.retain(|i| seen.insert(i.id.clone()));
    insights.truncate(limit);
    insights
}
