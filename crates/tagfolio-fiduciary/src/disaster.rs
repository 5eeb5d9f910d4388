//! Success disaster: drawing more tags than the year can pay for or fit in.

use tagfolio_core::models::{DisasterKind, Milestone, Severity, SuccessDisasterAlert};
use tracing::debug;

/// Check one year's drawn milestones against the hunt-year budget and time off.
///
/// Only milestones with a `drew` outcome count. The budget and time-off checks
/// are independent; either, both, or neither may fire, and a single draw is
/// enough for either.
pub fn detect_success_disaster(
    milestones: &[Milestone],
    hunt_year_budget: f64,
    pto_days_available: u32,
    year: i32,
    days_per_hunt: u32,
) -> Vec<SuccessDisasterAlert> {
    let drawn: Vec<&Milestone> = milestones
        .iter()
        .filter(|m| m.year == year && m.drew())
        .collect();
    if drawn.is_empty() {
        return Vec::new();
    }

    let ids: Vec<String> = drawn.iter().map(|m| m.id.clone()).collect();
    let total: f64 = drawn.iter().map(|m| m.total_cost).sum();
    let mut alerts = Vec::new();

    if total > hunt_year_budget {
        let overage = total - hunt_year_budget;
        alerts.push(SuccessDisasterAlert {
            id: format!("success_disaster-budget-{year}"),
            kind: DisasterKind::Budget,
            severity: Severity::Critical,
            year,
            title: format!("Drawn tags in {year} exceed the hunt-year budget"),
            description: format!(
                "{} drawn tag(s) cost ${:.2} against a hunt-year budget of ${:.2}, an overage \
                 of ${:.2}.",
                drawn.len(),
                total,
                hunt_year_budget,
                overage
            ),
            overage,
            milestone_ids: ids.clone(),
        });
    }

    let days_needed = drawn.len() as u32 * days_per_hunt;
    if days_needed > pto_days_available {
        let over = days_needed - pto_days_available;
        alerts.push(SuccessDisasterAlert {
            id: format!("success_disaster-time_off-{year}"),
            kind: DisasterKind::TimeOff,
            severity: Severity::Warning,
            year,
            title: format!("Drawn hunts in {year} need more time off than available"),
            description: format!(
                "{} drawn hunt(s) at ~{} days each need {} days; {} days are available, {} short.",
                drawn.len(),
                days_per_hunt,
                days_needed,
                pto_days_available,
                over
            ),
            overage: f64::from(over),
            milestone_ids: ids,
        });
    }

    debug!(year, drawn = drawn.len(), total, alerts = alerts.len(), "success disaster check");
    alerts
}
