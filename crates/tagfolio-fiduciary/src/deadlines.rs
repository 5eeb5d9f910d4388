//! Application deadline checks against a caller-supplied date.

use chrono::{Duration, NaiveDate};
use tagfolio_core::models::{Milestone, MissedDeadline, UpcomingDeadline};
use tracing::debug;

/// Incomplete `apply` milestones whose deadline is strictly before `as_of`.
///
/// Milestones of other types, completed ones, and ones without a due date are
/// never flagged. Output follows input order.
pub fn detect_missed_deadlines(milestones: &[Milestone], as_of: NaiveDate) -> Vec<MissedDeadline> {
    let missed: Vec<MissedDeadline> = milestones
        .iter()
        .filter_map(|m| {
            let due = m.open_deadline()?;
            (due < as_of).then(|| MissedDeadline {
                milestone_id: m.id.clone(),
                region: m.region,
                species: m.species,
                due_date: due,
                days_overdue: (as_of - due).num_days(),
            })
        })
        .collect();

    debug!(
        milestones = milestones.len(),
        missed = missed.len(),
        %as_of,
        "missed deadline scan"
    );
    missed
}

/// Incomplete `apply` milestones due within `[as_of, as_of + window_days]`,
/// soonest first.
pub fn detect_upcoming_deadlines(
    milestones: &[Milestone],
    as_of: NaiveDate,
    window_days: i64,
) -> Vec<UpcomingDeadline> {
    let horizon = as_of + Duration::days(window_days.max(0));

    let mut upcoming: Vec<UpcomingDeadline> = milestones
        .iter()
        .filter_map(|m| {
            let due = m.open_deadline()?;
            (as_of <= due && due <= horizon).then(|| UpcomingDeadline {
                milestone_id: m.id.clone(),
                region: m.region,
                species: m.species,
                due_date: due,
                days_remaining: (due - as_of).num_days(),
            })
        })
        .collect();
    upcoming.sort_by_key(|d| d.due_date);

    debug!(upcoming = upcoming.len(), window_days, "upcoming deadline scan");
    upcoming
}
