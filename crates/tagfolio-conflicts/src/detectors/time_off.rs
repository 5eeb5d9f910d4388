//! Estimated hunt days exceed the time off available in a year.

use tagfolio_core::models::{ActionRef, ConflictType, PlanConflict, Severity};

use super::DetectionContext;

pub fn detect(ctx: &DetectionContext<'_>) -> Vec<PlanConflict> {
    let available = ctx.mandate.pto_days();
    let per_hunt = ctx.config.days_per_hunt;

    ctx.roadmap
        .iter()
        .filter_map(|year| {
            let hunts: Vec<ActionRef> = year
                .actions
                .iter()
                .enumerate()
                .filter(|(_, a)| a.is_hunt())
                .map(|(i, a)| ActionRef::new(year.year, i, a))
                .collect();

            let days = hunts.len() as u32 * per_hunt;
            if days <= available {
                return None;
            }

            Some(PlanConflict {
                id: format!("{}-{}", ConflictType::TimeOffConflict, year.year),
                conflict_type: ConflictType::TimeOffConflict,
                severity: Severity::Warning,
                year: year.year,
                title: format!("{} hunt days needed in {}", days, year.year),
                description: format!(
                    "{} hunts at ~{} days each need {} days; only {} days of time off are available.",
                    hunts.len(),
                    per_hunt,
                    days,
                    available
                ),
                resolution: "Shorten a trip, move a hunt to another year, or plan additional leave."
                    .to_string(),
                affected_actions: hunts,
            })
        })
        .collect()
}
