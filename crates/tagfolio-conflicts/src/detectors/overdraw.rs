//! More hunts in one year than the hunter can take.

use tagfolio_core::models::{ActionRef, ConflictType, PlanConflict, Severity};

use super::DetectionContext;

pub fn detect(ctx: &DetectionContext<'_>) -> Vec<PlanConflict> {
    let max = ctx.max_hunts_per_year();

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

            if hunts.len() as u32 <= max {
                return None;
            }

            let regions: Vec<String> = hunts
                .iter()
                .map(|r| format!("{} {}", r.region, r.species))
                .collect();

            Some(PlanConflict {
                id: format!("{}-{}", ConflictType::Overdraw, year.year),
                conflict_type: ConflictType::Overdraw,
                severity: Severity::Critical,
                year: year.year,
                title: format!("{} hunts planned in {}", hunts.len(), year.year),
                description: format!(
                    "{} hunts ({}) exceed the limit of {} per year.",
                    hunts.len(),
                    regions.join(", "),
                    max
                ),
                resolution: format!(
                    "Defer {} hunt(s) to a later year or switch them to point purchases.",
                    hunts.len() as u32 - max
                ),
                affected_actions: hunts,
            })
        })
        .collect()
}
