//! Points held for a key that the roadmap never hunts.

use tagfolio_core::models::{ActionRef, ConflictType, PlanConflict, Severity};

use super::DetectionContext;

pub fn detect(ctx: &DetectionContext<'_>) -> Vec<PlanConflict> {
    let cfg = ctx.config;
    let year = ctx.roadmap.first_year().unwrap_or(ctx.as_of_year);

    ctx.ledger
        .iter()
        .filter(|entry| entry.points >= cfg.abandon_info_points)
        .filter(|entry| !ctx.roadmap.has_hunt_for(entry.key()))
        .map(|entry| {
            let key = entry.key();
            let severity = if entry.points >= cfg.abandon_warning_points {
                Severity::Warning
            } else {
                Severity::Info
            };

            PlanConflict {
                id: format!("{}-{}-{}", ConflictType::PointAbandon, key.region, key.species),
                conflict_type: ConflictType::PointAbandon,
                severity,
                year,
                title: format!("{} {} points never used", entry.points, key),
                description: format!(
                    "You hold {} {} points in {} but no hunt is planned for them within the roadmap.",
                    entry.points, key.species, key.region
                ),
                resolution: "Schedule a hunt that burns these points, or stop buying points for \
                             this species."
                    .to_string(),
                affected_actions: ctx
                    .roadmap
                    .actions()
                    .filter(|(_, _, a)| a.key() == key)
                    .map(|(y, i, a)| ActionRef::new(y, i, a))
                    .collect(),
            }
        })
        .collect()
}
