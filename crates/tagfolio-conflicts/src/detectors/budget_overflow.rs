//! Year cost against the hunt-year or point-year budget.
//!
//! Flags above `budget × warning_ratio`; critical above `budget × critical_ratio`.

use tagfolio_core::models::{ActionRef, ConflictType, PlanConflict, Severity};

use super::DetectionContext;

pub fn detect(ctx: &DetectionContext<'_>) -> Vec<PlanConflict> {
    let cfg = ctx.config;

    ctx.roadmap
        .iter()
        .filter_map(|year| {
            let hunt_year = year.has_hunt();
            let budget = if hunt_year {
                ctx.mandate.hunt_year_budget()
            } else {
                ctx.mandate.point_year_budget()
            };
            let cost = year.estimated_cost;

            let severity = if cost > budget * cfg.budget_critical_ratio {
                Severity::Critical
            } else if cost > budget * cfg.budget_warning_ratio {
                Severity::Warning
            } else {
                return None;
            };

            let overage = cost - budget;
            let kind = if hunt_year { "hunt-year" } else { "point-year" };

            Some(PlanConflict {
                id: format!("{}-{}", ConflictType::BudgetOverflow, year.year),
                conflict_type: ConflictType::BudgetOverflow,
                severity,
                year: year.year,
                title: format!("{} over budget by ${:.0}", year.year, overage),
                description: format!(
                    "Planned spend of ${:.2} exceeds the {} budget of ${:.2} by ${:.2}.",
                    cost, kind, budget, overage
                ),
                resolution: "Drop a low-odds application or move a hunt to a lighter year."
                    .to_string(),
                affected_actions: year
                    .actions
                    .iter()
                    .enumerate()
                    .map(|(i, a)| ActionRef::new(year.year, i, a))
                    .collect(),
            })
        })
        .collect()
}
