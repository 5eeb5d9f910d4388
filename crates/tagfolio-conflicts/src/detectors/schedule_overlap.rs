//! Hunts in different regions that may fall in the same season window.
//!
//! When both hunts carry structured season dates, the check is an exact
//! date-range intersection. Otherwise it falls back to a text heuristic:
//! a hunt whose description does not mention an early/archery season is
//! assumed to sit in the common autumn rifle window. The heuristic misses
//! early seasons described in other words, so findings are `Info` only.

use std::sync::LazyLock;

use regex::Regex;
use tagfolio_core::models::{ActionRef, ConflictType, PlanConflict, RoadmapAction, Severity, Weapon};

use super::DetectionContext;

/// Free-text markers of an early (archery) season.
static EARLY_SEASON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(archery|bow(hunt|hunting)?|early[- ]season)\b").unwrap()
});

/// Why two hunts were flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapBasis {
    /// Structured season dates intersect.
    SeasonDates,
    /// Neither description indicates an early season.
    DescriptionHeuristic,
}

/// Whether the action is known or inferred to be an early-season hunt.
pub fn indicates_early_season(action: &RoadmapAction) -> bool {
    match &action.season {
        Some(season) => season.weapon == Weapon::Archery,
        None => action
            .description
            .as_deref()
            .is_some_and(|d| EARLY_SEASON_RE.is_match(d)),
    }
}

/// Decide whether two hunts may collide, and on what basis.
pub fn may_collide(a: &RoadmapAction, b: &RoadmapAction) -> Option<OverlapBasis> {
    match (&a.season, &b.season) {
        (Some(sa), Some(sb)) => sa.overlaps(sb).then_some(OverlapBasis::SeasonDates),
        _ => (!indicates_early_season(a) && !indicates_early_season(b))
            .then_some(OverlapBasis::DescriptionHeuristic),
    }
}

pub fn detect(ctx: &DetectionContext<'_>) -> Vec<PlanConflict> {
    let mut results = Vec::new();

    for year in ctx.roadmap {
        let hunts: Vec<(usize, &RoadmapAction)> = year
            .actions
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_hunt())
            .collect();

        for (pos, &(i, a)) in hunts.iter().enumerate() {
            for &(j, b) in &hunts[pos + 1..] {
                if a.region == b.region {
                    continue;
                }
                let Some(basis) = may_collide(a, b) else {
                    continue;
                };

                let description = match basis {
                    OverlapBasis::SeasonDates => format!(
                        "The {} {} and {} {} seasons overlap on the calendar.",
                        a.region, a.species, b.region, b.species
                    ),
                    OverlapBasis::DescriptionHeuristic => format!(
                        "Neither the {} {} nor the {} {} hunt is described as an early or archery \
                         season, so both likely fall in the autumn rifle window. Inferred from \
                         descriptions; season dates may not actually collide.",
                        a.region, a.species, b.region, b.species
                    ),
                };

                results.push(PlanConflict {
                    id: format!("{}-{}-{}-{}", ConflictType::ScheduleOverlap, year.year, i, j),
                    conflict_type: ConflictType::ScheduleOverlap,
                    severity: Severity::Info,
                    year: year.year,
                    title: format!(
                        "Possible season overlap: {} and {} in {}",
                        a.region, b.region, year.year
                    ),
                    description,
                    resolution: "Check published season dates; pick a different unit or weapon \
                                 season for one hunt if they collide."
                        .to_string(),
                    affected_actions: vec![
                        ActionRef::new(year.year, i, a),
                        ActionRef::new(year.year, j, b),
                    ],
                });
            }
        }
    }

    results
}
