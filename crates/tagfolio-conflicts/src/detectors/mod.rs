//! Conflict detector registry.
//!
//! Every detector scans the full roadmap and returns its own findings; an
//! empty result from one never affects the others.

pub mod budget_overflow;
pub mod overdraw;
pub mod point_abandon;
pub mod schedule_overlap;
pub mod time_off;

use tagfolio_core::config::ConflictConfig;
use tagfolio_core::models::{Mandate, PlanConflict, PointsLedgerEntry, Roadmap};
use tracing::debug;

/// Everything a detector may read.
#[derive(Debug, Clone, Copy)]
pub struct DetectionContext<'a> {
    pub roadmap: &'a Roadmap,
    pub ledger: &'a [PointsLedgerEntry],
    pub mandate: &'a Mandate,
    pub config: &'a ConflictConfig,
    pub as_of_year: i32,
}

impl DetectionContext<'_> {
    /// Mandate override, else configured default.
    pub fn max_hunts_per_year(&self) -> u32 {
        self.mandate
            .max_hunts_per_year
            .unwrap_or(self.config.max_hunts_per_year)
    }
}

/// Run all five detectors and concatenate their findings in detector order.
pub fn detect_all(ctx: &DetectionContext<'_>) -> Vec<PlanConflict> {
    let mut results = Vec::new();

    let runs: [(&str, fn(&DetectionContext<'_>) -> Vec<PlanConflict>); 5] = [
        ("overdraw", overdraw::detect),
        ("time_off", time_off::detect),
        ("budget_overflow", budget_overflow::detect),
        ("schedule_overlap", schedule_overlap::detect),
        ("point_abandon", point_abandon::detect),
    ];

    for (name, detect) in runs {
        let found = detect(ctx);
        debug!(detector = name, found = found.len(), "detector finished");
        results.extend(found);
    }

    results
}
