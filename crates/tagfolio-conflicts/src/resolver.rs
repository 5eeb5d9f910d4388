//! ConflictResolver: runs every detector over one roadmap snapshot.

use tagfolio_core::config::ConflictConfig;
use tagfolio_core::models::{Mandate, PlanConflict, PointsLedgerEntry, Roadmap};
use tracing::debug;

use crate::detectors::{self, DetectionContext};
use crate::report::ConflictReport;

#[derive(Debug, Clone, Default)]
pub struct ConflictResolver {
    config: ConflictConfig,
}

impl ConflictResolver {
    pub fn new(config: ConflictConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConflictConfig {
        &self.config
    }

    /// All conflicts, concatenated in detector order.
    pub fn resolve(
        &self,
        roadmap: &Roadmap,
        ledger: &[PointsLedgerEntry],
        mandate: &Mandate,
        as_of_year: i32,
    ) -> Vec<PlanConflict> {
        let ctx = DetectionContext {
            roadmap,
            ledger,
            mandate,
            config: &self.config,
            as_of_year,
        };
        let conflicts = detectors::detect_all(&ctx);
        debug!(
            years = roadmap.len(),
            conflicts = conflicts.len(),
            "conflict resolution finished"
        );
        conflicts
    }

    /// Resolve and wrap in a report with severity helpers.
    pub fn report(
        &self,
        roadmap: &Roadmap,
        ledger: &[PointsLedgerEntry],
        mandate: &Mandate,
        as_of_year: i32,
    ) -> ConflictReport {
        ConflictReport::new(self.resolve(roadmap, ledger, mandate, as_of_year))
    }
}
