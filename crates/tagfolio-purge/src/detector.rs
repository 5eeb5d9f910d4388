//! Inactivity walk over the roadmap.
//!
//! For every tracked key the roadmap years are visited in order with a
//! consecutive-skip counter. Any action for the key resets it; a year with
//! none increments it. One alert is raised the year the counter reaches the
//! region's limit, and the key stays quiet until activity resets the counter.

use tagfolio_core::models::{FeeSchedule, PointsLedgerEntry, PurgeAlert, Roadmap, Severity};
use tracing::debug;

use crate::rules::PurgeRuleTable;

#[derive(Debug, Clone, Default)]
pub struct PurgeDetector {
    rules: PurgeRuleTable,
}

impl PurgeDetector {
    pub fn new(rules: PurgeRuleTable) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &PurgeRuleTable {
        &self.rules
    }

    pub fn detect(
        &self,
        roadmap: &Roadmap,
        ledger: &[PointsLedgerEntry],
        fees: &FeeSchedule,
    ) -> Vec<PurgeAlert> {
        detect_purges(roadmap, ledger, &self.rules, fees)
    }
}

pub fn detect_purges(
    roadmap: &Roadmap,
    ledger: &[PointsLedgerEntry],
    rules: &PurgeRuleTable,
    fees: &FeeSchedule,
) -> Vec<PurgeAlert> {
    let mut alerts = Vec::new();

    for entry in ledger {
        if entry.points == 0 {
            continue;
        }
        let Some(max_inactive) = rules.max_inactive_years(entry.region) else {
            continue;
        };
        let key = entry.key();

        let mut skipped = 0u32;
        for year in roadmap {
            if year.touches(key) {
                skipped = 0;
                continue;
            }
            skipped += 1;
            if skipped != max_inactive {
                continue;
            }

            let sunk_value = f64::from(entry.points) * fees.annual_cost(key);
            alerts.push(PurgeAlert {
                region: entry.region,
                species: entry.species,
                severity: Severity::Critical,
                year_of_purge: year.year,
                current_points: entry.points,
                sunk_value,
                message: format!(
                    "{} {} points face permanent deletion in {}: {} consecutive year(s) without \
                     activity triggers a purge of {} points (${:.2} sunk). Buy a point or apply \
                     before then.",
                    key.region,
                    key.species,
                    year.year,
                    max_inactive,
                    entry.points,
                    sunk_value
                ),
            });
        }
    }

    debug!(
        tracked = ledger.len(),
        alerts = alerts.len(),
        "purge detection finished"
    );
    alerts
}
