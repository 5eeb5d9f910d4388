//! Burn-rate matrix.
//!
//! Point-creep velocity (PCV) is the mean year-over-year increase in the
//! draw requirement. A PCV of 1.0 or more means the requirement outruns one
//! point per year: the position is a dead asset.

use tagfolio_core::config::ProjectionConfig;
use tagfolio_core::constants::DEAD_ASSET_VELOCITY;
use tagfolio_core::models::{BurnRateRow, CreepTrend, DrawHistory, PointsLedgerEntry};
use tagfolio_odds::{creep_rate_from_velocity, project_draw};
use tracing::debug;

/// Half-to-half change in PCV (points/year) that counts as a trend.
const TREND_THRESHOLD: f64 = 0.1;

/// One row per ledger entry, sorted by region then species.
pub fn compute_burn_rate_matrix(
    ledger: &[PointsLedgerEntry],
    histories: &[DrawHistory],
    current_year: i32,
    config: &ProjectionConfig,
) -> Vec<BurnRateRow> {
    let mut rows: Vec<BurnRateRow> = ledger
        .iter()
        .map(|entry| {
            let key = entry.key();
            let history = histories
                .iter()
                .find(|h| h.region == key.region && h.species == key.species);
            let system = history
                .map(|h| h.system)
                .unwrap_or_else(|| key.region.default_allocation());

            let deltas = history.map(yearly_deltas).unwrap_or_default();
            let (velocity, trend, required) = if system.has_threshold() {
                (
                    mean(&deltas),
                    creep_trend(&deltas),
                    history.and_then(latest_requirement),
                )
            } else {
                (0.0, CreepTrend::Stable, None)
            };

            let is_dead_asset = system.has_threshold() && velocity >= DEAD_ASSET_VELOCITY;
            let eta_year = match required {
                Some(req) if !is_dead_asset => {
                    let rate = creep_rate_from_velocity(velocity, req);
                    project_draw(entry.points, req, rate, config.max_projection_years)
                        .reachable()
                        .map(|years| current_year + years as i32)
                }
                _ => None,
            };

            BurnRateRow {
                region: key.region,
                species: key.species,
                system,
                current_points: entry.points,
                required_points: required,
                creep_velocity: velocity,
                trend,
                eta_year,
                is_dead_asset,
            }
        })
        .collect();

    rows.sort_by_key(|r| (r.region, r.species));
    debug!(
        rows = rows.len(),
        dead = rows.iter().filter(|r| r.is_dead_asset).count(),
        "burn-rate matrix computed"
    );
    rows
}

/// Mean year-over-year requirement increase for a history.
pub fn creep_velocity(history: &DrawHistory) -> f64 {
    mean(&yearly_deltas(history))
}

/// Compare the mean PCV of the first half of samples to the second half.
pub fn creep_trend(deltas: &[f64]) -> CreepTrend {
    if deltas.len() < 2 {
        return CreepTrend::Stable;
    }
    let (first, second) = deltas.split_at(deltas.len() / 2);
    let change = mean(second) - mean(first);
    if change > TREND_THRESHOLD {
        CreepTrend::Accelerating
    } else if change < -TREND_THRESHOLD {
        CreepTrend::Decelerating
    } else {
        CreepTrend::Stable
    }
}

/// Per-year requirement changes in chronological order; gaps are averaged.
fn yearly_deltas(history: &DrawHistory) -> Vec<f64> {
    let mut samples = history.samples.clone();
    samples.sort_by_key(|(year, _)| *year);
    samples.dedup_by_key(|(year, _)| *year);
    samples
        .windows(2)
        .map(|w| (w[1].1 - w[0].1) / f64::from(w[1].0 - w[0].0))
        .collect()
}

fn latest_requirement(history: &DrawHistory) -> Option<f64> {
    history
        .samples
        .iter()
        .max_by_key(|(year, _)| *year)
        .map(|(_, points)| *points)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
