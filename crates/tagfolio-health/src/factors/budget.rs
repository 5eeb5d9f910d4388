//! Spend balance across regions, penalized for running over the ceiling.

use std::collections::BTreeMap;

use tagfolio_core::models::{Mandate, Roadmap};
use tagfolio_core::Region;

pub fn calculate(roadmap: &Roadmap, mandate: &Mandate, ceiling_penalty_cap: f64) -> f64 {
    let mut by_region: BTreeMap<Region, f64> = BTreeMap::new();
    for (_, _, action) in roadmap.actions() {
        *by_region.entry(action.region).or_default() += action.cost;
    }

    let total: f64 = by_region.values().sum();
    if total <= 0.0 {
        return 100.0;
    }

    let baseline = total / by_region.len() as f64;
    let mean_deviation = by_region
        .values()
        .map(|spend| (spend - baseline).abs() / baseline)
        .sum::<f64>()
        / by_region.len() as f64;

    100.0 - mean_deviation * 100.0 - ceiling_penalty(total, roadmap.len(), mandate, ceiling_penalty_cap)
}

/// `min(cap, (total / (ceiling × years) − 1) × 100)` when over, else 0.
/// Any spend against a zero ceiling takes the full cap.
pub fn ceiling_penalty(total: f64, years: usize, mandate: &Mandate, cap: f64) -> f64 {
    let allowance = mandate.annual_budget_ceiling * years.max(1) as f64;
    if allowance <= 0.0 {
        return if total > 0.0 { cap } else { 0.0 };
    }
    let over = (total / allowance - 1.0) * 100.0;
    over.clamp(0.0, cap)
}
