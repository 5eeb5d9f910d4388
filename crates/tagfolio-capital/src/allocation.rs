use tagfolio_core::models::{CapitalSummary, Roadmap, RoadmapAction};
use tracing::debug;

/// Sunk and floated portions of one action's cost.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CapitalSplit {
    pub sunk: f64,
    pub floated: f64,
}

/// Split an action's cost by its line items.
///
/// Without line items the whole cost is sunk. Any cost not covered by line
/// items is also sunk.
pub fn classify_action(action: &RoadmapAction) -> CapitalSplit {
    if action.cost_line_items.is_empty() {
        return CapitalSplit {
            sunk: action.cost,
            floated: 0.0,
        };
    }

    let mut split = CapitalSplit::default();
    for item in &action.cost_line_items {
        if item.kind.is_refundable() {
            split.floated += item.amount;
        } else {
            split.sunk += item.amount;
        }
    }

    let itemized = split.sunk + split.floated;
    if action.cost > itemized {
        split.sunk += action.cost - itemized;
    }
    split
}

/// Aggregate sunk/floated totals overall and per region.
pub fn compute_capital_summary(roadmap: &Roadmap) -> CapitalSummary {
    let mut summary = CapitalSummary::default();

    for (_, _, action) in roadmap.actions() {
        let split = classify_action(action);
        summary.total_sunk += split.sunk;
        summary.total_floated += split.floated;
        let region = summary.by_region.entry(action.region).or_default();
        region.sunk += split.sunk;
        region.floated += split.floated;
    }

    debug!(
        sunk = summary.total_sunk,
        floated = summary.total_floated,
        regions = summary.by_region.len(),
        "capital summary computed"
    );
    summary
}
