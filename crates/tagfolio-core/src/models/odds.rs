use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Years until a point holder catches a creeping requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DrawProjection {
    pub years: u32,
    /// True when the projection hit the horizon cap without converging.
    pub capped: bool,
}

impl DrawProjection {
    pub fn reachable(&self) -> Option<u32> {
        (!self.capped).then_some(self.years)
    }
}

/// Draw-odds estimate for one position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DrawOdds {
    /// Probability of drawing this year, in [0, 1].
    pub current_odds: f64,
    /// `None` for lottery systems and for positions that never converge.
    pub years_to_likely_draw: Option<u32>,
    /// Probability of at least one draw over the horizon, in [0, 1].
    pub cumulative_odds: Option<f64>,
}
