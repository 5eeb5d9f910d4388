use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{AllocationSystem, Region, Species};

/// Sunk vs. floated capital for one region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegionCapital {
    pub sunk: f64,
    pub floated: f64,
}

impl RegionCapital {
    pub fn total(&self) -> f64 {
        self.sunk + self.floated
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CapitalSummary {
    pub total_sunk: f64,
    pub total_floated: f64,
    pub by_region: BTreeMap<Region, RegionCapital>,
}

/// Historical draw requirements for one position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DrawHistory {
    pub region: Region,
    pub species: Species,
    pub system: AllocationSystem,
    /// `(year, points required to draw)`, any order.
    pub samples: Vec<(i32, f64)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CreepTrend {
    Accelerating,
    Stable,
    Decelerating,
}

/// One row of the burn-rate matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BurnRateRow {
    pub region: Region,
    pub species: Species,
    pub system: AllocationSystem,
    pub current_points: u32,
    /// `None` for lottery systems, which have no threshold.
    pub required_points: Option<f64>,
    /// Point-creep velocity: mean year-over-year increase in the requirement.
    pub creep_velocity: f64,
    pub trend: CreepTrend,
    pub eta_year: Option<i32>,
    pub is_dead_asset: bool,
}
