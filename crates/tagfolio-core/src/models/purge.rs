use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::severity::Severity;
use crate::catalog::{Region, Species};

/// Points are deleted after this many consecutive years with no activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PurgeRule {
    pub region: Region,
    pub max_inactive_years: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PurgeAlert {
    pub region: Region,
    pub species: Species,
    pub severity: Severity,
    pub year_of_purge: i32,
    pub current_points: u32,
    pub sunk_value: f64,
    pub message: String,
}
