use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{Region, Species, SpeciesKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PointType {
    Preference,
    Bonus,
}

/// Accumulated points for one position. Owned by the persistence layer;
/// the engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PointsLedgerEntry {
    pub region: Region,
    pub species: Species,
    pub points: u32,
    pub point_type: PointType,
}

impl PointsLedgerEntry {
    pub fn key(&self) -> SpeciesKey {
        SpeciesKey::new(self.region, self.species)
    }
}

