use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::errors::ValidationError;

/// How a jurisdiction converts accumulated points into draw outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AllocationSystem {
    /// Points are a queue position; the top holders draw.
    Preference,
    /// Entries scale with the square of points; odds improve but never guarantee.
    BonusSquared,
    /// Flat odds regardless of points.
    RandomLottery,
}

impl AllocationSystem {
    pub fn as_str(self) -> &'static str {
        match self {
            AllocationSystem::Preference => "preference",
            AllocationSystem::BonusSquared => "bonus_squared",
            AllocationSystem::RandomLottery => "random_lottery",
        }
    }

    /// Lottery systems have no point threshold to project against.
    pub fn has_threshold(self) -> bool {
        !matches!(self, AllocationSystem::RandomLottery)
    }
}

impl fmt::Display for AllocationSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AllocationSystem {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preference" => Ok(AllocationSystem::Preference),
            "bonus_squared" | "bonus" => Ok(AllocationSystem::BonusSquared),
            "random_lottery" | "random" | "lottery" => Ok(AllocationSystem::RandomLottery),
            _ => Err(ValidationError::UnknownAllocationSystem {
                name: s.to_string(),
            }),
        }
    }
}
