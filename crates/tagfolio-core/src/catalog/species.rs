use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::errors::ValidationError;

/// Big-game species tracked by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Elk,
    MuleDeer,
    Whitetail,
    CouesDeer,
    Pronghorn,
    Moose,
    BighornSheep,
    DesertSheep,
    MountainGoat,
    Bison,
    BlackBear,
    MountainLion,
}

impl Species {
    pub const ALL: [Species; 12] = [
        Species::Elk,
        Species::MuleDeer,
        Species::Whitetail,
        Species::CouesDeer,
        Species::Pronghorn,
        Species::Moose,
        Species::BighornSheep,
        Species::DesertSheep,
        Species::MountainGoat,
        Species::Bison,
        Species::BlackBear,
        Species::MountainLion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Species::Elk => "elk",
            Species::MuleDeer => "mule_deer",
            Species::Whitetail => "whitetail",
            Species::CouesDeer => "coues_deer",
            Species::Pronghorn => "pronghorn",
            Species::Moose => "moose",
            Species::BighornSheep => "bighorn_sheep",
            Species::DesertSheep => "desert_sheep",
            Species::MountainGoat => "mountain_goat",
            Species::Bison => "bison",
            Species::BlackBear => "black_bear",
            Species::MountainLion => "mountain_lion",
        }
    }

    /// Steep, high-altitude hunts with a narrower ideal age window.
    pub fn is_physically_demanding(self) -> bool {
        matches!(
            self,
            Species::BighornSheep | Species::DesertSheep | Species::MountainGoat
        )
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        Species::ALL
            .iter()
            .copied()
            .find(|sp| sp.as_str() == name)
            .ok_or_else(|| ValidationError::UnknownSpecies {
                name: s.to_string(),
            })
    }
}
