use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use super::AllocationSystem;
use crate::errors::ValidationError;

/// A licensing jurisdiction. Serialized as its two-letter postal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Region {
    #[serde(rename = "AK")]
    Alaska,
    #[serde(rename = "AZ")]
    Arizona,
    #[serde(rename = "CA")]
    California,
    #[serde(rename = "CO")]
    Colorado,
    #[serde(rename = "ID")]
    Idaho,
    #[serde(rename = "KS")]
    Kansas,
    #[serde(rename = "MT")]
    Montana,
    #[serde(rename = "NE")]
    Nebraska,
    #[serde(rename = "NV")]
    Nevada,
    #[serde(rename = "NM")]
    NewMexico,
    #[serde(rename = "OR")]
    Oregon,
    #[serde(rename = "SD")]
    SouthDakota,
    #[serde(rename = "UT")]
    Utah,
    #[serde(rename = "WA")]
    Washington,
    #[serde(rename = "WY")]
    Wyoming,
}

impl Region {
    pub const ALL: [Region; 15] = [
        Region::Alaska,
        Region::Arizona,
        Region::California,
        Region::Colorado,
        Region::Idaho,
        Region::Kansas,
        Region::Montana,
        Region::Nebraska,
        Region::Nevada,
        Region::NewMexico,
        Region::Oregon,
        Region::SouthDakota,
        Region::Utah,
        Region::Washington,
        Region::Wyoming,
    ];

    /// Two-letter postal code.
    pub fn code(self) -> &'static str {
        match self {
            Region::Alaska => "AK",
            Region::Arizona => "AZ",
            Region::California => "CA",
            Region::Colorado => "CO",
            Region::Idaho => "ID",
            Region::Kansas => "KS",
            Region::Montana => "MT",
            Region::Nebraska => "NE",
            Region::Nevada => "NV",
            Region::NewMexico => "NM",
            Region::Oregon => "OR",
            Region::SouthDakota => "SD",
            Region::Utah => "UT",
            Region::Washington => "WA",
            Region::Wyoming => "WY",
        }
    }

    /// The draw system the region uses for most limited-entry tags.
    pub fn default_allocation(self) -> AllocationSystem {
        match self {
            Region::Colorado
            | Region::Wyoming
            | Region::Oregon
            | Region::Nebraska
            | Region::SouthDakota
            | Region::Kansas
            | Region::California => AllocationSystem::Preference,
            Region::Nevada | Region::Arizona | Region::Montana | Region::Utah => {
                AllocationSystem::BonusSquared
            }
            Region::NewMexico | Region::Idaho | Region::Alaska | Region::Washington => {
                AllocationSystem::RandomLottery
            }
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Region::ALL
            .iter()
            .copied()
            .find(|r| r.code() == code)
            .ok_or_else(|| ValidationError::UnknownRegion {
                code: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("wy".parse::<Region>().unwrap(), Region::Wyoming);
        assert_eq!(" CO ".parse::<Region>().unwrap(), Region::Colorado);
    }

    #[test]
    fn unknown_code_is_a_validation_error() {
        let err = "XX".parse::<Region>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownRegion {
                code: "XX".to_string()
            }
        );
    }

    #[test]
    fn code_round_trips_through_serde() {
        for region in Region::ALL {
            let json = serde_json::to_string(&region).unwrap();
            assert_eq!(json, format!("\"{}\"", region.code()));
            let back: Region = serde_json::from_str(&json).unwrap();
            assert_eq!(back, region);
        }
    }
}
