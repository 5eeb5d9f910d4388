use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{Region, Species, SpeciesKey};
use crate::errors::ValidationError;

/// Strategic phase of a roadmap year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Build,
    Burn,
    Gap,
    Trophy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    BuyPoints,
    Apply,
    Hunt,
    Scout,
}

/// What a line item pays for. Only tag deposits come back on an unsuccessful draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CostKind {
    ApplicationFee,
    PointFee,
    QualifyingLicense,
    TagDeposit,
    Travel,
    Other,
}

impl CostKind {
    pub fn is_refundable(self) -> bool {
        matches!(self, CostKind::TagDeposit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CostLineItem {
    pub label: String,
    pub amount: f64,
    pub kind: CostKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Weapon {
    Archery,
    Muzzleloader,
    Rifle,
}

/// Structured season dates for a hunt, when the reference data has them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeasonWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub weapon: Weapon,
}

impl SeasonWindow {
    /// Inclusive date-range intersection.
    pub fn overlaps(&self, other: &SeasonWindow) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// One planned action in a roadmap year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoadmapAction {
    #[serde(rename = "type")]
    pub action_type: ActionType,
    pub region: Region,
    pub species: Species,
    pub cost: f64,
    #[serde(default)]
    pub cost_line_items: Vec<CostLineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_draw_odds: Option<f64>,
    /// Free-text hunt description from the reference data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<SeasonWindow>,
}

impl RoadmapAction {
    pub fn key(&self) -> SpeciesKey {
        SpeciesKey::new(self.region, self.species)
    }

    pub fn is_hunt(&self) -> bool {
        self.action_type == ActionType::Hunt
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoadmapYear {
    pub year: i32,
    pub phase: Phase,
    #[serde(default)]
    pub actions: Vec<RoadmapAction>,
    pub estimated_cost: f64,
    #[serde(default)]
    pub is_hunt_year: bool,
}

impl RoadmapYear {
    pub fn hunts(&self) -> impl Iterator<Item = &RoadmapAction> {
        self.actions.iter().filter(|a| a.is_hunt())
    }

    pub fn hunt_count(&self) -> usize {
        self.hunts().count()
    }

    pub fn has_hunt(&self) -> bool {
        self.actions.iter().any(RoadmapAction::is_hunt)
    }

    /// Any action of any type for the key.
    pub fn touches(&self, key: SpeciesKey) -> bool {
        self.actions.iter().any(|a| a.key() == key)
    }
}

/// Reference to an action by position, used instead of object links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActionRef {
    pub year: i32,
    pub index: usize,
    pub region: Region,
    pub species: Species,
    pub action_type: ActionType,
}

impl ActionRef {
    pub fn new(year: i32, index: usize, action: &RoadmapAction) -> Self {
        Self {
            year,
            index,
            region: action.region,
            species: action.species,
            action_type: action.action_type,
        }
    }
}

/// An ordered, contiguous run of roadmap years.
///
/// Construction enforces strictly increasing, gap-free years, so detectors can
/// rely on "next entry = next calendar year".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RoadmapYear>", into = "Vec<RoadmapYear>")]
pub struct Roadmap {
    years: Vec<RoadmapYear>,
}

impl Roadmap {
    pub fn new(years: Vec<RoadmapYear>) -> Result<Self, ValidationError> {
        for pair in years.windows(2) {
            if pair[0].year.checked_add(1) != Some(pair[1].year) {
                return Err(ValidationError::NonContiguousYears {
                    previous: pair[0].year,
                    year: pair[1].year,
                });
            }
        }
        Ok(Self { years })
    }

    pub fn years(&self) -> &[RoadmapYear] {
        &self.years
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RoadmapYear> {
        self.years.iter()
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn first_year(&self) -> Option<i32> {
        self.years.first().map(|y| y.year)
    }

    pub fn last_year(&self) -> Option<i32> {
        self.years.last().map(|y| y.year)
    }

    pub fn year(&self, year: i32) -> Option<&RoadmapYear> {
        let first = self.first_year()?;
        let idx = usize::try_from(year - first).ok()?;
        self.years.get(idx)
    }

    /// Every action with its year and in-year index.
    pub fn actions(&self) -> impl Iterator<Item = (i32, usize, &RoadmapAction)> {
        self.years
            .iter()
            .flat_map(|y| y.actions.iter().enumerate().map(move |(i, a)| (y.year, i, a)))
    }

    pub fn first_hunt(&self) -> Option<(i32, &RoadmapAction)> {
        self.actions()
            .find(|(_, _, a)| a.is_hunt())
            .map(|(year, _, a)| (year, a))
    }

    pub fn has_hunt_for(&self, key: SpeciesKey) -> bool {
        self.actions().any(|(_, _, a)| a.is_hunt() && a.key() == key)
    }
}

impl TryFrom<Vec<RoadmapYear>> for Roadmap {
    type Error = ValidationError;

    fn try_from(years: Vec<RoadmapYear>) -> Result<Self, Self::Error> {
        Roadmap::new(years)
    }
}

impl From<Roadmap> for Vec<RoadmapYear> {
    fn from(roadmap: Roadmap) -> Self {
        roadmap.years
    }
}

impl<'a> IntoIterator for &'a Roadmap {
    type Item = &'a RoadmapYear;
    type IntoIter = std::slice::Iter<'a, RoadmapYear>;

    fn into_iter(self) -> Self::IntoIter {
        self.years.iter()
    }
}
