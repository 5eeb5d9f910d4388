//! Terse constructors for roadmap, ledger, and milestone values.

use chrono::NaiveDate;
use tagfolio_core::models::{
    ActionType, CostKind, CostLineItem, DrawOutcome, Mandate, Milestone, MilestoneType, Phase,
    PointType, PointsLedgerEntry, Roadmap, RoadmapAction, RoadmapYear, SeasonWindow, Weapon,
};
use tagfolio_core::{Region, Species};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

pub fn action(
    action_type: ActionType,
    region: Region,
    species: Species,
    cost: f64,
) -> RoadmapAction {
    RoadmapAction {
        action_type,
        region,
        species,
        cost,
        cost_line_items: vec![],
        unit_id: None,
        estimated_draw_odds: None,
        description: None,
        season: None,
    }
}

pub fn buy_points(region: Region, species: Species, cost: f64) -> RoadmapAction {
    action(ActionType::BuyPoints, region, species, cost)
}

pub fn apply(region: Region, species: Species, cost: f64) -> RoadmapAction {
    action(ActionType::Apply, region, species, cost)
}

pub fn hunt(region: Region, species: Species, cost: f64) -> RoadmapAction {
    action(ActionType::Hunt, region, species, cost)
}

pub fn with_description(mut action: RoadmapAction, description: &str) -> RoadmapAction {
    action.description = Some(description.to_string());
    action
}

pub fn with_odds(mut action: RoadmapAction, odds: f64) -> RoadmapAction {
    action.estimated_draw_odds = Some(odds);
    action
}

pub fn with_season(
    mut action: RoadmapAction,
    start: NaiveDate,
    end: NaiveDate,
    weapon: Weapon,
) -> RoadmapAction {
    action.season = Some(SeasonWindow { start, end, weapon });
    action
}

pub fn with_line_items(mut action: RoadmapAction, items: &[(&str, f64, CostKind)]) -> RoadmapAction {
    action.cost_line_items = items
        .iter()
        .map(|(label, amount, kind)| CostLineItem {
            label: label.to_string(),
            amount: *amount,
            kind: *kind,
        })
        .collect();
    action
}

/// A roadmap year whose estimated cost is the sum of its actions.
pub fn year(year: i32, actions: Vec<RoadmapAction>) -> RoadmapYear {
    let estimated_cost = actions.iter().map(|a| a.cost).sum();
    let is_hunt_year = actions.iter().any(|a| a.is_hunt());
    RoadmapYear {
        year,
        phase: if is_hunt_year { Phase::Burn } else { Phase::Build },
        actions,
        estimated_cost,
        is_hunt_year,
    }
}

pub fn roadmap(years: Vec<RoadmapYear>) -> Roadmap {
    Roadmap::new(years).expect("contiguous fixture roadmap")
}

/// `count` contiguous empty years starting at `start`.
pub fn empty_years(start: i32, count: i32) -> Vec<RoadmapYear> {
    (start..start + count).map(|y| year(y, vec![])).collect()
}

pub fn ledger_entry(region: Region, species: Species, points: u32) -> PointsLedgerEntry {
    PointsLedgerEntry {
        region,
        species,
        points,
        point_type: match region.default_allocation() {
            tagfolio_core::AllocationSystem::Preference => PointType::Preference,
            _ => PointType::Bonus,
        },
    }
}

pub fn milestone(
    id: &str,
    milestone_type: MilestoneType,
    year: i32,
    due_date: Option<NaiveDate>,
    total_cost: f64,
) -> Milestone {
    Milestone {
        id: id.to_string(),
        milestone_type,
        region: Region::Colorado,
        species: Species::Elk,
        year,
        due_date,
        total_cost,
        completed: false,
        draw_outcome: None,
    }
}

pub fn drawn(mut milestone: Milestone, outcome: DrawOutcome) -> Milestone {
    milestone.draw_outcome = Some(outcome);
    milestone
}

pub fn mandate(annual_budget_ceiling: f64, time_horizon_years: u32) -> Mandate {
    Mandate::new(annual_budget_ceiling, time_horizon_years)
}
