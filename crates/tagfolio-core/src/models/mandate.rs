use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Default time off available for hunting when the mandate does not say.
pub const DEFAULT_PTO_DAYS: u32 = 14;

/// Budget and horizon constraints the user has set for the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Mandate {
    pub annual_budget_ceiling: f64,
    pub time_horizon_years: u32,
    #[serde(default)]
    pub youth_toggle: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youth_age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hunter_birth_year: Option<i32>,
    /// Budget for a year that includes at least one hunt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hunt_year_budget: Option<f64>,
    /// Budget for a points-only year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_year_budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pto_days_available: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_hunts_per_year: Option<u32>,
}

impl Mandate {
    pub fn new(annual_budget_ceiling: f64, time_horizon_years: u32) -> Self {
        Self {
            annual_budget_ceiling,
            time_horizon_years,
            youth_toggle: false,
            youth_age: None,
            hunter_birth_year: None,
            hunt_year_budget: None,
            point_year_budget: None,
            pto_days_available: None,
            max_hunts_per_year: None,
        }
    }

    pub fn hunt_year_budget(&self) -> f64 {
        self.hunt_year_budget.unwrap_or(self.annual_budget_ceiling)
    }

    pub fn point_year_budget(&self) -> f64 {
        self.point_year_budget.unwrap_or(self.annual_budget_ceiling)
    }

    pub fn pto_days(&self) -> u32 {
        self.pto_days_available.unwrap_or(DEFAULT_PTO_DAYS)
    }

    /// Hunter age in `year`, when it can be inferred.
    pub fn age_in(&self, year: i32, as_of_year: i32) -> Option<i32> {
        if self.youth_toggle {
            if let Some(age) = self.youth_age {
                return Some(age as i32 + (year - as_of_year));
            }
        }
        self.hunter_birth_year.map(|born| year - born)
    }
}
