//! Boundary checks run once before any component sees the inputs.
//!
//! Components assume validated inputs and never re-check shape.

use std::collections::BTreeSet;

use crate::errors::ValidationError;
use crate::models::{Mandate, Milestone, PointsLedgerEntry, Roadmap};

pub fn validate_roadmap(roadmap: &Roadmap) -> Result<(), ValidationError> {
    for year in roadmap {
        non_negative("estimated_cost", year.estimated_cost, &format!("year {}", year.year))?;
        for (i, action) in year.actions.iter().enumerate() {
            let ctx = format!("{} action #{} ({})", year.year, i, action.key());
            non_negative("cost", action.cost, &ctx)?;
            for item in &action.cost_line_items {
                non_negative("line item amount", item.amount, &ctx)?;
            }
            if let Some(odds) = action.estimated_draw_odds {
                probability("estimated_draw_odds", odds)?;
            }
            if let Some(season) = action.season {
                if season.end < season.start {
                    return Err(ValidationError::InvalidSeason { context: ctx });
                }
            }
        }
    }
    Ok(())
}

pub fn validate_ledger(ledger: &[PointsLedgerEntry]) -> Result<(), ValidationError> {
    let mut seen = BTreeSet::new();
    for entry in ledger {
        if !seen.insert(entry.key()) {
            return Err(ValidationError::DuplicateLedgerEntry {
                key: entry.key().to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_mandate(mandate: &Mandate) -> Result<(), ValidationError> {
    non_negative("annual_budget_ceiling", mandate.annual_budget_ceiling, "mandate")?;
    if let Some(b) = mandate.hunt_year_budget {
        non_negative("hunt_year_budget", b, "mandate")?;
    }
    if let Some(b) = mandate.point_year_budget {
        non_negative("point_year_budget", b, "mandate")?;
    }
    if mandate.youth_toggle && mandate.youth_age.is_none() {
        return Err(ValidationError::MissingField {
            field: "youth_age".to_string(),
            context: "mandate with youth_toggle set".to_string(),
        });
    }
    Ok(())
}

pub fn validate_milestones(milestones: &[Milestone]) -> Result<(), ValidationError> {
    for m in milestones {
        non_negative("total_cost", m.total_cost, &format!("milestone {}", m.id))?;
        if m.id.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "id".to_string(),
                context: format!("{} {} milestone in {}", m.region, m.species, m.year),
            });
        }
    }
    Ok(())
}

/// Competitiveness signals and probabilities share this range check.
pub fn in_range(field: &str, value: f64, min: f64, max: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        })
    }
}

fn probability(field: &str, value: f64) -> Result<f64, ValidationError> {
    in_range(field, value, 0.0, 1.0)
}

fn non_negative(field: &str, value: f64, context: &str) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::Negative {
            field: field.to_string(),
            value,
            context: context.to_string(),
        })
    }
}
