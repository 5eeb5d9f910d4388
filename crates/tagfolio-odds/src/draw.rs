//! Draw probability per allocation system.
//!
//! - **Preference**: binary this year; the useful output is years-to-draw.
//! - **Bonus squared**: the holder owns `points²` entries against a pool of
//!   `applicants × required²`; odds rise smoothly, never guaranteed.
//! - **Random lottery**: flat odds; only the cumulative figure grows.

use serde::{Deserialize, Serialize};
use tagfolio_core::errors::ValidationError;
use tagfolio_core::models::DrawOdds;
use tagfolio_core::validation::in_range;
use tagfolio_core::AllocationSystem;
use tracing::debug;

use crate::creep::{project_draw, sanitize_rate};

/// Inputs for one odds estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawOddsQuery {
    pub system: AllocationSystem,
    pub current_points: u32,
    /// Preference: the cutoff. Bonus: the pool's typical holding. Lottery: ignored.
    pub required_points: f64,
    pub creep_rate: f64,
    pub tags: u32,
    pub applicants: u32,
    pub horizon_years: u32,
}

/// Compute odds for a query.
///
/// `max_years` caps every projection; `likely_odds` is the single-year
/// probability treated as "likely" for bonus systems.
pub fn calculate(
    query: &DrawOddsQuery,
    max_years: u32,
    likely_odds: f64,
) -> Result<DrawOdds, ValidationError> {
    in_range("required_points", query.required_points, 0.0, f64::MAX)?;
    in_range("creep_rate", query.creep_rate, 0.0, f64::MAX)?;

    let odds = match query.system {
        AllocationSystem::Preference => preference(query, max_years),
        AllocationSystem::BonusSquared => {
            check_pool(query)?;
            bonus_squared(query, max_years, likely_odds)
        }
        AllocationSystem::RandomLottery => {
            check_pool(query)?;
            random_lottery(query)
        }
    };

    debug!(
        system = %query.system,
        points = query.current_points,
        current_odds = odds.current_odds,
        years = ?odds.years_to_likely_draw,
        "draw odds computed"
    );
    Ok(odds)
}

fn check_pool(query: &DrawOddsQuery) -> Result<(), ValidationError> {
    if query.applicants == 0 || query.tags > query.applicants {
        return Err(ValidationError::InvalidPool {
            tags: query.tags,
            applicants: query.applicants,
        });
    }
    Ok(())
}

fn preference(query: &DrawOddsQuery, max_years: u32) -> DrawOdds {
    let eligible = f64::from(query.current_points) >= query.required_points;
    let projection = project_draw(
        query.current_points,
        query.required_points,
        query.creep_rate,
        max_years,
    );
    DrawOdds {
        current_odds: if eligible { 1.0 } else { 0.0 },
        years_to_likely_draw: projection.reachable(),
        cumulative_odds: None,
    }
}

/// Single-year bonus-squared probability.
///
/// Zero points means zero entries. A pool that holds no points at all leaves
/// any holder with points certain to draw.
pub fn bonus_squared_odds(points: f64, pool_points: f64, tags: u32, applicants: u32) -> f64 {
    let user_entries = points.max(0.0).powi(2);
    if applicants == 0 || tags == 0 || user_entries == 0.0 {
        return 0.0;
    }
    let pool_entries = f64::from(applicants) * pool_points.max(0.0).powi(2);
    if pool_entries <= 0.0 {
        return 1.0;
    }
    (f64::from(tags) * user_entries / pool_entries).clamp(0.0, 1.0)
}

fn bonus_squared(query: &DrawOddsQuery, max_years: u32, likely_odds: f64) -> DrawOdds {
    let growth = 1.0 + sanitize_rate(query.creep_rate);
    let odds_in = |k: u32| {
        let points = f64::from(query.current_points) + f64::from(k);
        let pool = query.required_points * growth.powi(k as i32);
        bonus_squared_odds(points, pool, query.tags, query.applicants)
    };

    let current_odds = odds_in(0);

    let mut miss = 1.0;
    for k in 0..query.horizon_years.min(max_years) {
        miss *= 1.0 - odds_in(k);
    }

    let years_to_likely_draw = (0..=max_years).find(|&k| odds_in(k) >= likely_odds);

    DrawOdds {
        current_odds,
        years_to_likely_draw,
        cumulative_odds: Some((1.0 - miss).clamp(0.0, 1.0)),
    }
}

fn random_lottery(query: &DrawOddsQuery) -> DrawOdds {
    let p = (f64::from(query.tags) / f64::from(query.applicants)).clamp(0.0, 1.0);
    DrawOdds {
        current_odds: p,
        years_to_likely_draw: None,
        cumulative_odds: Some(cumulative_lottery_odds(p, query.horizon_years)),
    }
}

/// Probability of at least one success in `years` independent attempts.
pub fn cumulative_lottery_odds(p: f64, years: u32) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(years.min(i32::MAX as u32) as i32)
}
