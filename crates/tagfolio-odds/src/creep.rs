use tagfolio_core::config::defaults;
use tagfolio_core::constants::MAX_PROJECTION_YEARS;
use tagfolio_core::errors::ValidationError;
use tagfolio_core::models::DrawProjection;
use tagfolio_core::validation::in_range;

/// Annual requirement-inflation rate for a competitiveness signal in [0, 10].
///
/// Formula: `rate = base + perSignal × signal`, monotonically non-decreasing.
/// With defaults the range is 0.02 – 0.10.
pub fn estimate_creep_rate(signal: f64) -> Result<f64, ValidationError> {
    estimate_creep_rate_with(
        signal,
        defaults::DEFAULT_BASE_CREEP_RATE,
        defaults::DEFAULT_CREEP_PER_SIGNAL,
    )
}

pub fn estimate_creep_rate_with(
    signal: f64,
    base: f64,
    per_signal: f64,
) -> Result<f64, ValidationError> {
    let signal = in_range("competitiveness_signal", signal, 0.0, 10.0)?;
    Ok((base + per_signal * signal).max(0.0))
}

/// Years until `current_points` catches `required_points` inflating at
/// `creep_rate`, capped at [`MAX_PROJECTION_YEARS`].
///
/// A holder who can never catch up gets the cap back, never a loop.
pub fn years_to_draw(current_points: u32, required_points: u32, creep_rate: f64) -> u32 {
    project_draw(
        current_points,
        f64::from(required_points),
        creep_rate,
        MAX_PROJECTION_YEARS,
    )
    .years
}

/// Smallest `n` with `current + n ≥ required × (1 + rate)^n`, searching at
/// most `max_years` years.
///
/// One point accrues per year. Negative or non-finite rates are treated as 0.
pub fn project_draw(
    current_points: u32,
    required_points: f64,
    creep_rate: f64,
    max_years: u32,
) -> DrawProjection {
    let current = f64::from(current_points);
    if current >= required_points {
        return DrawProjection {
            years: 0,
            capped: false,
        };
    }

    let growth = 1.0 + sanitize_rate(creep_rate);
    let mut requirement = required_points;
    for n in 1..=max_years {
        requirement *= growth;
        if current + f64::from(n) >= requirement {
            return DrawProjection {
                years: n,
                capped: false,
            };
        }
    }

    DrawProjection {
        years: max_years,
        capped: true,
    }
}

/// Convert an additive creep velocity (points/year) into a multiplicative rate.
pub fn creep_rate_from_velocity(velocity: f64, required_points: f64) -> f64 {
    if required_points <= 0.0 || !velocity.is_finite() {
        return 0.0;
    }
    velocity.max(0.0) / required_points
}

pub(crate) fn sanitize_rate(rate: f64) -> f64 {
    if rate.is_finite() {
        rate.max(0.0)
    } else {
        0.0
    }
}
