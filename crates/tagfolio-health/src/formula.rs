use tagfolio_core::config::HealthWeights;
use tagfolio_core::models::HealthScoreBreakdown;

/// Raw sub-scores before clamping and weighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub budget: f64,
    pub frequency: f64,
    pub exposure: f64,
    pub horizon: f64,
    pub discipline: f64,
}

fn clamp_score(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 100.0)
    }
}

/// Clamp each sub-score to [0, 100] and combine with `weights`.
///
/// The composite is clamped too, so weights that do not quite sum to 1.0
/// cannot push it out of range.
pub fn compose(scores: SubScores, weights: &HealthWeights) -> HealthScoreBreakdown {
    let budget = clamp_score(scores.budget);
    let frequency = clamp_score(scores.frequency);
    let exposure = clamp_score(scores.exposure);
    let horizon = clamp_score(scores.horizon);
    let discipline = clamp_score(scores.discipline);

    let composite = weights.budget * budget
        + weights.frequency * frequency
        + weights.exposure * exposure
        + weights.horizon * horizon
        + weights.discipline * discipline;

    HealthScoreBreakdown {
        budget,
        frequency,
        exposure,
        horizon,
        discipline,
        composite: clamp_score(composite),
    }
}
