//! HealthScorer: runs every factor and composes the breakdown.

use tagfolio_core::config::HealthConfig;
use tagfolio_core::models::HealthScoreBreakdown;
use tracing::debug;

use crate::factors::{self, HealthInput};
use crate::formula::{self, SubScores};

#[derive(Debug, Clone, Default)]
pub struct HealthScorer {
    config: HealthConfig,
}

impl HealthScorer {
    pub fn new(config: HealthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HealthConfig {
        &self.config
    }

    /// Raw factor scores, before clamping and weighting.
    pub fn sub_scores(&self, input: &HealthInput<'_>) -> SubScores {
        let cfg = &self.config;

        let violations = input
            .conflicts
            .iter()
            .map(|c| c.severity)
            .chain(input.purges.iter().map(|p| p.severity))
            .chain(input.disasters.iter().map(|d| d.severity));

        SubScores {
            budget: factors::budget::calculate(input.roadmap, input.mandate, cfg.ceiling_penalty_cap),
            frequency: factors::frequency::calculate(
                input.roadmap,
                input.mandate,
                input.as_of_year,
                cfg.frequency_penalty_per_year,
            ),
            exposure: factors::exposure::calculate(input.roadmap, cfg.long_shot_odds),
            horizon: factors::horizon::calculate(input.roadmap, input.mandate, input.as_of_year, cfg),
            discipline: factors::discipline::calculate(violations, cfg),
        }
    }

    pub fn score(&self, input: &HealthInput<'_>) -> HealthScoreBreakdown {
        let breakdown = formula::compose(self.sub_scores(input), &self.config.weights);
        debug!(
            budget = breakdown.budget,
            frequency = breakdown.frequency,
            exposure = breakdown.exposure,
            horizon = breakdown.horizon,
            discipline = breakdown.discipline,
            composite = breakdown.composite,
            "portfolio health scored"
        );
        breakdown
    }
}
