use tagfolio_core::config::ProjectionConfig;
use tagfolio_core::errors::ValidationError;
use tagfolio_core::models::{DrawOdds, DrawProjection};

use crate::creep;
use crate::draw::{self, DrawOddsQuery};

/// Config-bound entry point for projection and odds queries.
#[derive(Debug, Clone, Default)]
pub struct OddsEngine {
    config: ProjectionConfig,
}

impl OddsEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    pub fn estimate_creep_rate(&self, signal: f64) -> Result<f64, ValidationError> {
        creep::estimate_creep_rate_with(
            signal,
            self.config.base_creep_rate,
            self.config.creep_per_signal,
        )
    }

    pub fn project(&self, current_points: u32, required_points: f64, creep_rate: f64) -> DrawProjection {
        creep::project_draw(
            current_points,
            required_points,
            creep_rate,
            self.config.max_projection_years,
        )
    }

    pub fn odds(&self, query: &DrawOddsQuery) -> Result<DrawOdds, ValidationError> {
        draw::calculate(
            query,
            self.config.max_projection_years,
            self.config.likely_draw_odds,
        )
    }
}
