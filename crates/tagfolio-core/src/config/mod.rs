mod advisor_config;
mod conflict_config;
pub mod defaults;
mod fiduciary_config;
mod health_config;
mod projection_config;
mod purge_config;

pub use advisor_config::AdvisorConfig;
pub use conflict_config::ConflictConfig;
pub use fiduciary_config::FiduciaryConfig;
pub use health_config::{HealthConfig, HealthWeights};
pub use projection_config::ProjectionConfig;
pub use purge_config::PurgeConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, TagfolioResult};

/// Top-level engine configuration. Every section falls back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub projection: ProjectionConfig,
    pub conflicts: ConflictConfig,
    pub fiduciary: FiduciaryConfig,
    pub health: HealthConfig,
    pub advisor: AdvisorConfig,
    pub purge: PurgeConfig,
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> TagfolioResult<Self> {
        let config: EngineConfig = toml::from_str(s).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let sum = self.health.weights.sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(ConfigError::WeightSum { sum });
        }
        if self.projection.max_projection_years == 0 {
            return Err(invalid("projection.max_projection_years", "must be at least 1"));
        }
        if self.projection.base_creep_rate < 0.0 || self.projection.creep_per_signal < 0.0 {
            return Err(invalid("projection", "creep rates must be non-negative"));
        }
        if !(0.0..=1.0).contains(&self.projection.likely_draw_odds) {
            return Err(invalid("projection.likely_draw_odds", "must be in [0, 1]"));
        }
        if self.conflicts.budget_critical_ratio < self.conflicts.budget_warning_ratio {
            return Err(invalid(
                "conflicts.budget_critical_ratio",
                "must not be below budget_warning_ratio",
            ));
        }
        if self.conflicts.abandon_warning_points < self.conflicts.abandon_info_points {
            return Err(invalid(
                "conflicts.abandon_warning_points",
                "must not be below abandon_info_points",
            ));
        }
        if self.health.ideal_age.0 > self.health.ideal_age.1
            || self.health.demanding_age.0 > self.health.demanding_age.1
        {
            return Err(invalid("health", "age window min must not exceed max"));
        }
        if let Some(rule) = self.purge.overrides.iter().find(|r| r.max_inactive_years == 0) {
            return Err(invalid(
                "purge.overrides",
                &format!("{} max_inactive_years must be at least 1", rule.region),
            ));
        }
        Ok(())
    }
}

fn invalid(key: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
