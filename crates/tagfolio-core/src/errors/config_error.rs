/// Configuration parsing and consistency errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {reason}")]
    Parse { reason: String },

    #[error("health weights must sum to 1.0, got {sum}")]
    WeightSum { sum: f64 },

    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}
