mod config_error;
mod validation_error;

pub use config_error::ConfigError;
pub use validation_error::ValidationError;

/// Top-level engine error.
///
/// The engine performs no I/O, so every variant describes a data-shape
/// problem caught at the boundary.
#[derive(Debug, thiserror::Error)]
pub enum TagfolioError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type TagfolioResult<T> = Result<T, TagfolioError>;
