use chrono::{DateTime, Utc};
use thiserror::Error;

pub type TieringResult<T> = Result<T, TieringError>;

#[derive(Error, Debug)]
pub enum TieringError {
    #[error(
        "Invalid input: reference date {reference_date} is before last purchase date {last_purchase_date}"
    )]
    InvalidInput {
        reference_date: DateTime<Utc>,
        last_purchase_date: DateTime<Utc>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("Unknown tier: {0}")]
    UnknownTier(String),
}
