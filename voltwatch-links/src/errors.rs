//! Link layer errors

use thiserror::Error;
use voltwatch_core::PeriodError;

/// Result type for the link layer
pub type LinkResult<T> = Result<T, LinkError>;

/// Link layer errors
#[derive(Debug, Error)]
pub enum LinkError {
    /// Configuration could not be read or parsed
    #[error("Failed to load link configuration: {0}")]
    Config(String),

    /// Period construction failed (caller bug, see [`PeriodError`])
    #[error(transparent)]
    Period(#[from] PeriodError),
}

impl From<std::io::Error> for LinkError {
    fn from(err: std::io::Error) -> Self {
        LinkError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for LinkError {
    fn from(err: serde_json::Error) -> Self {
        LinkError::Config(err.to_string())
    }
}
