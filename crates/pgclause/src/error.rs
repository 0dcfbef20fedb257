//! Error types for pgclause.

use thiserror::Error;

/// Result type alias for pgclause operations.
pub type ClauseResult<T> = Result<T, ClauseError>;

/// Error type for the opt-in validation surface.
///
/// Clause assembly itself never fails; only
/// [`ensure_valid`](crate::check::ensure_valid) produces errors.
#[derive(Debug, Error)]
pub enum ClauseError {
    /// Condition-sequence validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ClauseError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
