//! Store error types.

use abacus_core::recurring::ScheduleError;
use abacus_shared::AppError;
use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Record not found.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind (e.g., "invoice").
        entity: &'static str,
        /// The requested ID.
        id: String,
    },

    /// Fixture data failed to parse.
    #[error("Fixture error: {0}")]
    Fixture(#[from] serde_json::Error),

    /// Recurring schedule arithmetic failed.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => Self::NotFound(err.to_string()),
            StoreError::Fixture(_) => Self::Validation(err.to_string()),
            StoreError::Schedule(_) => Self::BusinessRule(err.to_string()),
        }
    }
}
