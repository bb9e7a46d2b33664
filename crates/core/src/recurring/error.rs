//! Recurring schedule error types.

use chrono::NaiveDate;
use thiserror::Error;

use super::types::Frequency;

/// Errors from recurring schedule operations.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Frequency string is not one of the recognized values.
    #[error("Invalid frequency: {0}")]
    InvalidFrequency(String),

    /// Calendar arithmetic left the representable date range.
    #[error("Date out of range: cannot step {base} by one {frequency} period")]
    DateOutOfRange {
        /// The date being stepped.
        base: NaiveDate,
        /// The step frequency.
        frequency: Frequency,
    },
}
