//! Recurring schedules: calendar stepping and batch generation.

pub mod error;
pub mod service;
pub mod types;


pub use error::ScheduleError;
pub use service::RecurringService;
pub use types::{BatchOutcome, BatchPolicy, Frequency, RecurringSchedule, ScheduleStatistics};
