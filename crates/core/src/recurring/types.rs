//! Recurring schedule data types.

use abacus_shared::types::{Currency, ScheduleId};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ScheduleError;

/// Generation cadence for a recurring schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Every 7 days.
    Weekly,
    /// Every calendar month.
    Monthly,
    /// Every 3 calendar months.
    Quarterly,
    /// Every calendar year.
    Yearly,
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
            Self::Quarterly => write!(f, "quarterly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

impl std::str::FromStr for Frequency {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "yearly" => Ok(Self::Yearly),
            other => Err(ScheduleError::InvalidFrequency(other.to_string())),
        }
    }
}

/// A recurring generation schedule.
///
/// `next_date` and `total_generated` only move forward: each generation
/// event steps the date by exactly one period and increments the counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringSchedule {
    /// Schedule ID.
    pub id: ScheduleId,
    /// Schedule name (e.g., "Monthly retainer - Acme").
    pub name: String,
    /// Amount generated per occurrence.
    pub amount: Decimal,
    /// Currency of the amount. Defaults to USD when absent from source data.
    #[serde(default)]
    pub currency: Currency,
    /// First occurrence date.
    pub start_date: NaiveDate,
    /// Generation cadence.
    pub frequency: Frequency,
    /// Next occurrence date.
    pub next_date: NaiveDate,
    /// When the schedule last generated, if ever.
    pub last_generated: Option<DateTime<Utc>>,
    /// Monotonic count of generation events.
    pub total_generated: u32,
    /// Whether the schedule participates in batch processing. Does not
    /// block explicit single-schedule generation.
    pub is_active: bool,
}

/// How many periods a batch run advances each due schedule.
///
/// The default of 1 preserves the upstream behavior: a schedule that is
/// several periods overdue only catches up one period per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchPolicy {
    /// Periods stepped per due schedule per invocation.
    pub steps_per_run: u32,
}

impl Default for BatchPolicy {
    fn default() -> Self {
        Self { steps_per_run: 1 }
    }
}

/// Result of one batch processing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOutcome {
    /// Number of schedules advanced.
    pub processed: usize,
    /// Number of schedules that were due.
    pub total_due: usize,
    /// The advanced schedule records, in input order.
    pub advanced: Vec<RecurringSchedule>,
}

/// Aggregate statistics over a schedule snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleStatistics {
    /// All schedules.
    pub total_schedules: usize,
    /// Active schedules.
    pub active_schedules: usize,
    /// Inactive schedules.
    pub paused_schedules: usize,
    /// Sum of active schedule amounts, treated as monthly revenue.
    pub estimated_monthly_revenue: Decimal,
}
