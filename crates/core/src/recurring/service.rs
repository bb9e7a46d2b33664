//! Recurring schedule service: calendar stepping and batch processing.

use chrono::{DateTime, Days, Months, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::error::ScheduleError;
use super::types::{BatchOutcome, BatchPolicy, Frequency, RecurringSchedule, ScheduleStatistics};

/// Recurring schedule business logic.
pub struct RecurringService;

impl RecurringService {
    /// Returns the date exactly one period after `base`.
    ///
    /// Month-based frequencies use calendar arithmetic, not fixed day
    /// counts, and clamp to the last valid day of the target month:
    /// 31 Jan + 1 month is 28 Feb (29 in a leap year), and 29 Feb + 1 year
    /// is 28 Feb. Weekly always adds exactly 7 days.
    pub fn next_date(base: NaiveDate, frequency: Frequency) -> Result<NaiveDate, ScheduleError> {
        let stepped = match frequency {
            Frequency::Weekly => base.checked_add_days(Days::new(7)),
            Frequency::Monthly => base.checked_add_months(Months::new(1)),
            Frequency::Quarterly => base.checked_add_months(Months::new(3)),
            Frequency::Yearly => base.checked_add_months(Months::new(12)),
        };
        stepped.ok_or(ScheduleError::DateOutOfRange { base, frequency })
    }

    /// Records one generation event: steps `next_date` by one period,
    /// increments the counter, and stamps `last_generated`.
    ///
    /// Pure transform; persistence is the caller's responsibility. Not
    /// gated on `is_active` - explicit generation is always allowed.
    pub fn advance(
        schedule: &RecurringSchedule,
        now: DateTime<Utc>,
    ) -> Result<RecurringSchedule, ScheduleError> {
        let next_date = Self::next_date(schedule.next_date, schedule.frequency)?;
        Ok(RecurringSchedule {
            next_date,
            total_generated: schedule.total_generated + 1,
            last_generated: Some(now),
            ..schedule.clone()
        })
    }

    /// Active schedules whose next date is on or before `today`.
    #[must_use]
    pub fn due<'a>(
        schedules: &'a [RecurringSchedule],
        today: NaiveDate,
    ) -> Vec<&'a RecurringSchedule> {
        schedules
            .iter()
            .filter(|s| s.is_active && s.next_date <= today)
            .collect()
    }

    /// Active schedules due within the next `days` days (inclusive).
    #[must_use]
    pub fn upcoming<'a>(
        schedules: &'a [RecurringSchedule],
        today: NaiveDate,
        days: u64,
    ) -> Vec<&'a RecurringSchedule> {
        let Some(horizon) = today.checked_add_days(Days::new(days)) else {
            return Vec::new();
        };
        schedules
            .iter()
            .filter(|s| s.is_active && s.next_date <= horizon)
            .collect()
    }

    /// Processes every due schedule, stepping each one
    /// `policy.steps_per_run` periods.
    ///
    /// With the default policy a schedule that is several periods overdue
    /// advances by exactly one period per run - it does not silently catch
    /// up. Returns the advanced records; callers apply them back to their
    /// store.
    pub fn process_due(
        schedules: &[RecurringSchedule],
        today: NaiveDate,
        now: DateTime<Utc>,
        policy: &BatchPolicy,
    ) -> Result<BatchOutcome, ScheduleError> {
        let due = Self::due(schedules, today);
        let total_due = due.len();

        let mut advanced = Vec::with_capacity(total_due);
        for schedule in due {
            let mut current = schedule.clone();
            for _ in 0..policy.steps_per_run {
                current = Self::advance(&current, now)?;
            }
            advanced.push(current);
        }

        Ok(BatchOutcome {
            processed: advanced.len(),
            total_due,
            advanced,
        })
    }

    /// Counts and estimated monthly revenue over a snapshot.
    ///
    /// Revenue is the plain sum of active schedule amounts, as the upstream
    /// dashboard computes it - amounts are treated as monthly regardless of
    /// frequency.
    #[must_use]
    pub fn statistics(schedules: &[RecurringSchedule]) -> ScheduleStatistics {
        let total_schedules = schedules.len();
        let active_schedules = schedules.iter().filter(|s| s.is_active).count();
        let estimated_monthly_revenue: Decimal = schedules
            .iter()
            .filter(|s| s.is_active)
            .map(|s| s.amount)
            .sum();

        ScheduleStatistics {
            total_schedules,
            active_schedules,
            paused_schedules: total_schedules - active_schedules,
            estimated_monthly_revenue,
        }
    }
}
