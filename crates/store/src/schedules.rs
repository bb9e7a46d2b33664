//! Recurring schedule repository.

use abacus_core::recurring::{
    BatchOutcome, BatchPolicy, Frequency, RecurringSchedule, RecurringService, ScheduleStatistics,
};
use abacus_shared::types::{Currency, ScheduleId};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::StoreError;

/// Input for creating a recurring schedule.
#[derive(Debug, Clone)]
pub struct NewSchedule {
    /// Schedule name.
    pub name: String,
    /// Amount generated per occurrence.
    pub amount: Decimal,
    /// Currency of the amount.
    pub currency: Currency,
    /// First occurrence date.
    pub start_date: NaiveDate,
    /// Generation cadence.
    pub frequency: Frequency,
}

/// In-memory recurring schedule repository.
#[derive(Debug, Default)]
pub struct ScheduleStore {
    schedules: Vec<RecurringSchedule>,
}

impl ScheduleStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads schedules from a JSON fixture.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let schedules: Vec<RecurringSchedule> = serde_json::from_str(json)?;
        debug!(count = schedules.len(), "loaded schedule fixtures");
        Ok(Self { schedules })
    }

    /// Immutable snapshot for calculators.
    #[must_use]
    pub fn snapshot(&self) -> Vec<RecurringSchedule> {
        self.schedules.clone()
    }

    /// Looks up one schedule.
    #[must_use]
    pub fn get(&self, id: ScheduleId) -> Option<&RecurringSchedule> {
        self.schedules.iter().find(|s| s.id == id)
    }

    /// Creates an active schedule with its first next-date one period after
    /// the start date.
    pub fn create(&mut self, input: NewSchedule) -> Result<RecurringSchedule, StoreError> {
        let next_date = RecurringService::next_date(input.start_date, input.frequency)?;
        let schedule = RecurringSchedule {
            id: ScheduleId::new(),
            name: input.name,
            amount: input.amount,
            currency: input.currency,
            start_date: input.start_date,
            frequency: input.frequency,
            next_date,
            last_generated: None,
            total_generated: 0,
            is_active: true,
        };

        debug!(schedule_id = %schedule.id, %next_date, "created schedule");
        self.schedules.push(schedule.clone());
        Ok(schedule)
    }

    /// Pauses or resumes batch participation.
    pub fn set_active(&mut self, id: ScheduleId, is_active: bool) -> Result<(), StoreError> {
        let schedule = self.get_mut(id)?;
        schedule.is_active = is_active;
        debug!(schedule_id = %id, is_active, "schedule activity changed");
        Ok(())
    }

    /// Removes a schedule.
    pub fn remove(&mut self, id: ScheduleId) -> Result<RecurringSchedule, StoreError> {
        let index = self
            .schedules
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        debug!(schedule_id = %id, "removed schedule");
        Ok(self.schedules.remove(index))
    }

    /// Explicitly generates from one schedule, active or not.
    pub fn generate_now(
        &mut self,
        id: ScheduleId,
        now: DateTime<Utc>,
    ) -> Result<RecurringSchedule, StoreError> {
        let schedule = self.get_mut(id)?;
        let advanced = RecurringService::advance(schedule, now)?;
        *schedule = advanced.clone();
        debug!(
            schedule_id = %id,
            next_date = %advanced.next_date,
            total_generated = advanced.total_generated,
            "schedule generated"
        );
        Ok(advanced)
    }

    /// Processes every due schedule per `policy`, applying the advanced
    /// records back into the store.
    pub fn process_due(
        &mut self,
        today: NaiveDate,
        now: DateTime<Utc>,
        policy: &BatchPolicy,
    ) -> Result<BatchOutcome, StoreError> {
        let outcome = RecurringService::process_due(&self.schedules, today, now, policy)?;

        for advanced in &outcome.advanced {
            if let Some(existing) = self.schedules.iter_mut().find(|s| s.id == advanced.id) {
                *existing = advanced.clone();
            }
        }

        debug!(
            processed = outcome.processed,
            total_due = outcome.total_due,
            "processed due schedules"
        );
        Ok(outcome)
    }

    /// Aggregate statistics over the current snapshot.
    #[must_use]
    pub fn statistics(&self) -> ScheduleStatistics {
        RecurringService::statistics(&self.schedules)
    }

    fn get_mut(&mut self, id: ScheduleId) -> Result<&mut RecurringSchedule, StoreError> {
        self.schedules
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| Self::not_found(id))
    }

    fn not_found(id: ScheduleId) -> StoreError {
        StoreError::NotFound {
            entity: "schedule",
            id: id.to_string(),
        }
    }
}
