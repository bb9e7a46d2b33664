//! Budget line repository.

use abacus_core::budget::{BudgetComparison, BudgetLine, BudgetService, VarianceAnalysis};
use abacus_shared::types::BudgetLineId;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::StoreError;

/// Input for creating a budget line.
#[derive(Debug, Clone)]
pub struct NewBudgetLine {
    /// Category key (e.g., "Marketing").
    pub category: String,
    /// Period key (e.g., "2024-Q1").
    pub period: String,
    /// Budgeted amount.
    pub budget_amount: Decimal,
    /// Actual amount to date.
    pub actual_amount: Decimal,
}

/// In-memory budget line repository.
#[derive(Debug, Default)]
pub struct BudgetStore {
    lines: Vec<BudgetLine>,
}

impl BudgetStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads budget lines from a JSON fixture.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let lines: Vec<BudgetLine> = serde_json::from_str(json)?;
        debug!(count = lines.len(), "loaded budget fixtures");
        Ok(Self { lines })
    }

    /// Immutable snapshot for calculators.
    #[must_use]
    pub fn snapshot(&self) -> Vec<BudgetLine> {
        self.lines.clone()
    }

    /// Looks up one budget line.
    #[must_use]
    pub fn get(&self, id: BudgetLineId) -> Option<&BudgetLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// Creates a budget line.
    pub fn create(&mut self, input: NewBudgetLine) -> BudgetLine {
        let line = BudgetLine {
            id: BudgetLineId::new(),
            category: input.category,
            period: input.period,
            budget_amount: input.budget_amount,
            actual_amount: input.actual_amount,
        };
        debug!(budget_line_id = %line.id, category = %line.category, "created budget line");
        self.lines.push(line.clone());
        line
    }

    /// Records the actual amount to date for one line.
    pub fn record_actual(
        &mut self,
        id: BudgetLineId,
        actual_amount: Decimal,
    ) -> Result<&BudgetLine, StoreError> {
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        line.actual_amount = actual_amount;
        debug!(budget_line_id = %id, %actual_amount, "recorded actual amount");
        Ok(line)
    }

    /// Removes a budget line.
    pub fn remove(&mut self, id: BudgetLineId) -> Result<BudgetLine, StoreError> {
        let index = self
            .lines
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        debug!(budget_line_id = %id, "removed budget line");
        Ok(self.lines.remove(index))
    }

    /// Variance analysis for one line with the default thresholds.
    pub fn analysis(&self, id: BudgetLineId) -> Result<VarianceAnalysis, StoreError> {
        self.get(id)
            .map(BudgetService::analyze)
            .ok_or_else(|| Self::not_found(id))
    }

    /// Budget vs actual rollup for one period.
    #[must_use]
    pub fn comparison(&self, period: &str) -> BudgetComparison {
        BudgetService::compare(&self.lines, period)
    }

    fn not_found(id: BudgetLineId) -> StoreError {
        StoreError::NotFound {
            entity: "budget line",
            id: id.to_string(),
        }
    }
}
