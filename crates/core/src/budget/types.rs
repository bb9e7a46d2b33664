//! Budget data types.

use abacus_shared::types::BudgetLineId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A budget line: one category in one period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetLine {
    /// Budget line ID.
    pub id: BudgetLineId,
    /// Category key (e.g., "Marketing").
    pub category: String,
    /// Period key (e.g., "2024-Q1").
    pub period: String,
    /// Budgeted amount.
    pub budget_amount: Decimal,
    /// Actual amount to date.
    pub actual_amount: Decimal,
}

/// Direction of a variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarianceStatus {
    /// Actual at or above budget (variance >= 0).
    Favorable,
    /// Actual below budget (variance < 0).
    Unfavorable,
}

/// Coarse classification of variance magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarianceSeverity {
    /// |variance percent| above the high threshold.
    High,
    /// |variance percent| above the medium threshold.
    Medium,
    /// Within acceptable range.
    Low,
}

/// Severity thresholds on the absolute variance percentage.
///
/// Comparisons are strict: a variance of exactly the high threshold
/// classifies as medium, not high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarianceThresholds {
    /// Above this absolute percentage the variance is high.
    pub high: Decimal,
    /// Above this absolute percentage the variance is medium.
    pub medium: Decimal,
}

impl Default for VarianceThresholds {
    fn default() -> Self {
        Self {
            high: Decimal::from(15),
            medium: Decimal::from(5),
        }
    }
}

/// Full variance analysis for one budget line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VarianceAnalysis {
    /// Category key.
    pub category: String,
    /// Period key.
    pub period: String,
    /// Budgeted amount.
    pub budget_amount: Decimal,
    /// Actual amount.
    pub actual_amount: Decimal,
    /// actual - budget.
    pub variance: Decimal,
    /// Variance as a percentage of budget, 0 when budget is 0.
    pub variance_percent: Decimal,
    /// Favorable or unfavorable.
    pub status: VarianceStatus,
    /// Magnitude classification.
    pub severity: VarianceSeverity,
    /// Recommended actions for this (status, severity) combination.
    pub recommendations: Vec<String>,
}

/// Per-category variance within a period comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryVariance {
    /// Category key.
    pub category: String,
    /// Budgeted amount.
    pub budget_amount: Decimal,
    /// Actual amount.
    pub actual_amount: Decimal,
    /// actual - budget.
    pub variance: Decimal,
    /// Variance as a percentage of budget, 0 when budget is 0.
    pub variance_percent: Decimal,
    /// Favorable or unfavorable.
    pub status: VarianceStatus,
}

/// Budget vs actual rollup for one period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetComparison {
    /// Period key.
    pub period: String,
    /// Sum of budgeted amounts.
    pub total_budget: Decimal,
    /// Sum of actual amounts.
    pub total_actual: Decimal,
    /// Sum of variances.
    pub total_variance: Decimal,
    /// Total variance as a percentage of total budget, 0 when budget is 0.
    pub total_variance_percent: Decimal,
    /// Per-category breakdown.
    pub categories: Vec<CategoryVariance>,
}
