//! Budget service for variance calculation and classification.

use rust_decimal::Decimal;

use super::types::{
    BudgetComparison, BudgetLine, CategoryVariance, VarianceAnalysis, VarianceSeverity,
    VarianceStatus, VarianceThresholds,
};

/// Budget business logic.
pub struct BudgetService;

impl BudgetService {
    /// Analyzes one budget line with the default thresholds (15% / 5%).
    #[must_use]
    pub fn analyze(line: &BudgetLine) -> VarianceAnalysis {
        Self::analyze_with(line, &VarianceThresholds::default())
    }

    /// Analyzes one budget line.
    ///
    /// variance = actual - budget. Favorable when variance >= 0. A zero
    /// budget yields a variance percent of 0 by policy; it is not an error.
    /// Severity is classified on the rounded percent that is reported, so
    /// the two never disagree at a threshold boundary. This is a pure
    /// classification: identical inputs always produce identical outputs.
    #[must_use]
    pub fn analyze_with(line: &BudgetLine, thresholds: &VarianceThresholds) -> VarianceAnalysis {
        let variance = line.actual_amount - line.budget_amount;
        let variance_percent =
            Self::variance_percent(variance, line.budget_amount).round_dp(2);
        let status = Self::status(variance);
        let severity = Self::severity(variance_percent, thresholds);

        VarianceAnalysis {
            category: line.category.clone(),
            period: line.period.clone(),
            budget_amount: line.budget_amount,
            actual_amount: line.actual_amount,
            variance,
            variance_percent,
            status,
            severity,
            recommendations: Self::recommendations(status, severity),
        }
    }

    /// Rolls up all lines for one period into totals plus per-category
    /// variances. Lines from other periods are ignored.
    #[must_use]
    pub fn compare(lines: &[BudgetLine], period: &str) -> BudgetComparison {
        let mut total_budget = Decimal::ZERO;
        let mut total_actual = Decimal::ZERO;
        let mut categories = Vec::new();

        for line in lines.iter().filter(|l| l.period == period) {
            total_budget += line.budget_amount;
            total_actual += line.actual_amount;

            let variance = line.actual_amount - line.budget_amount;
            let variance_percent = Self::variance_percent(variance, line.budget_amount);
            categories.push(CategoryVariance {
                category: line.category.clone(),
                budget_amount: line.budget_amount,
                actual_amount: line.actual_amount,
                variance,
                variance_percent: variance_percent.round_dp(2),
                status: Self::status(variance),
            });
        }

        let total_variance = total_actual - total_budget;
        BudgetComparison {
            period: period.to_string(),
            total_budget,
            total_actual,
            total_variance,
            total_variance_percent: Self::variance_percent(total_variance, total_budget)
                .round_dp(2),
            categories,
        }
    }

    fn variance_percent(variance: Decimal, budget: Decimal) -> Decimal {
        if budget.is_zero() {
            Decimal::ZERO
        } else {
            variance / budget * Decimal::ONE_HUNDRED
        }
    }

    fn status(variance: Decimal) -> VarianceStatus {
        if variance.is_sign_negative() && !variance.is_zero() {
            VarianceStatus::Unfavorable
        } else {
            VarianceStatus::Favorable
        }
    }

    fn severity(variance_percent: Decimal, thresholds: &VarianceThresholds) -> VarianceSeverity {
        let magnitude = variance_percent.abs();
        if magnitude > thresholds.high {
            VarianceSeverity::High
        } else if magnitude > thresholds.medium {
            VarianceSeverity::Medium
        } else {
            VarianceSeverity::Low
        }
    }

    /// Fixed recommendation lookup on (status, severity).
    fn recommendations(status: VarianceStatus, severity: VarianceSeverity) -> Vec<String> {
        let texts: &[&str] = match (status, severity) {
            (VarianceStatus::Unfavorable, VarianceSeverity::High) => &[
                "Investigate significant overspending or revenue shortfall",
                "Review budget assumptions and market conditions",
            ],
            (VarianceStatus::Favorable, VarianceSeverity::High) => &[
                "Analyze factors contributing to outperformance",
                "Consider adjusting future budget targets",
            ],
            (_, VarianceSeverity::Medium) => &["Monitor trend closely in upcoming periods"],
            (_, VarianceSeverity::Low) => &["Performance is within acceptable variance range"],
        };
        texts.iter().map(|s| (*s).to_string()).collect()
    }
}
