//! Budget tracking and variance analysis.

pub mod service;
pub mod types;


pub use service::BudgetService;
pub use types::{
    BudgetComparison, BudgetLine, CategoryVariance, VarianceAnalysis, VarianceSeverity,
    VarianceStatus, VarianceThresholds,
};
