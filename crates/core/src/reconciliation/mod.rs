//! Bank feed reconciliation: match summaries and suggestions.

pub mod service;
pub mod types;

pub use service::ReconciliationService;
pub use types::{BankTransaction, LedgerEntry, MatchSuggestion, ReconciliationSummary};
