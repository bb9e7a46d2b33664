//! Bank reconciliation data types.

use abacus_shared::types::{AccountId, BankTransactionId, LedgerEntryId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A transaction from a bank feed, possibly matched to a ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankTransaction {
    /// Bank transaction ID.
    pub id: BankTransactionId,
    /// Bank account the transaction belongs to.
    pub bank_account_id: AccountId,
    /// Transaction date.
    pub date: NaiveDate,
    /// Bank statement description.
    pub description: String,
    /// Transaction amount.
    pub amount: Decimal,
    /// Ledger entry this transaction has been matched to, if any.
    #[serde(default)]
    pub matched_entry_id: Option<LedgerEntryId>,
    /// Flagged for review.
    #[serde(default)]
    pub flagged: bool,
    /// Assigned category, if any.
    #[serde(default)]
    pub category: Option<String>,
}

impl BankTransaction {
    /// Returns true if the transaction is matched to a ledger entry.
    #[must_use]
    pub const fn is_matched(&self) -> bool {
        self.matched_entry_id.is_some()
    }
}

/// A posted ledger entry a bank transaction can be matched against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Ledger entry ID.
    pub id: LedgerEntryId,
    /// Posting date.
    pub date: NaiveDate,
    /// Entry description.
    pub description: String,
    /// Entry amount.
    pub amount: Decimal,
}

/// Reconciliation progress over a bank feed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationSummary {
    /// All bank transactions.
    pub total: usize,
    /// Matched to a ledger entry.
    pub matched: usize,
    /// Not yet matched.
    pub unmatched: usize,
    /// Flagged for review.
    pub flagged: usize,
    /// matched / total as a percentage, 0 when the feed is empty.
    pub match_rate_percent: Decimal,
}

/// A candidate ledger entry for matching a bank transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSuggestion {
    /// Candidate ledger entry.
    pub entry_id: LedgerEntryId,
    /// Match confidence, 0-100.
    pub confidence: u8,
    /// Why this entry was suggested.
    pub reason: String,
}
