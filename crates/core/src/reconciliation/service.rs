//! Reconciliation service: summaries and deterministic match suggestions.

use rust_decimal::Decimal;

use super::types::{BankTransaction, LedgerEntry, MatchSuggestion, ReconciliationSummary};

/// Reconciliation business logic.
pub struct ReconciliationService;

impl ReconciliationService {
    /// Counts matched/unmatched/flagged transactions and the match rate.
    ///
    /// An empty feed yields a zero match rate, not a division error.
    #[must_use]
    pub fn summary(transactions: &[BankTransaction]) -> ReconciliationSummary {
        let total = transactions.len();
        let matched = transactions.iter().filter(|t| t.is_matched()).count();
        let flagged = transactions.iter().filter(|t| t.flagged).count();

        let match_rate_percent = if total == 0 {
            Decimal::ZERO
        } else {
            (Decimal::from(matched) / Decimal::from(total) * Decimal::ONE_HUNDRED).round_dp(2)
        };

        ReconciliationSummary {
            total,
            matched,
            unmatched: total - matched,
            flagged,
            match_rate_percent,
        }
    }

    /// Transactions not yet matched to a ledger entry.
    #[must_use]
    pub fn unmatched<'a>(transactions: &'a [BankTransaction]) -> Vec<&'a BankTransaction> {
        transactions.iter().filter(|t| !t.is_matched()).collect()
    }

    /// Transactions flagged for review.
    #[must_use]
    pub fn flagged<'a>(transactions: &'a [BankTransaction]) -> Vec<&'a BankTransaction> {
        transactions.iter().filter(|t| t.flagged).collect()
    }

    /// Suggests ledger entries for a bank transaction.
    ///
    /// Candidates must match the amount exactly and fall within
    /// `window_days` of the transaction date. Confidence starts at 100 for
    /// a same-day match and loses 5 points per day of distance. Results are
    /// ordered by confidence, then entry ID, so the suggestion list is
    /// fully deterministic.
    #[must_use]
    pub fn suggest_matches(
        transaction: &BankTransaction,
        entries: &[LedgerEntry],
        window_days: i64,
    ) -> Vec<MatchSuggestion> {
        let mut suggestions: Vec<MatchSuggestion> = entries
            .iter()
            .filter(|entry| entry.amount == transaction.amount)
            .filter_map(|entry| {
                let distance = (entry.date - transaction.date).num_days().abs();
                if distance > window_days {
                    return None;
                }
                let penalty = distance.saturating_mul(5).min(95);
                let confidence = u8::try_from(100 - penalty).unwrap_or(5);
                let reason = if distance == 0 {
                    "Amount and date match".to_string()
                } else {
                    format!("Amount matches within {distance} days")
                };
                Some(MatchSuggestion {
                    entry_id: entry.id,
                    confidence,
                    reason,
                })
            })
            .collect();

        suggestions.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.entry_id.into_inner().cmp(&b.entry_id.into_inner()))
        });
        suggestions
    }
}
