//! Receivables service for aging classification.

use chrono::NaiveDate;

use super::types::{AgingBucket, AgingReport, AgingTotals, Invoice, InvoiceWithAging};

/// Receivables business logic.
pub struct ReceivablesService;

impl ReceivablesService {
    /// Days the invoice is past due as of `today`. Negative before the due
    /// date, zero on the due date itself.
    #[must_use]
    pub fn days_overdue(due_date: NaiveDate, today: NaiveDate) -> i64 {
        (today - due_date).num_days()
    }

    /// Builds the full aging report from an invoice snapshot.
    ///
    /// Paid invoices are excluded entirely, regardless of due date. Amounts
    /// are summed in each invoice's native currency with no conversion. An
    /// empty snapshot yields an all-zero report.
    #[must_use]
    pub fn aging_report(invoices: &[Invoice], today: NaiveDate) -> AgingReport {
        let mut report = AgingReport::default();

        for invoice in invoices.iter().filter(|inv| !inv.status.is_paid()) {
            let days_overdue = Self::days_overdue(invoice.due_date, today);
            let bucket = AgingBucket::for_days(days_overdue);

            let detail = report.bucket_mut(bucket);
            detail.amount += invoice.total;
            detail.invoices.push(InvoiceWithAging {
                invoice: invoice.clone(),
                days_overdue: days_overdue.max(0),
                is_overdue: days_overdue > 0,
            });
        }

        report
    }

    /// Amount-only aging summary.
    #[must_use]
    pub fn aging_totals(invoices: &[Invoice], today: NaiveDate) -> AgingTotals {
        Self::aging_report(invoices, today).totals()
    }

    /// Non-paid invoices whose due date is strictly before `today`.
    #[must_use]
    pub fn overdue<'a>(invoices: &'a [Invoice], today: NaiveDate) -> Vec<&'a Invoice> {
        invoices
            .iter()
            .filter(|inv| !inv.status.is_paid() && inv.due_date < today)
            .collect()
    }
}
