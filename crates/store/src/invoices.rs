//! Invoice repository.

use abacus_core::receivables::{
    AgingReport, Invoice, InvoiceStatus, InvoiceTotals, LineItem, ReceivablesService,
};
use abacus_shared::types::{Currency, InvoiceId};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::StoreError;

/// Input for creating an invoice. Totals are derived, not supplied.
#[derive(Debug, Clone)]
pub struct NewInvoice {
    /// Customer name.
    pub customer: String,
    /// Issue date.
    pub issue_date: NaiveDate,
    /// Payment due date.
    pub due_date: NaiveDate,
    /// Billable lines.
    pub line_items: Vec<LineItem>,
    /// Fractional tax rate.
    pub tax_rate: Decimal,
    /// Invoice currency.
    pub currency: Currency,
}

/// In-memory invoice repository.
#[derive(Debug, Default)]
pub struct InvoiceStore {
    invoices: Vec<Invoice>,
    next_seq: u32,
}

impl InvoiceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads invoices from a JSON fixture.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let invoices: Vec<Invoice> = serde_json::from_str(json)?;
        let next_seq = u32::try_from(invoices.len()).unwrap_or(u32::MAX);
        debug!(count = invoices.len(), "loaded invoice fixtures");
        Ok(Self { invoices, next_seq })
    }

    /// Immutable snapshot for calculators.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Invoice> {
        self.invoices.clone()
    }

    /// Looks up one invoice.
    #[must_use]
    pub fn get(&self, id: InvoiceId) -> Option<&Invoice> {
        self.invoices.iter().find(|inv| inv.id == id)
    }

    /// Creates a draft invoice, deriving totals and the invoice number.
    pub fn create(&mut self, input: NewInvoice) -> Invoice {
        self.next_seq += 1;
        let totals = InvoiceTotals::compute(&input.line_items, input.tax_rate);
        let number = format!("INV-{}-{:03}", input.issue_date.year(), self.next_seq);

        let invoice = Invoice {
            id: InvoiceId::new(),
            number,
            customer: input.customer,
            issue_date: input.issue_date,
            due_date: input.due_date,
            line_items: input.line_items,
            tax_rate: input.tax_rate,
            subtotal: totals.subtotal,
            tax_amount: totals.tax_amount,
            total: totals.total,
            currency: input.currency,
            status: InvoiceStatus::Draft,
        };

        debug!(invoice_id = %invoice.id, number = %invoice.number, "created invoice");
        self.invoices.push(invoice.clone());
        invoice
    }

    /// Marks an invoice as sent.
    pub fn send(&mut self, id: InvoiceId) -> Result<&Invoice, StoreError> {
        self.set_status(id, InvoiceStatus::Sent)
    }

    /// Marks an invoice as paid, removing it from future aging reports.
    pub fn mark_paid(&mut self, id: InvoiceId) -> Result<&Invoice, StoreError> {
        self.set_status(id, InvoiceStatus::Paid)
    }

    /// Removes an invoice.
    pub fn remove(&mut self, id: InvoiceId) -> Result<Invoice, StoreError> {
        let index = self
            .invoices
            .iter()
            .position(|inv| inv.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        debug!(invoice_id = %id, "removed invoice");
        Ok(self.invoices.remove(index))
    }

    /// Aging report over the current snapshot.
    #[must_use]
    pub fn aging_report(&self, today: NaiveDate) -> AgingReport {
        ReceivablesService::aging_report(&self.invoices, today)
    }

    fn set_status(&mut self, id: InvoiceId, status: InvoiceStatus) -> Result<&Invoice, StoreError> {
        let invoice = self
            .invoices
            .iter_mut()
            .find(|inv| inv.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        invoice.status = status;
        debug!(invoice_id = %id, ?status, "invoice status changed");
        Ok(invoice)
    }

    fn not_found(id: InvoiceId) -> StoreError {
        StoreError::NotFound {
            entity: "invoice",
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_invoice() -> NewInvoice {
        NewInvoice {
            customer: "Acme Corp".to_string(),
            issue_date: date(2024, 1, 1),
            due_date: date(2024, 1, 31),
            line_items: vec![LineItem {
                description: "Consulting".to_string(),
                quantity: dec!(10),
                rate: dec!(100),
                amount: dec!(1000),
            }],
            tax_rate: dec!(0.1),
            currency: Currency::Usd,
        }
    }

    #[test]
    fn test_create_derives_totals_and_number() {
        let mut store = InvoiceStore::new();
        let invoice = store.create(new_invoice());

        assert_eq!(invoice.number, "INV-2024-001");
        assert_eq!(invoice.subtotal, dec!(1000));
        assert_eq!(invoice.tax_amount, dec!(100.00));
        assert_eq!(invoice.total, dec!(1100.00));
        assert_eq!(invoice.status, InvoiceStatus::Draft);

        assert_eq!(store.create(new_invoice()).number, "INV-2024-002");
    }

    #[test]
    fn test_status_transitions() {
        let mut store = InvoiceStore::new();
        let id = store.create(new_invoice()).id;

        assert_eq!(store.send(id).unwrap().status, InvoiceStatus::Sent);
        assert_eq!(store.mark_paid(id).unwrap().status, InvoiceStatus::Paid);
    }

    #[test]
    fn test_paid_invoice_leaves_aging() {
        let mut store = InvoiceStore::new();
        let id = store.create(new_invoice()).id;
        store.send(id).unwrap();

        let today = date(2024, 3, 1);
        assert_eq!(store.aging_report(today).total_outstanding(), dec!(1100.00));

        store.mark_paid(id).unwrap();
        assert_eq!(store.aging_report(today).total_outstanding(), Decimal::ZERO);
    }

    #[test]
    fn test_missing_invoice_errors() {
        let mut store = InvoiceStore::new();
        let missing = InvoiceId::new();

        assert!(matches!(
            store.send(missing),
            Err(StoreError::NotFound { entity: "invoice", .. })
        ));
        assert!(store.remove(missing).is_err());
    }

    #[test]
    fn test_from_json_defaults_currency() {
        let json = r#"[{
            "id": "01890000-0000-7000-8000-000000000001",
            "number": "INV-2024-001",
            "customer": "Acme Corp",
            "issue_date": "2024-01-01",
            "due_date": "2024-01-31",
            "line_items": [],
            "tax_rate": "0",
            "subtotal": "500",
            "tax_amount": "0",
            "total": "500",
            "status": "sent"
        }]"#;

        let store = InvoiceStore::from_json(json).unwrap();
        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].currency, Currency::Usd);
    }
}
