//! Invoice and aging data types.

use abacus_shared::types::{Currency, InvoiceId};
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Invoice lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Invoice created but not yet sent.
    Draft,
    /// Invoice sent to the customer.
    Sent,
    /// Invoice fully paid.
    Paid,
    /// Invoice past its due date.
    Overdue,
}

impl InvoiceStatus {
    /// Returns true if the invoice is settled and excluded from aging.
    #[must_use]
    pub fn is_paid(self) -> bool {
        self == Self::Paid
    }
}

/// A single billable line on an invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// What is being billed.
    pub description: String,
    /// Quantity billed.
    pub quantity: Decimal,
    /// Unit rate.
    pub rate: Decimal,
    /// Line amount (quantity * rate, as entered).
    pub amount: Decimal,
}

/// Subtotal, tax and total derived from invoice line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of line item amounts.
    pub subtotal: Decimal,
    /// Tax on the subtotal.
    pub tax_amount: Decimal,
    /// Subtotal plus tax.
    pub total: Decimal,
}

impl InvoiceTotals {
    /// Computes totals from line items and a fractional tax rate (0.1 = 10%).
    ///
    /// Amounts are rounded to 2 decimal places with Banker's rounding.
    #[must_use]
    pub fn compute(line_items: &[LineItem], tax_rate: Decimal) -> Self {
        let subtotal: Decimal = line_items.iter().map(|item| item.amount).sum();
        let tax_amount = (subtotal * tax_rate)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        Self {
            subtotal,
            tax_amount,
            total: subtotal + tax_amount,
        }
    }
}

/// An invoice record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice ID.
    pub id: InvoiceId,
    /// Human-readable invoice number (e.g., "INV-2024-001").
    pub number: String,
    /// Customer name.
    pub customer: String,
    /// Issue date.
    pub issue_date: NaiveDate,
    /// Payment due date.
    pub due_date: NaiveDate,
    /// Billable lines.
    pub line_items: Vec<LineItem>,
    /// Fractional tax rate applied to the subtotal.
    pub tax_rate: Decimal,
    /// Sum of line item amounts.
    pub subtotal: Decimal,
    /// Tax on the subtotal.
    pub tax_amount: Decimal,
    /// Total due.
    pub total: Decimal,
    /// Invoice currency. Defaults to USD when absent from source data.
    #[serde(default)]
    pub currency: Currency,
    /// Lifecycle status.
    pub status: InvoiceStatus,
}

/// An invoice annotated with aging information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceWithAging {
    /// The underlying invoice.
    #[serde(flatten)]
    pub invoice: Invoice,
    /// Days past due, clamped to zero for invoices not yet due.
    pub days_overdue: i64,
    /// True if the invoice is past its due date.
    pub is_overdue: bool,
}

/// Time-since-due classification band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgingBucket {
    /// Not yet due (including due today).
    #[serde(rename = "current")]
    Current,
    /// 1-30 days past due.
    #[serde(rename = "overdue1_30")]
    Days1To30,
    /// 31-60 days past due.
    #[serde(rename = "overdue31_60")]
    Days31To60,
    /// 61-90 days past due.
    #[serde(rename = "overdue61_90")]
    Days61To90,
    /// More than 90 days past due.
    #[serde(rename = "overdue90Plus")]
    Over90,
}

impl AgingBucket {
    /// All buckets in aging order.
    pub const ALL: [Self; 5] = [
        Self::Current,
        Self::Days1To30,
        Self::Days31To60,
        Self::Days61To90,
        Self::Over90,
    ];

    /// Assigns a bucket from days past due.
    ///
    /// Boundaries are inclusive and evaluated in order: an invoice due today
    /// (zero days overdue) is current, not overdue.
    #[must_use]
    pub fn for_days(days_overdue: i64) -> Self {
        match days_overdue {
            ..=0 => Self::Current,
            1..=30 => Self::Days1To30,
            31..=60 => Self::Days31To60,
            61..=90 => Self::Days61To90,
            _ => Self::Over90,
        }
    }
}

/// Amount and matching invoices for one aging bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgingBucketDetail {
    /// Sum of invoice totals in this bucket (native currency, no conversion).
    pub amount: Decimal,
    /// Invoices in this bucket, annotated with aging fields.
    pub invoices: Vec<InvoiceWithAging>,
}

/// Full aging report: every bucket with amounts and invoice detail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgingReport {
    /// Not yet due.
    #[serde(rename = "current")]
    pub current: AgingBucketDetail,
    /// 1-30 days past due.
    #[serde(rename = "overdue1_30")]
    pub overdue_1_30: AgingBucketDetail,
    /// 31-60 days past due.
    #[serde(rename = "overdue31_60")]
    pub overdue_31_60: AgingBucketDetail,
    /// 61-90 days past due.
    #[serde(rename = "overdue61_90")]
    pub overdue_61_90: AgingBucketDetail,
    /// More than 90 days past due.
    #[serde(rename = "overdue90Plus")]
    pub overdue_90_plus: AgingBucketDetail,
}

impl AgingReport {
    /// Returns the detail for one bucket.
    #[must_use]
    pub fn bucket(&self, bucket: AgingBucket) -> &AgingBucketDetail {
        match bucket {
            AgingBucket::Current => &self.current,
            AgingBucket::Days1To30 => &self.overdue_1_30,
            AgingBucket::Days31To60 => &self.overdue_31_60,
            AgingBucket::Days61To90 => &self.overdue_61_90,
            AgingBucket::Over90 => &self.overdue_90_plus,
        }
    }

    /// Mutable access for bucket accumulation.
    pub(crate) fn bucket_mut(&mut self, bucket: AgingBucket) -> &mut AgingBucketDetail {
        match bucket {
            AgingBucket::Current => &mut self.current,
            AgingBucket::Days1To30 => &mut self.overdue_1_30,
            AgingBucket::Days31To60 => &mut self.overdue_31_60,
            AgingBucket::Days61To90 => &mut self.overdue_61_90,
            AgingBucket::Over90 => &mut self.overdue_90_plus,
        }
    }

    /// Iterates buckets in aging order.
    pub fn iter(&self) -> impl Iterator<Item = (AgingBucket, &AgingBucketDetail)> {
        AgingBucket::ALL.into_iter().map(|b| (b, self.bucket(b)))
    }

    /// Sum of all bucket amounts (total outstanding receivables).
    #[must_use]
    pub fn total_outstanding(&self) -> Decimal {
        self.iter().map(|(_, detail)| detail.amount).sum()
    }

    /// Amount-only view of this report.
    #[must_use]
    pub fn totals(&self) -> AgingTotals {
        AgingTotals {
            current: self.current.amount,
            overdue_1_30: self.overdue_1_30.amount,
            overdue_31_60: self.overdue_31_60.amount,
            overdue_61_90: self.overdue_61_90.amount,
            overdue_90_plus: self.overdue_90_plus.amount,
        }
    }
}

/// Amount-only aging summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingTotals {
    /// Not yet due.
    #[serde(rename = "current")]
    pub current: Decimal,
    /// 1-30 days past due.
    #[serde(rename = "overdue1_30")]
    pub overdue_1_30: Decimal,
    /// 31-60 days past due.
    #[serde(rename = "overdue31_60")]
    pub overdue_31_60: Decimal,
    /// 61-90 days past due.
    #[serde(rename = "overdue61_90")]
    pub overdue_61_90: Decimal,
    /// More than 90 days past due.
    #[serde(rename = "overdue90Plus")]
    pub overdue_90_plus: Decimal,
}

impl AgingTotals {
    /// Sum over all buckets.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.current
            + self.overdue_1_30
            + self.overdue_31_60
            + self.overdue_61_90
            + self.overdue_90_plus
    }
}
