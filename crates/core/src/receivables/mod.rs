//! Accounts receivable: invoice aging and totals.

pub mod service;
pub mod types;


pub use service::ReceivablesService;
pub use types::{
    AgingBucket, AgingBucketDetail, AgingReport, AgingTotals, Invoice, InvoiceStatus,
    InvoiceTotals, InvoiceWithAging, LineItem,
};
