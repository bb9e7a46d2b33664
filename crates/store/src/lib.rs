//! In-memory repositories for Abacus.
//!
//! Each store owns a plain `Vec` of records, seeded from JSON fixtures, and
//! hands calculators immutable snapshots. Mutation goes through `&mut self`
//! methods; the execution model is single-threaded and cooperative, so
//! callers own any synchronization they need.
//!
//! The calculators in `abacus-core` never see a store directly - only the
//! owned snapshot a store hands out.

pub mod budgets;
pub mod error;
pub mod invoices;
pub mod schedules;

pub use budgets::{BudgetStore, NewBudgetLine};
pub use error::StoreError;
pub use invoices::{InvoiceStore, NewInvoice};
pub use schedules::{NewSchedule, ScheduleStore};
