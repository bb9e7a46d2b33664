//! Core business logic for Abacus.
//!
//! This crate contains pure business logic with ZERO I/O dependencies.
//! Every function operates on an immutable snapshot supplied by the caller
//! and returns derived values; persistence belongs to `abacus-store`.
//!
//! # Modules
//!
//! - `receivables` - Invoice aging buckets and invoice totals
//! - `budget` - Budget vs actual variance analysis
//! - `recurring` - Recurring schedule calendar arithmetic
//! - `currency` - Exchange rate table and conversion
//! - `reconciliation` - Bank feed matching summaries

pub mod budget;
pub mod currency;
pub mod reconciliation;
pub mod receivables;
pub mod recurring;
