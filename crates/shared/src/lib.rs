//! Shared types and errors for Abacus.
//!
//! This crate provides common types used across all other crates:
//! - Currency codes with their decimal precision
//! - Typed IDs for type-safe entity references
//! - Application-wide error types

pub mod error;
pub mod types;

pub use error::{AppError, AppResult};
