//! Exchange rate tables and currency conversion.

pub mod conversion;
pub mod exchange;

#[cfg(test)]
mod props;

pub use conversion::convert_amount;
pub use exchange::{Conversion, CurrencyError, RateTable};
