//! Currency conversion arithmetic.
//!
//! CRITICAL: Rounding strategy for multi-currency:
//! - Always round to the currency's decimal places
//! - Use banker's rounding (round half to even)

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Converts an amount using the given exchange rate.
///
/// Uses banker's rounding (round half to even) to minimize cumulative errors.
#[must_use]
pub fn convert_amount(amount: Decimal, rate: Decimal, decimal_places: u32) -> Decimal {
    let converted = amount * rate;
    converted.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}

/// Rounds a value with banker's rounding.
#[must_use]
pub fn round(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}
