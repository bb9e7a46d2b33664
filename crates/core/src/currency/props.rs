//! Property-based tests for currency conversion.

use abacus_shared::types::Currency;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::{convert_amount, round};
use super::exchange::RateTable;

/// Strategy to generate positive decimal amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

fn non_base_currency() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::Eur),
        Just(Currency::Gbp),
        Just(Currency::Cad),
        Just(Currency::Aud),
        Just(Currency::Jpy),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Converted amounts carry at most the target currency's decimal places.
    #[test]
    fn prop_convert_rounds_to_currency_precision(
        amount in positive_amount(),
        rate in positive_rate(),
        currency in non_base_currency(),
    ) {
        let table = RateTable::new(Currency::Usd).with_rate(currency, rate);
        let result = table.convert(amount, Currency::Usd, currency).unwrap();

        let scaled = result.converted_amount
            * Decimal::from(10u64.pow(currency.decimal_places()));
        prop_assert_eq!(
            scaled,
            scaled.round(),
            "Result {} should fit {} decimal places",
            result.converted_amount,
            currency.decimal_places()
        );
    }

    /// Conversion is deterministic.
    #[test]
    fn prop_convert_is_deterministic(
        amount in positive_amount(),
        rate in positive_rate(),
        currency in non_base_currency(),
    ) {
        let table = RateTable::new(Currency::Usd).with_rate(currency, rate);
        let first = table.convert(amount, Currency::Usd, currency).unwrap();
        let second = table.convert(amount, Currency::Usd, currency).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Same-currency conversion preserves the amount (rounded to 2 dp).
    #[test]
    fn prop_same_currency_preserves_amount(amount in positive_amount()) {
        let table = RateTable::new(Currency::Usd);
        let result = table.convert(amount, Currency::Usd, Currency::Usd).unwrap();
        prop_assert_eq!(result.converted_amount, round(amount, 2));
        prop_assert_eq!(result.rate, Decimal::ONE);
    }

    /// Positive inputs always produce a non-negative converted amount.
    #[test]
    fn prop_positive_inputs_non_negative_output(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let result = convert_amount(amount, rate, 2);
        prop_assert!(result >= Decimal::ZERO);
    }

    /// convert_amount agrees with multiplying then banker's rounding.
    #[test]
    fn prop_convert_amount_is_rounded_product(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let result = convert_amount(amount, rate, 2);
        prop_assert_eq!(result, round(amount * rate, 2));
    }
}
