//! Exchange rate table chained through a base currency.

use std::collections::BTreeMap;

use abacus_shared::types::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::conversion::{convert_amount, round};

/// Currency conversion errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurrencyError {
    /// No rate is quoted for this currency.
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(Currency),

    /// A quoted rate is zero or negative.
    #[error("Invalid rate for currency: {0}")]
    InvalidRate(Currency),
}

/// Result of a conversion between two currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    /// Source amount.
    pub amount: Decimal,
    /// Converted amount, rounded to the target currency's decimal places.
    pub converted_amount: Decimal,
    /// Effective rate (target per source), rounded to 6 decimal places.
    pub rate: Decimal,
    /// Source currency.
    pub from: Currency,
    /// Target currency.
    pub to: Currency,
}

/// A table of quotes against one base currency: 1 base = rate quote.
///
/// Conversions between two non-base currencies chain through the base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    /// Base currency the quotes are expressed against.
    base: Currency,
    /// Quoted rates per currency.
    rates: BTreeMap<Currency, Decimal>,
}

impl RateTable {
    /// Creates an empty table against the given base.
    #[must_use]
    pub fn new(base: Currency) -> Self {
        Self {
            base,
            rates: BTreeMap::new(),
        }
    }

    /// Adds or replaces a quote. Builder-style.
    #[must_use]
    pub fn with_rate(mut self, currency: Currency, rate: Decimal) -> Self {
        self.rates.insert(currency, rate);
        self
    }

    /// The base currency.
    #[must_use]
    pub const fn base(&self) -> Currency {
        self.base
    }

    /// Rate for one currency against the base. The base itself is 1.
    pub fn rate(&self, currency: Currency) -> Result<Decimal, CurrencyError> {
        if currency == self.base {
            return Ok(Decimal::ONE);
        }
        let rate = self
            .rates
            .get(&currency)
            .copied()
            .ok_or(CurrencyError::UnsupportedCurrency(currency))?;
        if rate <= Decimal::ZERO {
            return Err(CurrencyError::InvalidRate(currency));
        }
        Ok(rate)
    }

    /// Converts an amount between two quoted currencies, chaining through
    /// the base. The result is rounded to the target currency's decimal
    /// places. Same-currency conversions short-circuit with rate 1.
    pub fn convert(
        &self,
        amount: Decimal,
        from: Currency,
        to: Currency,
    ) -> Result<Conversion, CurrencyError> {
        if from == to {
            return Ok(Conversion {
                amount,
                converted_amount: round(amount, to.decimal_places()),
                rate: Decimal::ONE,
                from,
                to,
            });
        }

        let from_rate = self.rate(from)?;
        let to_rate = self.rate(to)?;

        let in_base = amount / from_rate;
        let effective_rate = to_rate / from_rate;

        Ok(Conversion {
            amount,
            converted_amount: convert_amount(in_base, to_rate, to.decimal_places()),
            rate: round(effective_rate, 6),
            from,
            to,
        })
    }

    /// All quotes re-expressed against another quoted currency.
    pub fn rebased(&self, new_base: Currency) -> Result<BTreeMap<Currency, Decimal>, CurrencyError> {
        let base_rate = self.rate(new_base)?;

        let mut rebased = BTreeMap::new();
        rebased.insert(self.base, round(Decimal::ONE / base_rate, 6));
        for (&currency, &rate) in &self.rates {
            let value = if currency == new_base {
                Decimal::ONE
            } else {
                round(rate / base_rate, 6)
            };
            rebased.insert(currency, value);
        }
        Ok(rebased)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn table() -> RateTable {
        RateTable::new(Currency::Usd)
            .with_rate(Currency::Eur, dec!(0.845))
            .with_rate(Currency::Gbp, dec!(0.735))
            .with_rate(Currency::Jpy, dec!(110.50))
    }

    #[test]
    fn test_convert_from_base() {
        let result = table().convert(dec!(100), Currency::Usd, Currency::Eur).unwrap();
        assert_eq!(result.converted_amount, dec!(84.50));
        assert_eq!(result.rate, dec!(0.845));
    }

    #[test]
    fn test_convert_to_base() {
        let result = table().convert(dec!(84.50), Currency::Eur, Currency::Usd).unwrap();
        assert_eq!(result.converted_amount, dec!(100.00));
    }

    #[test]
    fn test_convert_chains_through_base() {
        // 100 EUR -> USD -> GBP: 100 / 0.845 * 0.735 = 86.9822...
        let result = table().convert(dec!(100), Currency::Eur, Currency::Gbp).unwrap();
        assert_eq!(result.converted_amount, dec!(86.98));
        assert_eq!(result.rate, dec!(0.869822));
    }

    /// Yen amounts carry no fractional digits.
    #[test]
    fn test_convert_honors_target_decimal_places() {
        let result = table().convert(dec!(100), Currency::Usd, Currency::Jpy).unwrap();
        assert_eq!(result.converted_amount, dec!(11050));

        // 100 EUR -> USD -> JPY: 100 / 0.845 * 110.50 = 13076.92... -> 13077
        let result = table().convert(dec!(100), Currency::Eur, Currency::Jpy).unwrap();
        assert_eq!(result.converted_amount, dec!(13077));
        assert_eq!(result.converted_amount.scale(), 0);
    }

    #[test]
    fn test_same_currency_short_circuits() {
        let result = table().convert(dec!(42.424), Currency::Eur, Currency::Eur).unwrap();
        assert_eq!(result.rate, Decimal::ONE);
        assert_eq!(result.converted_amount, dec!(42.42));
    }

    #[test]
    fn test_unquoted_currency_rejected() {
        let err = table().convert(dec!(10), Currency::Usd, Currency::Cad).unwrap_err();
        assert_eq!(err, CurrencyError::UnsupportedCurrency(Currency::Cad));
    }

    #[test]
    fn test_zero_rate_rejected() {
        let table = RateTable::new(Currency::Usd).with_rate(Currency::Eur, Decimal::ZERO);
        let err = table.convert(dec!(10), Currency::Eur, Currency::Usd).unwrap_err();
        assert_eq!(err, CurrencyError::InvalidRate(Currency::Eur));
    }

    #[test]
    fn test_rebased_quotes() {
        let rebased = table().rebased(Currency::Eur).unwrap();
        assert_eq!(rebased[&Currency::Eur], Decimal::ONE);
        // 1 EUR = 1/0.845 USD
        assert_eq!(rebased[&Currency::Usd], dec!(1.183432));
        // GBP per EUR = 0.735 / 0.845
        assert_eq!(rebased[&Currency::Gbp], dec!(0.869822));
    }
}
