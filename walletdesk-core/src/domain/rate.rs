//! Static conversion rates from the base unit

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::amount::Amount;
use super::result::{Error, Result};
use super::unit::Unit;

/// PKR per US dollar used by the default table
pub const PKR_PER_USD: u32 = 300;

/// PKR per euro used by the default table
pub const PKR_PER_EUR: u32 = 325;

/// Multipliers converting a base-unit amount into each display unit
///
/// Tables built with [`RateTable::new`] always cover every [`Unit`], map
/// the base unit to exactly 1 and hold only positive multipliers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateTable {
    rates: BTreeMap<Unit, Decimal>,
}

impl RateTable {
    /// Build a validated rate table
    pub fn new(rates: impl IntoIterator<Item = (Unit, Decimal)>) -> Result<Self> {
        let rates: BTreeMap<Unit, Decimal> = rates.into_iter().collect();

        for unit in Unit::ALL {
            match rates.get(&unit) {
                None => {
                    return Err(Error::config(format!("rate table has no entry for {}", unit)));
                }
                Some(rate) if unit.is_base() && *rate != Decimal::ONE => {
                    return Err(Error::config(format!(
                        "base unit {} must have rate 1, got {}",
                        unit, rate
                    )));
                }
                Some(rate) if *rate <= Decimal::ZERO => {
                    return Err(Error::config(format!(
                        "rate for {} must be positive, got {}",
                        unit, rate
                    )));
                }
                Some(_) => {}
            }
        }

        Ok(Self { rates })
    }

    /// Build a table without coverage checks
    ///
    /// Only useful for exercising the lookup failure path.
    pub fn from_entries_unchecked(rates: impl IntoIterator<Item = (Unit, Decimal)>) -> Self {
        Self {
            rates: rates.into_iter().collect(),
        }
    }

    /// Build a table from "base units per one display unit" quotes
    ///
    /// A quote of 300 for USD means 1 USD = 300 PKR, giving a multiplier of 1/300.
    pub fn from_quotes(quotes: impl IntoIterator<Item = (Unit, Decimal)>) -> Result<Self> {
        let mut rates = BTreeMap::new();
        rates.insert(Unit::BASE, Decimal::ONE);
        for (unit, quote) in quotes {
            if quote <= Decimal::ZERO {
                return Err(Error::config(format!(
                    "quote for {} must be positive, got {}",
                    unit, quote
                )));
            }
            let rate = Decimal::ONE
                .checked_div(quote)
                .ok_or_else(|| Error::config(format!("quote for {} is out of range: {}", unit, quote)))?;
            rates.insert(unit, rate);
        }
        Self::new(rates)
    }

    /// Multiplier for a unit
    pub fn rate(&self, unit: Unit) -> Result<Decimal> {
        self.rates
            .get(&unit)
            .copied()
            .ok_or_else(|| Error::lookup(format!("no conversion rate for {}", unit)))
    }

    /// Base units per one display unit (inverse of the multiplier)
    pub fn quote(&self, unit: Unit) -> Result<Decimal> {
        let rate = self.rate(unit)?;
        Decimal::ONE
            .checked_div(rate)
            .ok_or_else(|| Error::lookup(format!("no usable rate for {}: {}", unit, rate)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Unit, Decimal)> + '_ {
        self.rates.iter().map(|(u, r)| (*u, *r))
    }
}

impl Default for RateTable {
    fn default() -> Self {
        let mut rates = BTreeMap::new();
        rates.insert(Unit::Pkr, Decimal::ONE);
        rates.insert(Unit::Usd, Decimal::ONE / Decimal::from(PKR_PER_USD));
        rates.insert(Unit::Eur, Decimal::ONE / Decimal::from(PKR_PER_EUR));
        Self { rates }
    }
}

/// Convert a base-unit amount into `unit`
///
/// The base unit always converts to the identical amount. Fails with a
/// lookup error only when `rates` was built unchecked and lacks `unit`.
pub fn convert(amount: Amount, unit: Unit, rates: &RateTable) -> Result<Amount> {
    let rate = rates.rate(unit)?;
    if unit.is_base() {
        return Ok(amount);
    }
    let converted = amount
        .value()
        .checked_mul(rate)
        .ok_or_else(|| {
            Error::validation(format!("{} {} overflows when converted to {}", amount, Unit::BASE, unit))
        })?;
    Amount::new(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::ToPrimitive;

    #[test]
    fn test_default_table_is_valid() {
        let table = RateTable::default();
        let rebuilt = RateTable::new(table.iter()).unwrap();
        assert_eq!(rebuilt, table);
        assert_eq!(table.rate(Unit::Pkr).unwrap(), Decimal::ONE);
    }

    #[test]
    fn test_new_requires_every_unit() {
        let result = RateTable::new([(Unit::Pkr, Decimal::ONE), (Unit::Usd, Decimal::new(3, 3))]);
        assert!(matches!(result, Err(Error::Config(msg)) if msg.contains("EUR")));
    }

    #[test]
    fn test_new_requires_base_rate_of_one() {
        let result = RateTable::new([
            (Unit::Pkr, Decimal::new(2, 0)),
            (Unit::Usd, Decimal::new(3, 3)),
            (Unit::Eur, Decimal::new(3, 3)),
        ]);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_new_rejects_non_positive_rates() {
        let result = RateTable::new([
            (Unit::Pkr, Decimal::ONE),
            (Unit::Usd, Decimal::ZERO),
            (Unit::Eur, Decimal::new(3, 3)),
        ]);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_quotes() {
        let table = RateTable::from_quotes([
            (Unit::Usd, Decimal::from(300)),
            (Unit::Eur, Decimal::from(325)),
        ])
        .unwrap();
        assert_eq!(table, RateTable::default());
        assert_eq!(table.quote(Unit::Usd).unwrap().round_dp(6), Decimal::from(300));
    }

    #[test]
    fn test_convert_base_is_identity() {
        let rates = RateTable::default();
        let amount = Amount::new(Decimal::new(5200012, 2)).unwrap();
        assert_eq!(convert(amount, Unit::Pkr, &rates).unwrap(), amount);
    }

    #[test]
    fn test_convert_sample_balance() {
        let rates = RateTable::default();
        let usd = convert(Amount::from(52000), Unit::Usd, &rates).unwrap();
        let eur = convert(Amount::from(52000), Unit::Eur, &rates).unwrap();

        assert_eq!(usd.value().round_dp(2), Decimal::new(17333, 2));
        assert_eq!(eur.value().round_dp(2), Decimal::new(16000, 2));
    }

    #[test]
    fn test_convert_never_negative() {
        let rates = RateTable::default();
        for raw in [0u32, 1, 299, 300, 52000, u32::MAX] {
            for unit in Unit::ALL {
                let converted = convert(Amount::from(raw), unit, &rates).unwrap();
                assert!(converted.value().to_f64().unwrap() >= 0.0);
            }
        }
    }

    #[test]
    fn test_convert_overflow_is_an_error() {
        let rates =
            RateTable::from_quotes([(Unit::Usd, Decimal::new(5, 1)), (Unit::Eur, Decimal::from(325))])
                .unwrap();
        let huge = Amount::new(Decimal::MAX).unwrap();

        let result = convert(huge, Unit::Usd, &rates);
        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(convert(huge, Unit::Pkr, &rates).unwrap(), huge);
    }

    #[test]
    fn test_quote_of_zero_rate_is_an_error() {
        let table = RateTable::from_entries_unchecked([
            (Unit::Pkr, Decimal::ONE),
            (Unit::Usd, Decimal::ZERO),
        ]);
        assert!(matches!(table.quote(Unit::Usd), Err(Error::Lookup(_))));
    }

    #[test]
    fn test_convert_missing_unit_is_lookup_error() {
        let rates = RateTable::from_entries_unchecked([(Unit::Pkr, Decimal::ONE)]);
        let result = convert(Amount::from(100), Unit::Usd, &rates);
        assert!(matches!(result, Err(Error::Lookup(_))));
    }
}
