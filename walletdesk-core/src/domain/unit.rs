//! Display currency units

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::result::Error;

/// A display currency
///
/// PKR is the base unit: balances are held in PKR and converted on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Unit {
    Pkr,
    Usd,
    Eur,
}

impl Unit {
    /// The reference unit balances are stored in
    pub const BASE: Unit = Unit::Pkr;

    /// Every recognized unit, base first
    pub const ALL: [Unit; 3] = [Unit::Pkr, Unit::Usd, Unit::Eur];

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Unit::Pkr => "PKR",
            Unit::Usd => "USD",
            Unit::Eur => "EUR",
        }
    }

    /// Conventional symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Pkr => "Rs",
            Unit::Usd => "$",
            Unit::Eur => "€",
        }
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Pkr => "Pakistani Rupee",
            Unit::Usd => "US Dollar",
            Unit::Eur => "Euro",
        }
    }

    /// Whether the symbol is separated from the digits by a space
    ///
    /// Alphabetic symbols ("Rs") are spaced, sign symbols ("$", "€") are not.
    pub(crate) fn spaced_symbol(&self) -> bool {
        self.symbol().chars().all(char::is_alphabetic)
    }

    pub fn is_base(&self) -> bool {
        *self == Self::BASE
    }

    /// Parse a currency code, returning None for anything unrecognized
    pub fn parse(code: &str) -> Option<Unit> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|u| u.code().eq_ignore_ascii_case(code))
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::BASE
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::parse(s).ok_or_else(|| Error::format(format!("unknown currency code: {}", s)))
    }
}
