//! Currency display formatting
//!
//! Amounts are shown with zero fractional digits, rounding half away from
//! zero (0.5 -> 1, 2.5 -> 3), and thousands grouping per [`NumberStyle`].

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::result::{Error, Result};
use super::unit::Unit;

/// Digit grouping convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberStyle {
    /// 52,000.5
    #[default]
    Us,
    /// 52.000,5
    Eu,
    /// 52000.5
    Plain,
}

impl NumberStyle {
    fn group_separator(&self) -> Option<char> {
        match self {
            NumberStyle::Us => Some(','),
            NumberStyle::Eu => Some('.'),
            NumberStyle::Plain => None,
        }
    }

    fn decimal_separator(&self) -> char {
        match self {
            NumberStyle::Eu => ',',
            NumberStyle::Us | NumberStyle::Plain => '.',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NumberStyle::Us => "us",
            NumberStyle::Eu => "eu",
            NumberStyle::Plain => "plain",
        }
    }
}

impl fmt::Display for NumberStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumberStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "us" | "en" => Ok(NumberStyle::Us),
            "eu" | "de" => Ok(NumberStyle::Eu),
            "plain" | "none" => Ok(NumberStyle::Plain),
            other => Err(Error::config(format!("unknown number style: {}", other))),
        }
    }
}

/// Format an amount in `unit` with the default style
pub fn format_amount(amount: Amount, unit: Unit) -> String {
    format_amount_with(amount, unit, NumberStyle::default())
}

/// Format an amount in `unit`
pub fn format_amount_with(amount: Amount, unit: Unit, style: NumberStyle) -> String {
    let rounded = amount
        .value()
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = format_decimal(rounded, 0, style);

    if unit.spaced_symbol() {
        format!("{} {}", unit.symbol(), digits)
    } else {
        format!("{}{}", unit.symbol(), digits)
    }
}

/// Format an amount given a raw currency code
///
/// Unrecognized codes fail with a format error.
pub fn format_code(amount: Amount, code: &str, style: NumberStyle) -> Result<String> {
    let unit: Unit = code.parse()?;
    Ok(format_amount_with(amount, unit, style))
}

/// Render a decimal with grouping and at most `max_fraction` digits
///
/// Trailing fractional zeros are dropped. Negative values keep their sign.
pub fn format_decimal(value: Decimal, max_fraction: u32, style: NumberStyle) -> String {
    let rounded = value
        .round_dp_with_strategy(max_fraction, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();

    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + text.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, style.group_separator()));
    if let Some(frac) = frac_part {
        out.push(style.decimal_separator());
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str, separator: Option<char>) -> String {
    let Some(sep) = separator else {
        return digits.to_string();
    };

    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}
