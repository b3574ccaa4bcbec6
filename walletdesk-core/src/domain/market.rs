//! Sample market board shown on the dashboard

use rust_decimal::Decimal;
use serde::Serialize;

use super::format::{format_decimal, NumberStyle};

/// A spot market quoted in USDT
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Market {
    pub symbol: &'static str,
    pub price: Decimal,
    /// 24h change in percent
    pub change_pct: Decimal,
}

impl Market {
    fn new(symbol: &'static str, price: Decimal, change_pct: Decimal) -> Self {
        Self {
            symbol,
            price,
            change_pct,
        }
    }

    /// Flat markets count as up
    pub fn is_up(&self) -> bool {
        !self.change_pct.is_sign_negative() || self.change_pct.is_zero()
    }

    pub fn display_price(&self, style: NumberStyle) -> String {
        format_price(self.price, style)
    }

    pub fn display_change(&self) -> String {
        format_change(self.change_pct)
    }
}

/// Demo prices, not live data
pub fn sample_markets() -> Vec<Market> {
    vec![
        Market::new("BTC/USDT", Decimal::new(6425032, 2), Decimal::new(18, 1)),
        Market::new("ETH/USDT", Decimal::new(31205, 1), Decimal::new(-9, 1)),
        Market::new("BNB/USDT", Decimal::new(58512, 2), Decimal::new(6, 1)),
        Market::new("SOL/USDT", Decimal::new(17244, 2), Decimal::new(31, 1)),
        Market::new("XRP/USDT", Decimal::new(62, 2), Decimal::new(-24, 1)),
    ]
}

/// Last price with at most two fractional digits
pub fn format_price(price: Decimal, style: NumberStyle) -> String {
    format_decimal(price, 2, style)
}

/// Percent change, with an explicit `+` for gains
pub fn format_change(pct: Decimal) -> String {
    let normalized = pct.normalize();
    if normalized > Decimal::ZERO {
        format!("+{}%", normalized)
    } else if normalized.is_zero() {
        "0%".to_string()
    } else {
        format!("{}%", normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_markets() {
        let markets = sample_markets();
        assert_eq!(markets.len(), 5);
        assert_eq!(markets[0].symbol, "BTC/USDT");
        assert_eq!(markets[0].price, Decimal::new(6425032, 2));
        assert_eq!(markets[1].change_pct, Decimal::new(-9, 1));
        assert_eq!(markets[4].price, Decimal::new(62, 2));
    }

    #[test]
    fn test_price_display() {
        let markets = sample_markets();
        let prices: Vec<String> = markets.iter().map(|m| m.display_price(NumberStyle::Us)).collect();
        assert_eq!(prices, vec!["64,250.32", "3,120.5", "585.12", "172.44", "0.62"]);
    }

    #[test]
    fn test_change_display() {
        assert_eq!(format_change(Decimal::new(18, 1)), "+1.8%");
        assert_eq!(format_change(Decimal::new(-24, 1)), "-2.4%");
        assert_eq!(format_change(Decimal::ZERO), "0%");
        assert_eq!(format_change(Decimal::new(310, 2)), "+3.1%");
    }

    #[test]
    fn test_direction() {
        let markets = sample_markets();
        let up: Vec<bool> = markets.iter().map(Market::is_up).collect();
        assert_eq!(up, vec![true, false, true, true, false]);

        let flat = Market::new("FLAT/USDT", Decimal::ONE, Decimal::ZERO);
        assert!(flat.is_up());
    }
}
