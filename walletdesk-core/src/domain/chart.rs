//! Chart datasets behind the dashboard tabs

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::result::Error;

/// Which chart tab is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartTab {
    #[default]
    Price,
    Volume,
    Depth,
}

impl ChartTab {
    pub const ALL: [ChartTab; 3] = [ChartTab::Price, ChartTab::Volume, ChartTab::Depth];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartTab::Price => "price",
            ChartTab::Volume => "volume",
            ChartTab::Depth => "depth",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartTab::Price => "Price",
            ChartTab::Volume => "Volume",
            ChartTab::Depth => "Order Book",
        }
    }
}

impl fmt::Display for ChartTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartTab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price" => Ok(ChartTab::Price),
            "volume" => Ok(ChartTab::Volume),
            "depth" | "order-book" | "orderbook" => Ok(ChartTab::Depth),
            other => Err(Error::validation(format!("unknown chart tab: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub time: NaiveTime,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumePoint {
    pub time: NaiveTime,
    pub volume: Decimal,
}

/// Resting size at a price level offset from mid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepthLevel {
    pub level: i32,
    pub bids: Decimal,
    pub asks: Decimal,
}

impl DepthLevel {
    /// Signed label, e.g. "-3", "0", "+2"
    pub fn label(&self) -> String {
        if self.level > 0 {
            format!("+{}", self.level)
        } else {
            self.level.to_string()
        }
    }
}

/// Data series for one tab
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tab", content = "points", rename_all = "lowercase")]
pub enum ChartData {
    Price(Vec<PricePoint>),
    Volume(Vec<VolumePoint>),
    Depth(Vec<DepthLevel>),
}

impl ChartData {
    pub fn tab(&self) -> ChartTab {
        match self {
            ChartData::Price(_) => ChartTab::Price,
            ChartData::Volume(_) => ChartTab::Volume,
            ChartData::Depth(_) => ChartTab::Depth,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ChartData::Price(p) => p.len(),
            ChartData::Volume(v) => v.len(),
            ChartData::Depth(d) => d.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fixed y-axis range for the price chart
pub const PRICE_AXIS: (u32, u32) = (63_800, 64_600);

const SAMPLE_TIMES: [(u32, u32); 7] = [
    (10, 0),
    (10, 5),
    (10, 10),
    (10, 15),
    (10, 20),
    (10, 25),
    (10, 30),
];

const SAMPLE_PRICES: [i64; 7] = [64_000, 64_120, 63_950, 64_210, 64_300, 64_240, 64_420];

const SAMPLE_VOLUMES: [i64; 7] = [1_200, 1_800, 900, 1_500, 2_300, 1_700, 2_600];

/// (level, bids x10, asks x10)
const SAMPLE_DEPTH: [(i32, i64, i64); 7] = [
    (-3, 42, 0),
    (-2, 51, 0),
    (-1, 76, 0),
    (0, 0, 0),
    (1, 0, 63),
    (2, 0, 49),
    (3, 0, 32),
];

fn sample_times() -> impl Iterator<Item = NaiveTime> {
    SAMPLE_TIMES
        .iter()
        .filter_map(|(h, m)| NaiveTime::from_hms_opt(*h, *m, 0))
}

/// Dataset for the selected tab
pub fn chart_data(tab: ChartTab) -> ChartData {
    match tab {
        ChartTab::Price => ChartData::Price(
            sample_times()
                .zip(SAMPLE_PRICES)
                .map(|(time, p)| PricePoint {
                    time,
                    price: Decimal::from(p),
                })
                .collect(),
        ),
        ChartTab::Volume => ChartData::Volume(
            sample_times()
                .zip(SAMPLE_VOLUMES)
                .map(|(time, v)| VolumePoint {
                    time,
                    volume: Decimal::from(v),
                })
                .collect(),
        ),
        ChartTab::Depth => ChartData::Depth(
            SAMPLE_DEPTH
                .iter()
                .map(|(level, bids, asks)| DepthLevel {
                    level: *level,
                    bids: Decimal::new(*bids, 1),
                    asks: Decimal::new(*asks, 1),
                })
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_parse() {
        assert_eq!("price".parse::<ChartTab>().unwrap(), ChartTab::Price);
        assert_eq!("Volume".parse::<ChartTab>().unwrap(), ChartTab::Volume);
        assert_eq!("order-book".parse::<ChartTab>().unwrap(), ChartTab::Depth);
        assert!("candles".parse::<ChartTab>().is_err());
        assert_eq!(ChartTab::default(), ChartTab::Price);
    }

    #[test]
    fn test_each_tab_selects_its_dataset() {
        for tab in ChartTab::ALL {
            let data = chart_data(tab);
            assert_eq!(data.tab(), tab);
            assert_eq!(data.len(), 7);
        }
    }

    #[test]
    fn test_price_series_within_axis() {
        let ChartData::Price(points) = chart_data(ChartTab::Price) else {
            panic!("expected price data");
        };
        let (lo, hi) = PRICE_AXIS;
        assert!(points
            .iter()
            .all(|p| p.price >= Decimal::from(lo) && p.price <= Decimal::from(hi)));
        assert_eq!(points[0].time, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(points[6].price, Decimal::from(64_420));
    }

    #[test]
    fn test_depth_sides_do_not_overlap() {
        let ChartData::Depth(levels) = chart_data(ChartTab::Depth) else {
            panic!("expected depth data");
        };
        for level in &levels {
            if level.level < 0 {
                assert!(level.asks.is_zero());
            }
            if level.level > 0 {
                assert!(level.bids.is_zero());
            }
        }
        assert_eq!(levels[0].label(), "-3");
        assert_eq!(levels[3].label(), "0");
        assert_eq!(levels[4].label(), "+1");
        assert_eq!(levels[2].bids, Decimal::new(76, 1));
    }
}
