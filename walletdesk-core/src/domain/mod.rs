//! Core domain entities
//!
//! Pure data structures and calculations - no I/O or external dependencies.

mod amount;
pub mod chart;
pub mod format;
pub mod market;
pub mod rate;
pub mod result;
mod unit;

pub use amount::Amount;
pub use chart::{chart_data, ChartData, ChartTab};
pub use format::{format_amount, format_amount_with, format_code, NumberStyle};
pub use market::{sample_markets, Market};
pub use rate::{convert, RateTable};
pub use unit::Unit;
