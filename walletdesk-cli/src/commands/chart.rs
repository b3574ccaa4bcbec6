//! Chart command - dataset behind a dashboard chart tab

use anyhow::Result;
use colored::Colorize;
use walletdesk_core::domain::{chart_data, ChartData};
use walletdesk_core::ChartTab;

use crate::output;

pub fn run(tab: &str, json: bool) -> Result<()> {
    let tab: ChartTab = tab.parse()?;
    let data = chart_data(tab);

    if json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    println!("{}", tab.title().bold());

    let mut table = output::create_table();
    match data {
        ChartData::Price(points) => {
            table.set_header(vec!["Time", "Price"]);
            for p in points {
                table.add_row(vec![p.time.format("%H:%M").to_string(), p.price.to_string()]);
            }
        }
        ChartData::Volume(points) => {
            table.set_header(vec!["Time", "Volume"]);
            for p in points {
                table.add_row(vec![p.time.format("%H:%M").to_string(), p.volume.to_string()]);
            }
        }
        ChartData::Depth(levels) => {
            table.set_header(vec!["Level", "Bids", "Asks"]);
            for level in levels {
                table.add_row(vec![level.label(), level.bids.to_string(), level.asks.to_string()]);
            }
        }
    }
    println!("{}", table);

    Ok(())
}
