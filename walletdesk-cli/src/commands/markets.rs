//! Markets command - top markets table

use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use walletdesk_core::domain::sample_markets;
use walletdesk_core::{LoggingService, Market, NumberStyle};

use super::get_context;
use crate::output;

pub fn run(logger: Option<Arc<LoggingService>>, json: bool) -> Result<()> {
    let style = get_context(logger)?.config.number_style;
    let markets = sample_markets();

    if json {
        println!("{}", serde_json::to_string_pretty(&markets)?);
        return Ok(());
    }

    print_markets(&markets, style);
    Ok(())
}

pub fn print_markets(markets: &[Market], style: NumberStyle) {
    println!("{}", "Top Markets".bold());

    let mut table = output::create_table();
    table.set_header(vec!["Pair", "Last Price (USDT)", "24h Change"]);
    for market in markets {
        table.add_row(vec![
            market.symbol.to_string(),
            market.display_price(style),
            output::colored_change(&market.display_change(), market.is_up()),
        ]);
    }
    println!("{}", table);
    println!("{}", "Prices are demo only.".dimmed());
}
