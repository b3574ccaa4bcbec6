//! Dashboard command - account, wallet and markets in one view

use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use walletdesk_core::domain::sample_markets;
use walletdesk_core::LoggingService;

use super::{get_context, markets::print_markets};

pub fn run(logger: Option<Arc<LoggingService>>, json: bool) -> Result<()> {
    let ctx = get_context(logger)?;
    let name = ctx.profile_service.get_name();
    let preference = ctx.presenter.preference();
    let balance = ctx.presenter.view(preference)?;
    let footer = ctx.footer()?;
    let markets = sample_markets();

    if json {
        let out = serde_json::json!({
            "name": name,
            "currency": preference,
            "balance": balance,
            "markets": markets,
            "footer": footer,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", "Crypto Exchange Dashboard".bold());
    println!();

    println!("{}", "Account".bold());
    let shown_name = if name.is_empty() { "(not set)".dimmed().to_string() } else { name };
    println!("  Name: {}", shown_name);
    println!("  Primary currency: {} ({})", preference.code(), preference.symbol());
    println!();

    println!("{}", "Wallet Balance".bold());
    println!("  {}", balance.display.bold());
    println!("  {}", "Available • Spot".dimmed());
    println!();

    print_markets(&markets, ctx.config.number_style);
    println!();
    println!("{}", footer.dimmed());

    Ok(())
}
