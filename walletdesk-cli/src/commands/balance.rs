//! Balance command - wallet balance in the preferred currency

use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use walletdesk_core::{LoggingService, Unit};

use super::get_context;
use crate::output;

pub fn run(
    logger: Option<Arc<LoggingService>>,
    unit: Option<&str>,
    all: bool,
    json: bool,
) -> Result<()> {
    let ctx = get_context(logger)?;
    let presenter = &ctx.presenter;

    if all {
        let views = presenter.all_views()?;
        if json {
            println!("{}", serde_json::to_string_pretty(&views)?);
            return Ok(());
        }

        let mut table = output::create_table();
        table.set_header(vec!["Currency", "Balance", ""]);
        for view in views {
            let marker = if view.preferred { "preferred" } else { "" };
            table.add_row(vec![view.unit.code().to_string(), view.display, marker.to_string()]);
        }
        println!("{}", table);
        return Ok(());
    }

    // An explicit --unit must be a known code; no silent fallback
    let unit = match unit {
        Some(code) => code.parse::<Unit>()?,
        None => presenter.preference(),
    };
    let view = presenter.view(unit)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", view.display.bold());
        println!("{}", "Available • Spot".dimmed());
    }

    Ok(())
}
