//! Currency command - show or change the display currency

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use walletdesk_core::{LoggingService, OperationResult, Unit};

use super::get_context;
use crate::output;

#[derive(Subcommand)]
pub enum CurrencyCommands {
    /// Show the preferred currency
    Get {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change the preferred currency
    Set {
        /// Currency code (PKR, USD, EUR)
        code: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List supported currencies and rates
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(logger: Option<Arc<LoggingService>>, command: CurrencyCommands) -> Result<()> {
    let mut ctx = get_context(logger)?;

    match command {
        CurrencyCommands::Get { json } => {
            let unit = ctx.presenter.preference();
            if json {
                println!("{}", serde_json::json!({ "currency": unit, "symbol": unit.symbol() }));
            } else {
                println!("{} ({})", unit.code().bold(), unit.symbol());
            }
        }
        CurrencyCommands::Set { code, json } => {
            let unit: Unit = code.parse()?;
            let result = ctx.presenter.set_preference(unit);

            if json {
                return match result {
                    Ok(()) => {
                        let mut context = HashMap::new();
                        context.insert("balance".to_string(), serde_json::json!(ctx.presenter.display()?));
                        let out = OperationResult::ok_with_context(unit, context);
                        println!("{}", serde_json::to_string_pretty(&out)?);
                        Ok(())
                    }
                    Err(e) => {
                        let out: OperationResult<Unit> = OperationResult::fail(e.to_string());
                        println!("{}", serde_json::to_string_pretty(&out)?);
                        Err(e.into())
                    }
                };
            }

            match result {
                Ok(()) => {
                    output::success(&format!("Display currency set to {}", unit));
                    println!("Balance: {}", ctx.presenter.display()?);
                }
                Err(e) => {
                    output::warning(&format!(
                        "Display currency was not saved; still showing {}",
                        ctx.presenter.preference()
                    ));
                    return Err(e.into());
                }
            }
        }
        CurrencyCommands::List { json } => {
            let rates = ctx.presenter.rates();
            let preferred = ctx.presenter.preference();

            if json {
                let rows: Vec<serde_json::Value> = Unit::ALL
                    .iter()
                    .map(|u| {
                        serde_json::json!({
                            "code": u,
                            "name": u.name(),
                            "symbol": u.symbol(),
                            "rate": rates.rate(*u).ok(),
                            "preferred": *u == preferred,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["Code", "Name", "Symbol", "PKR per unit", ""]);
            for unit in Unit::ALL {
                let quote = rates.quote(unit)?.round_dp(2).normalize();
                let marker = if unit == preferred { "*" } else { "" };
                table.add_row(vec![
                    unit.code().to_string(),
                    unit.name().to_string(),
                    unit.symbol().to_string(),
                    quote.to_string(),
                    marker.to_string(),
                ]);
            }
            println!("{}", table);
        }
    }

    Ok(())
}
