//! Style command - show or change the number grouping style

use anyhow::{Context, Result};
use colored::Colorize;
use walletdesk_core::config::{Config, NUMBER_STYLE_ENV};
use walletdesk_core::domain::format_amount_with;
use walletdesk_core::{NumberStyle, Unit};

use super::get_data_dir;
use crate::output;

pub fn run(style: Option<&str>, json: bool) -> Result<()> {
    let data_dir = get_data_dir()?;
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;

    let mut config = Config::load(&data_dir)?;

    if let Some(style) = style {
        config.number_style = style.parse::<NumberStyle>()?;
        config.save(&data_dir).context("Failed to save settings.json")?;
    }

    let sample = format_amount_with(config.balance, Unit::Pkr, config.number_style);

    if json {
        println!(
            "{}",
            serde_json::json!({ "numberStyle": config.number_style, "sample": sample })
        );
        return Ok(());
    }

    if style.is_some() {
        output::success(&format!("Number style set to {}", config.number_style));
    } else {
        println!("{}", config.number_style.to_string().bold());
    }
    println!("Balance: {}", sample);

    if std::env::var(NUMBER_STYLE_ENV).is_ok() {
        output::warning(&format!("{} is set and overrides settings.json", NUMBER_STYLE_ENV));
    }

    Ok(())
}
