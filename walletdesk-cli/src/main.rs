//! Walletdesk CLI - demo exchange wallet in your terminal

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use walletdesk_core::LoggingService;

mod commands;
mod output;

use commands::{balance, chart, currency, dashboard, logs, markets, name, style};

/// Walletdesk - demo exchange wallet in your terminal
#[derive(Parser)]
#[command(name = "wd", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the wallet balance
    Balance {
        /// Currency to show instead of the saved preference
        #[arg(long)]
        unit: Option<String>,
        /// Show the balance in every currency
        #[arg(long)]
        all: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change the display currency
    Currency {
        #[command(subcommand)]
        command: currency::CurrencyCommands,
    },

    /// Show or change the saved display name
    Name {
        #[command(subcommand)]
        command: name::NameCommands,
    },

    /// Show the top markets
    Markets {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a chart dataset
    Chart {
        /// Tab to show (price, volume, depth)
        #[arg(long, default_value = "price")]
        tab: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the full dashboard
    Dashboard {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change how amounts are grouped (us, eu, plain)
    Style {
        /// New style to save in settings.json
        style: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// View and manage event logs
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Balance { .. } => "balance",
            Commands::Currency { .. } => "currency",
            Commands::Name { .. } => "name",
            Commands::Markets { .. } => "markets",
            Commands::Chart { .. } => "chart",
            Commands::Dashboard { .. } => "dashboard",
            Commands::Style { .. } => "style",
            Commands::Logs { .. } => "logs",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.name();

    let logger = commands::get_logger();
    commands::log_command(&logger, command);

    match run(cli, logger.clone()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            commands::log_error(&logger, command, &e);
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, logger: Option<Arc<LoggingService>>) -> Result<()> {
    match cli.command {
        Commands::Balance { unit, all, json } => balance::run(logger, unit.as_deref(), all, json),
        Commands::Currency { command } => currency::run(logger, command),
        Commands::Name { command } => name::run(logger, command),
        Commands::Markets { json } => markets::run(logger, json),
        Commands::Chart { tab, json } => chart::run(&tab, json),
        Commands::Dashboard { json } => dashboard::run(logger, json),
        Commands::Style { style, json } => style::run(style.as_deref(), json),
        Commands::Logs { command } => logs::run(logger, command),
    }
}
