//! Name command - manage the locally saved display name

use std::sync::Arc;

use anyhow::Result;
use clap::Subcommand;
use walletdesk_core::LoggingService;

use super::get_context;
use crate::output;

#[derive(Subcommand)]
pub enum NameCommands {
    /// Show the saved name
    Get {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Save a name
    Set {
        /// Name to show on the dashboard
        name: String,
    },
    /// Remove the saved name
    Clear,
}

pub fn run(logger: Option<Arc<LoggingService>>, command: NameCommands) -> Result<()> {
    let ctx = get_context(logger)?;
    let profile = &ctx.profile_service;

    match command {
        NameCommands::Get { json } => {
            let name = profile.get_name();
            if json {
                println!("{}", serde_json::json!({ "name": name }));
            } else if name.is_empty() {
                println!("No name saved. Use 'wd name set <NAME>'.");
            } else {
                println!("{}", name);
            }
        }
        NameCommands::Set { name } => {
            let saved = profile.set_name(&name)?;
            if saved.is_empty() {
                output::warning("Name cleared");
            } else {
                output::success(&format!("Saved name: {}", saved));
            }
            println!("Saved locally on this device.");
        }
        NameCommands::Clear => {
            profile.clear_name()?;
            output::success("Name cleared");
        }
    }

    Ok(())
}
