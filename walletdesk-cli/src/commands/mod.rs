//! CLI command implementations

pub mod balance;
pub mod chart;
pub mod currency;
pub mod dashboard;
pub mod logs;
pub mod markets;
pub mod name;
pub mod style;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use walletdesk_core::{EntryPoint, LogEvent, LoggingService, WalletContext};

/// Env var pointing at the data directory
pub const DATA_DIR_ENV: &str = "WALLETDESK_DIR";

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<Arc<LoggingService>> {
    let data_dir = get_data_dir().ok()?;
    std::fs::create_dir_all(&data_dir).ok()?;
    LoggingService::new(&data_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION"))
        .ok()
        .map(Arc::new)
}

/// Log a command execution, ignoring any errors (logging should never break the app)
pub fn log_command(logger: &Option<Arc<LoggingService>>, command: &str) {
    if let Some(l) = logger {
        let _ = l.log_command(command);
    }
}

pub fn log_error(logger: &Option<Arc<LoggingService>>, command: &str, error: &anyhow::Error) {
    if let Some(l) = logger {
        let _ = l.log(
            LogEvent::new("command_failed")
                .with_command(command)
                .with_error(error.to_string())
                .with_error_details(format!("{:?}", error)),
        );
    }
}

/// Data directory from the environment or ~/.walletdesk
pub fn get_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".walletdesk"))
        .context("Could not find home directory; set WALLETDESK_DIR")
}

/// Open the wallet context
pub fn get_context(logger: Option<Arc<LoggingService>>) -> Result<WalletContext> {
    let data_dir = get_data_dir()?;

    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;

    WalletContext::new(&data_dir, logger).context("Failed to initialize wallet context")
}
