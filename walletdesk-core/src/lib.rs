//! Walletdesk Core - wallet display logic for the demo exchange
//!
//! This crate follows a hexagonal layout:
//!
//! - **domain**: currencies, rates, formatting, sample market data
//! - **ports**: trait definitions for external dependencies (KeyValueStore)
//! - **services**: presenter, profile and event logging
//! - **adapters**: concrete stores (in-memory, JSON file)

pub mod adapters;
pub mod config;
pub mod domain;
mod log_migrations;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::JsonFileStore;
use config::Config;
use ports::KeyValueStore;
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult};
pub use domain::{Amount, ChartTab, Market, NumberStyle, RateTable, Unit};
pub use services::{EntryPoint, LogEvent, LoggingService};

/// Main context for Walletdesk operations
///
/// Holds the configuration, the preference store and all services.
pub struct WalletContext {
    pub config: Config,
    pub store: Arc<dyn KeyValueStore>,
    pub logger: Option<Arc<LoggingService>>,
    pub presenter: BalancePresenter,
    pub profile_service: ProfileService,
}

impl WalletContext {
    /// Open the context rooted at `data_dir`, storing preferences in storage.json
    pub fn new(data_dir: &Path, logger: Option<Arc<LoggingService>>) -> Result<Self> {
        let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::in_dir(data_dir));
        Self::with_store(data_dir, store, logger)
    }

    /// Open the context with an explicit store
    pub fn with_store(
        data_dir: &Path,
        store: Arc<dyn KeyValueStore>,
        logger: Option<Arc<LoggingService>>,
    ) -> Result<Self> {
        let config = Config::load(data_dir)?;

        let presenter = BalancePresenter::with_logger(
            Arc::clone(&store),
            config.rates.clone(),
            config.number_style,
            config.balance,
            logger.clone(),
        );
        let profile_service = ProfileService::new(Arc::clone(&store), logger.clone());

        Ok(Self {
            config,
            store,
            logger,
            presenter,
            profile_service,
        })
    }

    /// Dashboard footer for the current name and preferred currency
    pub fn footer(&self) -> Result<String> {
        let display = self.presenter.display()?;
        Ok(self.profile_service.footer(&display))
    }
}
