//! Configuration management
//!
//! Settings live in `<data_dir>/settings.json`:
//! ```json
//! {
//!   "app": {
//!     "balance": "52000",
//!     "numberStyle": "us",
//!     "quotes": { "USD": "300", "EUR": "325" }
//!   }
//! }
//! ```
//! Quotes are base units (PKR) per one display unit.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use anyhow::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::result::Error;
use crate::domain::{Amount, NumberStyle, RateTable, Unit};

/// Wallet balance shown when settings don't override it (PKR)
pub const DEFAULT_BALANCE: u32 = 52_000;

/// Env var overriding the configured number style
pub const NUMBER_STYLE_ENV: &str = "WALLETDESK_NUMBER_STYLE";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    balance: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    number_style: Option<NumberStyle>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    quotes: BTreeMap<String, Decimal>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Walletdesk configuration (resolved view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub balance: Amount,
    pub number_style: NumberStyle,
    pub rates: RateTable,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            balance: Amount::from(DEFAULT_BALANCE),
            number_style: NumberStyle::default(),
            rates: RateTable::default(),
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the data directory
    ///
    /// A missing settings file yields defaults. A file that exists but
    /// fails to parse is a config error, as are quote overrides naming
    /// unknown currencies or non-positive values.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let raw = Self::read_settings(data_dir)?;

        let number_style = match std::env::var(NUMBER_STYLE_ENV).ok() {
            Some(value) => value.parse()?,
            None => raw.app.number_style.unwrap_or_default(),
        };

        let rates = Self::resolve_rates(&raw.app.quotes)?;

        Ok(Self {
            balance: raw.app.balance.unwrap_or(Amount::from(DEFAULT_BALANCE)),
            number_style,
            rates,
            _raw_settings: raw,
        })
    }

    fn resolve_rates(quotes: &BTreeMap<String, Decimal>) -> Result<RateTable> {
        if quotes.is_empty() {
            return Ok(RateTable::default());
        }

        let defaults = RateTable::default();
        let mut resolved = BTreeMap::new();
        for unit in Unit::ALL.into_iter().filter(|u| !u.is_base()) {
            resolved.insert(unit, defaults.quote(unit)?);
        }
        for (code, quote) in quotes {
            let unit = Unit::parse(code)
                .ok_or_else(|| Error::config(format!("unknown currency in quotes: {}", code)))?;
            if unit.is_base() {
                return Err(Error::config(format!("{} is the base currency and cannot be quoted", unit)).into());
            }
            resolved.insert(unit, *quote);
        }

        Ok(RateTable::from_quotes(resolved)?)
    }

    fn read_settings(data_dir: &Path) -> Result<SettingsFile> {
        let settings_path = data_dir.join("settings.json");
        if !settings_path.exists() {
            return Ok(SettingsFile::default());
        }

        let content = std::fs::read_to_string(&settings_path)?;
        let settings = serde_json::from_str(&content).map_err(|e| {
            Error::config(format!("Invalid {}: {}", settings_path.display(), e))
        })?;
        Ok(settings)
    }

    /// Save config to the data directory
    ///
    /// Other settings in the file are kept. An unparseable file is left
    /// untouched and reported rather than overwritten.
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let settings_path = data_dir.join("settings.json");
        let mut settings = Self::read_settings(data_dir)?;

        settings.app.balance = Some(self.balance);
        settings.app.number_style = Some(self.number_style);

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_settings_file() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.balance, Amount::from(52_000));
        assert_eq!(config.rates, RateTable::default());
    }

    #[test]
    fn test_quote_override() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{ "app": { "balance": "1000", "quotes": { "usd": "250" } } }"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.balance, Amount::from(1000));
        assert_eq!(config.rates.quote(Unit::Usd).unwrap().round_dp(6), Decimal::from(250));
        assert_eq!(config.rates.quote(Unit::Eur).unwrap().round_dp(6), Decimal::from(325));
    }

    #[test]
    fn test_bad_quotes_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        std::fs::write(&path, r#"{ "app": { "quotes": { "GBP": "380" } } }"#).unwrap();
        assert!(Config::load(dir.path()).is_err());

        std::fs::write(&path, r#"{ "app": { "quotes": { "PKR": "2" } } }"#).unwrap();
        assert!(Config::load(dir.path()).is_err());

        std::fs::write(&path, r#"{ "app": { "quotes": { "USD": "0" } } }"#).unwrap();
        assert!(Config::load(dir.path()).is_err());
    }

    #[test]
    fn test_unparseable_quote_is_config_error() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{ "app": { "quotes": { "USD": "abc" } } }"#,
        )
        .unwrap();

        let err = Config::load(dir.path()).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Config(_))));
    }

    #[test]
    fn test_negative_balance_is_config_error() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{ "app": { "balance": "-5", "quotes": { "USD": "250" } } }"#,
        )
        .unwrap();

        let err = Config::load(dir.path()).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Config(_))));
    }

    #[test]
    fn test_save_refuses_to_overwrite_broken_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(Config::default().save(dir.path()).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_save_preserves_unknown_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "app": { "theme": "dark" }, "plugins": { "x": 1 } }"#).unwrap();

        let mut config = Config::load(dir.path()).unwrap();
        config.number_style = NumberStyle::Eu;
        config.save(dir.path()).unwrap();

        let saved: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved["app"]["theme"], "dark");
        assert_eq!(saved["app"]["numberStyle"], "eu");
        assert_eq!(saved["plugins"]["x"], 1);
    }
}
