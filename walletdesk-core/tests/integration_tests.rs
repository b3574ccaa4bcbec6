//! Integration tests for walletdesk-core
//!
//! These exercise the full context against a real data directory: the
//! JSON store, settings.json and logs.duckdb all live in a temp dir.
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use std::sync::Arc;

use rust_decimal::Decimal;
use tempfile::TempDir;

use walletdesk_core::adapters::{JsonFileStore, MemoryStore};
use walletdesk_core::domain::{convert, format_amount, format_code, Amount, RateTable, Unit};
use walletdesk_core::ports::{KeyValueStore, CURRENCY_KEY, USER_NAME_KEY};
use walletdesk_core::{EntryPoint, Error, LoggingService, WalletContext};

// ============================================================================
// Test Helpers
// ============================================================================

fn open_context(dir: &TempDir) -> WalletContext {
    WalletContext::new(dir.path(), None).expect("Failed to open context")
}

fn open_logged_context(dir: &TempDir) -> WalletContext {
    let logger = LoggingService::new(dir.path(), EntryPoint::Library, "test")
        .expect("Failed to open logs");
    WalletContext::new(dir.path(), Some(Arc::new(logger))).expect("Failed to open context")
}

// ============================================================================
// Preference persistence
// ============================================================================

/// A fresh data directory starts in PKR, and a chosen currency survives reopening
#[test]
fn test_preference_survives_restart() {
    let dir = TempDir::new().unwrap();

    {
        let mut ctx = open_context(&dir);
        assert_eq!(ctx.presenter.preference(), Unit::Pkr);
        ctx.presenter.set_preference(Unit::Eur).unwrap();
    }

    let ctx = open_context(&dir);
    assert_eq!(ctx.presenter.preference(), Unit::Eur);
    assert_eq!(ctx.presenter.display().unwrap(), "€160");
}

#[test]
fn test_garbage_preference_on_disk_falls_back_to_base() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::in_dir(dir.path());
    store.set(CURRENCY_KEY, "XYZ").unwrap();

    let ctx = open_context(&dir);
    assert_eq!(ctx.presenter.preference(), Unit::Pkr);
}

#[test]
fn test_name_and_preference_share_the_store() {
    let dir = TempDir::new().unwrap();
    let mut ctx = open_context(&dir);

    ctx.profile_service.set_name("Ayesha").unwrap();
    ctx.presenter.set_preference(Unit::Usd).unwrap();

    let store = JsonFileStore::in_dir(dir.path());
    assert_eq!(store.get(USER_NAME_KEY).unwrap().as_deref(), Some("Ayesha"));
    assert_eq!(store.get(CURRENCY_KEY).unwrap().as_deref(), Some("USD"));

    assert_eq!(
        ctx.footer().unwrap(),
        "Demo app. No real trading. Ayesha, your balance is $173."
    );
}

// ============================================================================
// Conversion and formatting
// ============================================================================

#[test]
fn test_sample_balance_in_every_currency() {
    let rates = RateTable::default();
    let balance = Amount::from(52000);

    let usd = convert(balance, Unit::Usd, &rates).unwrap();
    assert_eq!(usd.value().round_dp(2), Decimal::new(17333, 2));
    assert_eq!(format_amount(usd, Unit::Usd), "$173");

    let pkr = convert(balance, Unit::Pkr, &rates).unwrap();
    assert_eq!(pkr, balance);
    assert_eq!(format_amount(pkr, Unit::Pkr), "Rs 52,000");
}

#[test]
fn test_invalid_code_is_format_error() {
    let result = format_code(Amount::from(100), "INVALID", Default::default());
    assert!(matches!(result, Err(Error::Format(_))));
}

#[test]
fn test_settings_override_balance_and_rates() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("settings.json"),
        r#"{ "app": { "balance": "1500000", "numberStyle": "eu", "quotes": { "USD": "250" } } }"#,
    )
    .unwrap();

    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let ctx = WalletContext::with_store(dir.path(), store, None).unwrap();

    assert_eq!(ctx.presenter.display().unwrap(), "Rs 1.500.000");
    assert_eq!(ctx.presenter.display_in(Unit::Usd).unwrap(), "$6.000");
}

// ============================================================================
// Event log
// ============================================================================

#[test]
fn test_preference_changes_are_logged_without_names() {
    let dir = TempDir::new().unwrap();
    let mut ctx = open_logged_context(&dir);

    ctx.profile_service.set_name("Ayesha").unwrap();
    ctx.presenter.set_preference(Unit::Usd).unwrap();

    let logger = ctx.logger.clone().unwrap();
    let entries = logger.get_recent(10).unwrap();
    let events: Vec<&str> = entries.iter().map(|e| e.event.as_str()).collect();
    assert!(events.contains(&"preference_changed"));
    assert!(events.contains(&"name_changed"));

    let changed = entries.iter().find(|e| e.event == "preference_changed").unwrap();
    assert_eq!(changed.unit.as_deref(), Some("USD"));

    let serialized = serde_json::to_string(&entries).unwrap();
    assert!(!serialized.contains("Ayesha"));
}

#[test]
fn test_invalid_stored_preference_is_logged() {
    let dir = TempDir::new().unwrap();
    JsonFileStore::in_dir(dir.path()).set(CURRENCY_KEY, "XYZ").unwrap();

    let ctx = open_logged_context(&dir);
    assert_eq!(ctx.presenter.preference(), Unit::Pkr);

    let entries = ctx.logger.as_ref().unwrap().get_recent(10).unwrap();
    assert!(entries.iter().any(|e| e.event == "preference_invalid"));
}
