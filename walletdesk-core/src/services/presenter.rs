//! Balance presenter - wallet balance in the user's preferred currency

use std::sync::Arc;

use serde::Serialize;

use crate::domain::result::Result;
use crate::domain::{convert, format_amount_with, Amount, NumberStyle, RateTable, Unit};
use crate::ports::{KeyValueStore, CURRENCY_KEY};
use crate::services::logging::{LogEvent, LoggingService};

/// Balance rendered for one currency
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceView {
    pub unit: Unit,
    pub amount: Amount,
    pub display: String,
    pub preferred: bool,
}

/// Presents a base-currency balance in the preferred display currency
///
/// The preference is read from the store once on construction and written
/// back on every change.
pub struct BalancePresenter {
    store: Arc<dyn KeyValueStore>,
    rates: RateTable,
    style: NumberStyle,
    balance: Amount,
    preference: Unit,
    logger: Option<Arc<LoggingService>>,
}

impl BalancePresenter {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        rates: RateTable,
        style: NumberStyle,
        balance: Amount,
    ) -> Self {
        Self::with_logger(store, rates, style, balance, None)
    }

    pub fn with_logger(
        store: Arc<dyn KeyValueStore>,
        rates: RateTable,
        style: NumberStyle,
        balance: Amount,
        logger: Option<Arc<LoggingService>>,
    ) -> Self {
        let mut presenter = Self {
            store,
            rates,
            style,
            balance,
            preference: Unit::BASE,
            logger,
        };
        presenter.preference = presenter.load_preference();
        presenter
    }

    /// Read the stored preference
    ///
    /// Missing, unrecognized, or unreadable values fall back to the base
    /// unit. Nothing here is treated as a failure.
    pub fn load_preference(&self) -> Unit {
        match self.store.get(CURRENCY_KEY) {
            Ok(Some(code)) => match Unit::parse(&code) {
                Some(unit) => unit,
                None => {
                    self.log(LogEvent::new("preference_invalid").with_unit(code));
                    Unit::BASE
                }
            },
            Ok(None) => Unit::BASE,
            Err(e) => {
                self.log(LogEvent::new("preference_read_failed").with_error(e.to_string()));
                Unit::BASE
            }
        }
    }

    /// Persist a new preference
    ///
    /// The in-memory preference only changes once the store accepted the write.
    pub fn set_preference(&mut self, unit: Unit) -> Result<()> {
        if let Err(e) = self.store.set(CURRENCY_KEY, unit.code()) {
            self.log(
                LogEvent::new("preference_write_failed")
                    .with_unit(unit.code())
                    .with_error(e.to_string()),
            );
            return Err(e);
        }
        self.preference = unit;
        self.log(LogEvent::new("preference_changed").with_unit(unit.code()));
        Ok(())
    }

    pub fn preference(&self) -> Unit {
        self.preference
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn style(&self) -> NumberStyle {
        self.style
    }

    /// Balance converted into `unit`
    pub fn convert(&self, unit: Unit) -> Result<Amount> {
        convert(self.balance, unit, &self.rates)
    }

    /// Formatted balance in `unit`
    pub fn display_in(&self, unit: Unit) -> Result<String> {
        let amount = self.convert(unit)?;
        Ok(format_amount_with(amount, unit, self.style))
    }

    /// Formatted balance in the preferred unit
    pub fn display(&self) -> Result<String> {
        self.display_in(self.preference)
    }

    pub fn view(&self, unit: Unit) -> Result<BalanceView> {
        let amount = self.convert(unit)?;
        Ok(BalanceView {
            unit,
            amount,
            display: format_amount_with(amount, unit, self.style),
            preferred: unit == self.preference,
        })
    }

    /// One view per recognized unit, base first
    pub fn all_views(&self) -> Result<Vec<BalanceView>> {
        Unit::ALL.into_iter().map(|u| self.view(u)).collect()
    }

    fn log(&self, event: LogEvent) {
        if let Some(logger) = &self.logger {
            let _ = logger.log(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;
    use crate::domain::result::Error;

    fn presenter(store: Arc<dyn KeyValueStore>) -> BalancePresenter {
        BalancePresenter::new(store, RateTable::default(), NumberStyle::Us, Amount::from(52000))
    }

    /// Store whose writes always fail
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.0.get(key)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::storage("store is read-only"))
        }
    }

    /// Store whose reads always fail
    struct UnreadableStore;

    impl KeyValueStore for UnreadableStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::storage("store unavailable"))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_empty_store_defaults_to_base() {
        let p = presenter(Arc::new(MemoryStore::new()));
        assert_eq!(p.preference(), Unit::Pkr);
        assert_eq!(p.display().unwrap(), "Rs 52,000");
    }

    #[test]
    fn test_invalid_stored_value_defaults_to_base() {
        let store = Arc::new(MemoryStore::with_entries([(CURRENCY_KEY, "XYZ")]));
        let p = presenter(store);
        assert_eq!(p.preference(), Unit::Pkr);
        assert_eq!(p.load_preference(), Unit::Pkr);
    }

    #[test]
    fn test_unreadable_store_defaults_to_base() {
        let p = presenter(Arc::new(UnreadableStore));
        assert_eq!(p.preference(), Unit::Pkr);
    }

    #[test]
    fn test_stored_preference_is_loaded() {
        let store = Arc::new(MemoryStore::with_entries([(CURRENCY_KEY, "usd")]));
        let p = presenter(store);
        assert_eq!(p.preference(), Unit::Usd);
        assert_eq!(p.display().unwrap(), "$173");
    }

    #[test]
    fn test_set_then_load_round_trips_every_unit() {
        let store = Arc::new(MemoryStore::new());
        let mut p = presenter(store.clone());
        for unit in Unit::ALL {
            p.set_preference(unit).unwrap();
            assert_eq!(p.preference(), unit);
            assert_eq!(p.load_preference(), unit);
            assert_eq!(store.get(CURRENCY_KEY).unwrap().as_deref(), Some(unit.code()));
        }
    }

    #[test]
    fn test_failed_write_keeps_previous_preference() {
        let store = Arc::new(ReadOnlyStore(MemoryStore::with_entries([(CURRENCY_KEY, "EUR")])));
        let mut p = presenter(store);
        assert_eq!(p.preference(), Unit::Eur);

        let result = p.set_preference(Unit::Usd);
        assert!(matches!(result, Err(Error::Storage(_))));
        assert_eq!(p.preference(), Unit::Eur);
        assert_eq!(p.display().unwrap(), "€160");
    }

    #[test]
    fn test_views() {
        let store = Arc::new(MemoryStore::with_entries([(CURRENCY_KEY, "EUR")]));
        let p = presenter(store);
        let views = p.all_views().unwrap();

        let displays: Vec<&str> = views.iter().map(|v| v.display.as_str()).collect();
        assert_eq!(displays, vec!["Rs 52,000", "$173", "€160"]);
        assert_eq!(views.iter().filter(|v| v.preferred).count(), 1);
        assert!(views[2].preferred);
    }

    #[test]
    fn test_base_conversion_is_exact() {
        let p = presenter(Arc::new(MemoryStore::new()));
        assert_eq!(p.convert(Unit::Pkr).unwrap(), p.balance());
    }
}
