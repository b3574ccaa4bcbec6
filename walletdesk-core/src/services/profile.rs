//! Profile service - locally saved display name

use std::sync::Arc;

use crate::domain::result::Result;
use crate::ports::{KeyValueStore, USER_NAME_KEY};
use crate::services::logging::{LogEvent, LoggingService};

pub struct ProfileService {
    store: Arc<dyn KeyValueStore>,
    logger: Option<Arc<LoggingService>>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn KeyValueStore>, logger: Option<Arc<LoggingService>>) -> Self {
        Self { store, logger }
    }

    /// Saved name, empty when none was saved or the store can't be read
    pub fn get_name(&self) -> String {
        match self.store.get(USER_NAME_KEY) {
            Ok(name) => name.unwrap_or_default(),
            Err(e) => {
                self.log(LogEvent::new("name_read_failed").with_error(e.to_string()));
                String::new()
            }
        }
    }

    /// Save a name, trimmed. Returns the stored value.
    pub fn set_name(&self, name: &str) -> Result<String> {
        let name = name.trim();
        self.store.set(USER_NAME_KEY, name)?;
        // The name itself stays out of the log
        self.log(LogEvent::new(if name.is_empty() { "name_cleared" } else { "name_changed" }));
        Ok(name.to_string())
    }

    pub fn clear_name(&self) -> Result<()> {
        self.set_name("").map(|_| ())
    }

    /// Dashboard footer line
    pub fn footer(&self, balance_display: &str) -> String {
        footer_line(&self.get_name(), balance_display)
    }

    fn log(&self, event: LogEvent) {
        if let Some(logger) = &self.logger {
            let _ = logger.log(event);
        }
    }
}

/// "Demo app. No real trading. {name}, your balance is {balance}."
pub fn footer_line(name: &str, balance_display: &str) -> String {
    let greeting = if name.is_empty() {
        String::new()
    } else {
        format!("{}, ", name)
    };
    format!(
        "Demo app. No real trading. {}your balance is {}.",
        greeting, balance_display
    )
}
