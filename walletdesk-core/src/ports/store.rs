//! Key-value store port - local preference storage

use crate::domain::result::Result;

/// Key holding the display name
pub const USER_NAME_KEY: &str = "user_name";

/// Key holding the preferred display currency code
pub const CURRENCY_KEY: &str = "currency_preference";

/// Local string key-value storage
///
/// Values are plain strings with no schema versioning. Writes are
/// synchronous and last-write-wins. Implementations report failures as
/// [`Error::Storage`](crate::domain::result::Error::Storage).
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a value
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
