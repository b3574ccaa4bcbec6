//! JSON file key-value store
//!
//! Persists a flat `{ "key": "value" }` object:
//! ```json
//! {
//!   "currency_preference": "USD",
//!   "user_name": "Ayesha"
//! }
//! ```

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::result::{Error, Result};
use crate::ports::KeyValueStore;

/// File name used inside the data directory
pub const STORAGE_FILE: &str = "storage.json";

/// Store backed by a JSON file
///
/// Every write rewrites the whole file through a temp file in the same
/// directory, so a crash never leaves a half-written file behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<data_dir>/storage.json`
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(STORAGE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File contents, `None` when the file doesn't exist yet
    fn read_raw(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(&self.path).map(Some).map_err(|e| {
            Error::storage(format!("Failed to read {}: {}", self.path.display(), e))
        })
    }

    fn parse(content: &str) -> serde_json::Result<BTreeMap<String, String>> {
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(content)
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        let Some(content) = self.read_raw()? else {
            return Ok(BTreeMap::new());
        };
        Self::parse(&content).map_err(|e| {
            Error::storage(format!("Corrupt store {}: {}", self.path.display(), e))
        })
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let content = serde_json::to_string_pretty(values)?;
        let mut tmp = NamedTempFile::new_in(dir)
            .map_err(|e| Error::storage(format!("Failed to create temp file: {}", e)))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| Error::storage(format!("Failed to write store: {}", e)))?;
        tmp.persist(&self.path).map_err(|e| {
            Error::storage(format!("Failed to replace {}: {}", self.path.display(), e))
        })?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // Corrupt JSON is replaced so later writes aren't blocked. Read
        // failures propagate, since the other keys may still be intact.
        let mut values = match self.read_raw()? {
            Some(content) => Self::parse(&content).unwrap_or_default(),
            None => BTreeMap::new(),
        };
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }
}
