//! In-memory key-value store.

use std::collections::HashMap;
use std::io;

use super::{KeyValue, StoreError};

/// A [`KeyValue`] backend held entirely in memory.
///
/// Used for tests and ephemeral sessions. [`MemoryStore::poison`] makes all
/// subsequent writes fail, which stands in for quota-exceeded and similar
/// unrecoverable storage conditions; reads keep working so tests can assert
/// that the previously stored value survived the failed write.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    poisoned: bool,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with an I/O error.
    pub fn poison(&mut self) {
        self.poisoned = true;
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if self.poisoned {
            return Err(StoreError::Io(io::Error::other("store is poisoned")));
        }
        Ok(())
    }
}

impl KeyValue for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_writable()?;
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.check_writable()?;
        self.values.remove(key);
        Ok(())
    }
}
