//! Key-value storage backends for the top sites list

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::StorageError;

/// Synchronous string key-value slot, shaped after `window.localStorage`
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage` for the current origin
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    pub fn new() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let inner = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;
        Ok(LocalStorage { inner })
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// In-memory storage, used off-browser and in tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.items.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    /// Make every following write fail, the way a full quota does
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Write("QuotaExceededError".to_string()));
        }
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_new() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("topSites"), Ok(None));
    }

    #[test]
    fn test_memory_storage_set_get() {
        let storage = MemoryStorage::new();

        storage.set("topSites", "[]").unwrap();

        assert_eq!(storage.get("topSites"), Ok(Some("[]".to_string())));
        assert_eq!(storage.get("other"), Ok(None));
    }

    #[test]
    fn test_memory_storage_overwrite() {
        let storage = MemoryStorage::with_item("topSites", "[\"https://a.com\"]");

        storage.set("topSites", "[]").unwrap();

        assert_eq!(storage.raw("topSites"), Some("[]".to_string()));
    }

    #[test]
    fn test_memory_storage_failing_writes() {
        let storage = MemoryStorage::with_item("topSites", "[]");
        storage.set_fail_writes(true);

        let result = storage.set("topSites", "[\"https://a.com\"]");

        assert!(matches!(result, Err(StorageError::Write(_))));
        assert_eq!(storage.raw("topSites"), Some("[]".to_string()));
    }
}
