//! The key-value port and the in-memory backend.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{de::DeserializeOwned, Serialize};

use crate::StoreError;

/// The durable key-value slot the storefront engines persist through.
///
/// Values are opaque strings; each slot is always read and written in full.
/// Implementations must tolerate unknown keys (`get` returns `None`,
/// `remove` is a no-op).
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the value under `key`. Unknown keys are not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Read and deserialize a JSON value stored under `key`.
///
/// Returns `None` if the key doesn't exist. A stored value that fails to
/// parse is reported as an error; callers with a restore-or-default contract
/// decide what to do with it.
pub fn get_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    match store.get(key)? {
        Some(raw) => {
            let value: T = serde_json::from_str(&raw)?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Serialize `value` as JSON and write it under `key`.
pub fn set_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// Process-local key-value store.
///
/// Backs the mock storefront and the test suites. The `Mutex` exists only so
/// the store can be shared behind an `Arc`; the storefront itself is
/// single-writer per slot.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Check if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}
