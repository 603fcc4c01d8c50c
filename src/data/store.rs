//! Persistent key-value store abstraction
//!
//! Bookings and the profile are mirrored into a string key-value store on
//! every mutation. The store is a trait so the SQLite backend can be swapped
//! for an in-memory one in tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::database::DatabaseError;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
    #[error("Failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Lock poisoned")]
    LockPoisoned,
}

/// Synchronous, durable string key-value storage
pub trait PersistentStore: Send + Sync {
    /// Read the serialized value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Store handle shared by the booking repository and the profile record
pub type SharedStore = Arc<dyn PersistentStore>;

/// Volatile store backed by a HashMap
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a new empty store in a shareable handle
    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }
}

impl PersistentStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::LockPoisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load a JSON value, falling back to `T::default()` when the key is
/// missing, unreadable or malformed.
pub fn load_json_or_default<T>(store: &dyn PersistentStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Malformed persisted value, using default");
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read persisted value, using default");
            T::default()
        }
    }
}

/// Serialize `value` as JSON and write it under `key`
pub fn save_json<T>(store: &dyn PersistentStore, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)?;
    tracing::debug!(key, bytes = raw.len(), "Persisted value");
    Ok(())
}
