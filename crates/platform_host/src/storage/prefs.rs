//! Lightweight key-value preference storage contracts and adapters.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures raised by [`KeyValueStore`] implementations and the typed helpers.
pub enum StorageError {
    /// The backing store is not reachable on this host (private mode, non-browser target).
    #[error("storage unavailable")]
    Unavailable,
    /// The backing store rejected a write or delete.
    #[error("storage write failed: {0}")]
    Write(String),
    /// A stored value could not be converted to or from JSON.
    #[error("storage value for `{key}` is not valid JSON: {message}")]
    Json {
        /// Key whose value failed to convert.
        key: String,
        /// Serializer message.
        message: String,
    },
}

/// Host service for small string values keyed by name (JSON text per key).
///
/// The contract is synchronous because the only production backend is `window.localStorage`.
pub trait KeyValueStore {
    /// Returns the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op store for unsupported targets.
pub struct NoopKeyValueStore;

impl KeyValueStore for NoopKeyValueStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory store keyed by string. Clones share the same map.
pub struct MemoryKeyValueStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns `true` when no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

/// Loads and deserializes a typed value through a [`KeyValueStore`].
///
/// # Errors
///
/// Returns an error when the store fails or the stored text is not valid JSON for `T`.
pub fn load_pref_with<S: KeyValueStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| StorageError::Json {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    Ok(Some(value))
}

/// Serializes and saves a typed value through a [`KeyValueStore`].
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub fn save_pref_with<S: KeyValueStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Json {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_store_set_get_remove() {
        let store = MemoryKeyValueStore::default();
        let store_obj: &dyn KeyValueStore = &store;

        store_obj.set("cameraPosition", "[1,2,3]").expect("set");
        assert_eq!(
            store_obj.get("cameraPosition").expect("get"),
            Some("[1,2,3]".to_string())
        );
        store_obj.remove("cameraPosition").expect("remove");
        assert_eq!(store_obj.get("cameraPosition").expect("get"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn memory_store_clones_share_state() {
        let store = MemoryKeyValueStore::default();
        let clone = store.clone();
        clone.set("k", "1").expect("set");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn typed_helpers_convert_json() {
        let store = MemoryKeyValueStore::default();
        save_pref_with(&store, "position", &vec![0.5_f64, 1.0, -2.0]).expect("save");

        let loaded: Option<Vec<f64>> = load_pref_with(&store, "position").expect("load");
        assert_eq!(loaded, Some(vec![0.5, 1.0, -2.0]));
    }

    #[test]
    fn typed_load_reports_invalid_json_with_key() {
        let store = MemoryKeyValueStore::default();
        store.set("position", "not json").expect("set");

        let err = load_pref_with::<_, Vec<f64>>(&store, "position").expect_err("invalid json");
        assert!(matches!(err, StorageError::Json { ref key, .. } if key == "position"));
    }

    #[test]
    fn noop_store_is_empty_and_successful() {
        let store = NoopKeyValueStore;
        assert_eq!(store.get("k").expect("get"), None);
        store.set("k", "{}").expect("set");
        store.remove("k").expect("remove");
    }
}
