//! In-memory store for tests and ephemeral runs.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{KvStore, StoreError};

/// In-memory implementation of [`KvStore`].
///
/// Keeps the JSON text per key rather than live values, so encoding
/// round-trips are exercised exactly as they are against [`super::FileStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let values = self.values.read().map_err(|_| StoreError::LockPoisoned)?;
        match values.get(key) {
            None => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|e| StoreError::Corrupted {
                    key: key.to_owned(),
                    reason: e.to_string(),
                }),
        }
    }

    fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let encoded =
            serde_json::to_string(value).map_err(|e| StoreError::Serialization(e.to_string()))?;
        let mut values = self.values.write().map_err(|_| StoreError::LockPoisoned)?;
        values.insert(key.to_owned(), encoded);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        let values = self.values.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(values.contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_reads_as_none() {
        let store = MemoryStore::new();
        let value: Option<u32> = store.get("missing").unwrap();
        assert_eq!(value, None);
        assert!(!store.exists("missing").unwrap());
    }

    #[test]
    fn values_round_trip() {
        let store = MemoryStore::new();
        store.put("answer", &41_u32).unwrap();
        store.put("answer", &42_u32).unwrap();
        assert_eq!(store.get::<u32>("answer").unwrap(), Some(42));
        assert!(store.exists("answer").unwrap());
    }

    #[test]
    fn undecodable_value_is_corrupted() {
        let store = MemoryStore::new();
        store.put("pair", &(1_u32, 2_u32)).unwrap();
        let result = store.get::<String>("pair");
        assert!(matches!(result, Err(StoreError::Corrupted { .. })));
    }
}
