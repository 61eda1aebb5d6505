//! In-memory implementation of KeyValueStore for testing and development

use crate::config::StorageConfig;
use crate::core::error::StorageError;
use crate::core::store::KeyValueStore;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory key-value store
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
/// Clones share the same slots, the way two browser tabs share one origin's
/// storage.
///
/// An optional quota caps the total size of keys and values in bytes, so
/// quota-exceeded failures can be reproduced.
#[derive(Clone, Debug)]
pub struct InMemoryKeyValueStore {
    slots: Arc<RwLock<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl InMemoryKeyValueStore {
    /// Create a new unbounded in-memory store
    pub fn new() -> Self {
        Self {
            slots: Arc::new(RwLock::new(HashMap::new())),
            quota: None,
        }
    }

    /// Create a new store holding at most `quota` bytes
    pub fn with_quota(quota: usize) -> Self {
        Self {
            quota: Some(quota),
            ..Self::new()
        }
    }

    /// Create a store honouring `quota_bytes` from the configuration
    pub fn from_config(config: &StorageConfig) -> Self {
        match config.quota_bytes {
            Some(quota) => Self::with_quota(quota),
            None => Self::new(),
        }
    }

    pub fn quota(&self) -> Option<usize> {
        self.quota
    }

    /// Total bytes currently held (keys plus values)
    pub fn used_bytes(&self) -> Result<usize, StorageError> {
        let slots = self.slots.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(slots.iter().map(|(k, v)| k.len() + v.len()).sum())
    }
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.read().map_err(|_| StorageError::LockPoisoned)?;

        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.write().map_err(|_| StorageError::LockPoisoned)?;

        if let Some(quota) = self.quota {
            let others: usize = slots
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let requested = others + key.len() + value.len();
            if requested > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    requested,
                    quota,
                });
            }
        }

        slots.insert(key.to_string(), value.to_string());

        Ok(())
    }
}
