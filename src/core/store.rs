//! Key-value persistence primitive

use crate::core::error::StorageError;
use std::sync::Arc;

/// A store of text values addressed by key
///
/// This is the only persistence primitive the record store needs: reads
/// return the whole value of a slot and writes replace it. Implementations
/// are synchronous; reads and writes are not isolated from each other, so a
/// read-modify-write across two callers can lose an update.
pub trait KeyValueStore: Send + Sync {
    /// Read a slot, `None` when nothing has been written to it
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the content of a slot
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
