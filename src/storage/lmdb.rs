//! LMDB key-value backend using heed (memory-mapped B-tree).
//!
//! LMDB is an embedded key-value store; no external server is required.
//! Each slot is one entry of the `slots` named database, keyed by the slot
//! name with the raw text as value. All operations are synchronous.
//!
//! # Feature flag
//!
//! Enable with `--features lmdb`. Requires the `heed` crate.

use crate::config::StorageConfig;
use crate::core::error::StorageError;
use crate::core::store::KeyValueStore;
use heed::types::Str;
use heed::{Database, Env, EnvOpenOptions};
use std::path::Path;
use std::sync::Arc;

/// Virtual address space reserved for the environment
const MAP_SIZE: usize = 64 * 1024 * 1024;

fn backend_error(e: heed::Error) -> StorageError {
    StorageError::backend(format!("lmdb: {}", e))
}

/// LMDB-backed implementation of `KeyValueStore`.
///
/// The `Env` is wrapped in an `Arc` for cheap cloning across threads.
///
/// # Example
///
/// ```rust,ignore
/// use hrnet::storage::LmdbKeyValueStore;
///
/// let backend = LmdbKeyValueStore::open("/tmp/hrnet-lmdb")?;
/// let store = EmployeeStore::new(backend);
/// ```
#[derive(Clone)]
pub struct LmdbKeyValueStore {
    env: Arc<Env>,
    db: Database<Str, Str>,
}

impl LmdbKeyValueStore {
    /// Open (or create) an LMDB environment at `path` and initialise the
    /// `slots` named database.
    ///
    /// The map size defaults to 64 MB. LMDB will not actually allocate that
    /// much; it is a virtual address space reservation.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        std::fs::create_dir_all(path)
            .map_err(|e| StorageError::backend(format!("create {}: {}", path.display(), e)))?;

        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(MAP_SIZE)
                .max_dbs(2)
                .open(path)
                .map_err(backend_error)?
        };

        let mut wtxn = env.write_txn().map_err(backend_error)?;
        let db: Database<Str, Str> = env
            .create_database(&mut wtxn, Some("slots"))
            .map_err(backend_error)?;
        wtxn.commit().map_err(backend_error)?;

        tracing::debug!(path = %path.display(), "Opened LMDB environment");

        Ok(Self {
            env: Arc::new(env),
            db,
        })
    }

    /// Open the environment at `lmdb_path` from the configuration
    pub fn from_config(config: &StorageConfig) -> Result<Self, StorageError> {
        let path = config
            .lmdb_path
            .as_deref()
            .ok_or_else(|| StorageError::backend("storage.lmdb_path is not set"))?;
        Self::open(path)
    }
}

impl KeyValueStore for LmdbKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let rtxn = self.env.read_txn().map_err(backend_error)?;
        let value = self.db.get(&rtxn, key).map_err(backend_error)?;
        Ok(value.map(str::to_owned))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut wtxn = self.env.write_txn().map_err(backend_error)?;
        self.db.put(&mut wtxn, key, value).map_err(backend_error)?;
        wtxn.commit().map_err(backend_error)?;
        Ok(())
    }
}
