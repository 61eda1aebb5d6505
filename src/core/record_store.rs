//! Employee record store over a single key-value slot
//!
//! The whole collection lives as one JSON array under one key. Appending
//! reads the array, assigns the next identifier from the last record and
//! writes the array back. There is no per-record addressing and no
//! isolation between concurrent appends.

use crate::config::{HrnetConfig, QueryConfig};
use crate::core::employee::{Employee, NewEmployee};
use crate::core::error::PersistenceError;
use crate::core::query::{self, QueryParams, QueryResult};
use crate::core::store::KeyValueStore;

/// Slot holding the employee collection
pub const EMPLOYEES_KEY: &str = "employees";

/// Append/read layer over the persisted employee collection
#[derive(Debug, Clone)]
pub struct EmployeeStore<S> {
    backend: S,
    key: String,
    query_config: QueryConfig,
}

impl<S: KeyValueStore> EmployeeStore<S> {
    /// Create a store using the `employees` slot of `backend`
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            key: EMPLOYEES_KEY.to_string(),
            query_config: QueryConfig::default(),
        }
    }

    /// Create a store using the slot and listing limits from `config`
    pub fn with_config(backend: S, config: &HrnetConfig) -> Self {
        Self {
            backend,
            key: config.storage.key.clone(),
            query_config: config.query.clone(),
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn query_config(&self) -> &QueryConfig {
        &self.query_config
    }

    /// Append a record and return it with its assigned identifier
    ///
    /// The identifier is one more than the identifier of the last stored
    /// record, or 1 for an empty collection. Nothing is written when the
    /// stored collection cannot be read or decoded.
    pub fn append(&self, employee: NewEmployee) -> Result<Employee, PersistenceError> {
        let mut records = self.load()?;
        let next_id = records.last().map_or(0, |last| last.id) + 1;
        let employee = employee.with_id(next_id);
        records.push(employee.clone());

        let encoded = serde_json::to_string(&records)?;
        self.backend.set(&self.key, &encoded)?;

        tracing::info!(key = %self.key, id = next_id, total = records.len(), "Employee stored");
        Ok(employee)
    }

    /// Return the full collection in insertion order
    ///
    /// Absence is not an error. A collection that cannot be read or decoded
    /// is logged and reported as empty.
    pub fn get_all(&self) -> Vec<Employee> {
        match self.load() {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Treating unreadable employee collection as empty");
                Vec::new()
            }
        }
    }

    /// Load the collection and run the query pipeline over it
    ///
    /// A zero page size falls back to the configured default and larger
    /// sizes are capped at the configured maximum.
    pub fn search(&self, params: &QueryParams) -> QueryResult {
        let params = params
            .clone()
            .with_items_per_page(self.query_config.items_per_page(params.items_per_page));
        query::query(self.get_all(), &params)
    }

    fn load(&self) -> Result<Vec<Employee>, PersistenceError> {
        let Some(raw) = self.backend.get(&self.key)? else {
            tracing::debug!(key = %self.key, "No stored employees");
            return Ok(Vec::new());
        };

        // `null` is what an empty slot serializes to in some hosts
        let records: Option<Vec<Employee>> =
            serde_json::from_str(&raw).map_err(|e| PersistenceError::CorruptCollection {
                key: self.key.clone(),
                message: e.to_string(),
            })?;
        Ok(records.unwrap_or_default())
    }
}
