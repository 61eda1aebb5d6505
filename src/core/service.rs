//! Async service facade over the employee store

use crate::core::employee::{Employee, NewEmployee};
use crate::core::query::{QueryParams, QueryResult};
use crate::core::record_store::EmployeeStore;
use crate::core::store::KeyValueStore;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Service trait for employee records
///
/// Implementations are free to run the synchronous store however they
/// like. The async surface is a convenience for hosts that already run an
/// executor; it adds no concurrency guarantees.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Persist a new employee and return it with its identifier
    async fn create(&self, employee: NewEmployee) -> Result<Employee>;

    /// List all employees in insertion order
    async fn list(&self) -> Result<Vec<Employee>>;

    /// Search, sort and paginate employees
    async fn search(&self, params: QueryParams) -> Result<QueryResult>;
}

/// [`EmployeeService`] backed by a local [`EmployeeStore`]
///
/// Store calls run on the tokio blocking pool since backends may touch
/// the disk.
pub struct LocalEmployeeService<S> {
    store: Arc<EmployeeStore<S>>,
}

impl<S> Clone for LocalEmployeeService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KeyValueStore + 'static> LocalEmployeeService<S> {
    pub fn new(store: EmployeeStore<S>) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &EmployeeStore<S> {
        &self.store
    }
}

#[async_trait]
impl<S: KeyValueStore + 'static> EmployeeService for LocalEmployeeService<S> {
    async fn create(&self, employee: NewEmployee) -> Result<Employee> {
        let store = Arc::clone(&self.store);

        let employee = tokio::task::spawn_blocking(move || store.append(employee)).await??;
        Ok(employee)
    }

    async fn list(&self) -> Result<Vec<Employee>> {
        let store = Arc::clone(&self.store);

        Ok(tokio::task::spawn_blocking(move || store.get_all()).await?)
    }

    async fn search(&self, params: QueryParams) -> Result<QueryResult> {
        let store = Arc::clone(&self.store);

        Ok(tokio::task::spawn_blocking(move || store.search(&params)).await?)
    }
}
