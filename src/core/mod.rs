//! Core module containing the employee model, the record store and the query pipeline

pub mod date;
pub mod employee;
pub mod error;
pub mod field;
pub mod form;
pub mod query;
pub mod record_store;
pub mod reference;
pub mod service;
pub mod store;

pub use employee::{Employee, EmployeeField, NewEmployee};
pub use error::{ConfigError, HrnetError, PersistenceError, StorageError, ValidationError};
pub use field::{FieldKind, FieldValue};
pub use form::{EmployeeForm, FallbackPolicy};
pub use query::{PaginationMeta, QueryParams, QueryResult, SortDirection};
pub use record_store::{EMPLOYEES_KEY, EmployeeStore};
pub use reference::ReferenceEntry;
pub use service::{EmployeeService, LocalEmployeeService};
pub use store::KeyValueStore;
