//! # HRnet
//!
//! Employee records persisted in a single key-value slot, with a
//! search → sort → paginate pipeline for listing them.
//!
//! ## Features
//!
//! - **Record Store**: append-only collection with store-assigned integer ids
//! - **Query Pipeline**: case-insensitive search across every field, typed
//!   sorting (dates, numbers, text) and 1-indexed pagination
//! - **Pluggable Persistence**: any [`KeyValueStore`](core::store::KeyValueStore);
//!   in-memory by default, LMDB behind the `lmdb` feature
//! - **Creation Form**: required-field checks, reference-list fallbacks and
//!   date conversion before persisting
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hrnet::prelude::*;
//!
//! let store = EmployeeStore::new(InMemoryKeyValueStore::new());
//!
//! let mut form = EmployeeForm::new();
//! form.set(EmployeeField::FirstName, "Ana");
//! form.set(EmployeeField::DateOfBirth, "1990-01-05");
//! // ...
//! let employee = form.submit(&store, FallbackPolicy::FirstEntry)?;
//!
//! let page = store.search(
//!     &QueryParams::default()
//!         .with_search("ana")
//!         .with_sort("dateOfBirth", "desc"),
//! );
//! assert_eq!(page.items[0].id, employee.id);
//! ```

pub mod config;
pub mod core;
pub mod storage;

/// Install a `tracing` subscriber honouring `RUST_LOG`
///
/// Hosts that configure their own subscriber should not call this. Calling
/// it twice is harmless.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hrnet=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Model ===
    pub use crate::core::{
        employee::{Employee, EmployeeField, NewEmployee},
        field::{FieldKind, FieldValue},
        reference::{ReferenceEntry, departments, states},
    };

    // === Store ===
    pub use crate::core::{
        record_store::{EMPLOYEES_KEY, EmployeeStore},
        service::{EmployeeService, LocalEmployeeService},
        store::KeyValueStore,
    };

    // === Query ===
    pub use crate::core::query::{
        PaginationMeta, QueryParams, QueryResult, SortDirection, filter_records, paginate, query,
        sort_records,
    };

    // === Dates ===
    pub use crate::core::date::{format_storage_date, parse_storage_format, to_storage_format};

    // === Form ===
    pub use crate::core::form::{EmployeeForm, FallbackPolicy};

    // === Errors ===
    pub use crate::core::error::{
        ConfigError, HrnetError, PersistenceError, StorageError, ValidationError,
    };

    // === Storage ===
    pub use crate::storage::InMemoryKeyValueStore;
    #[cfg(feature = "lmdb")]
    pub use crate::storage::LmdbKeyValueStore;

    // === Config ===
    pub use crate::config::{FormConfig, HrnetConfig, QueryConfig, StorageConfig};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use serde::{Deserialize, Serialize};
}
