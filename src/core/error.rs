//! Typed error handling for the hrnet crate
//!
//! Errors are grouped by category so callers can match on what went wrong
//! instead of inspecting strings.
//!
//! # Error Categories
//!
//! - [`StorageError`]: a [`KeyValueStore`](crate::core::store::KeyValueStore)
//!   could not read or write a slot
//! - [`PersistenceError`]: appending an employee to the collection failed
//! - [`ValidationError`]: a creation form is incomplete or references an
//!   unknown code
//! - [`ConfigError`]: configuration could not be loaded or is inconsistent
//!
//! # Example
//!
//! ```rust,ignore
//! use hrnet::prelude::*;
//!
//! match store.append(new_employee) {
//!     Ok(employee) => println!("Created employee #{}", employee.id),
//!     Err(PersistenceError::Storage(StorageError::QuotaExceeded { .. })) => {
//!         eprintln!("Local storage is full");
//!     }
//!     Err(e) => eprintln!("Could not save employee: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for the hrnet crate
#[derive(Debug, Error)]
pub enum HrnetError {
    /// Persisting a record failed
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Input validation failed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl HrnetError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            HrnetError::Persistence(e) => e.error_code(),
            HrnetError::Validation(e) => e.error_code(),
            HrnetError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Whether the error came from the persistence layer
    pub fn is_persistence_failure(&self) -> bool {
        matches!(self, HrnetError::Persistence(_))
    }
}

impl From<StorageError> for HrnetError {
    fn from(err: StorageError) -> Self {
        HrnetError::Persistence(PersistenceError::Storage(err))
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised by key-value store backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// Writing the value would exceed the store's quota
    #[error("quota exceeded writing '{key}': {requested} bytes requested, quota is {quota} bytes")]
    QuotaExceeded {
        key: String,
        requested: usize,
        quota: usize,
    },

    /// The backend reported a failure
    #[error("storage backend error: {message}")]
    Backend { message: String },

    /// A lock guarding the store was poisoned by a panicking writer
    #[error("storage lock poisoned")]
    LockPoisoned,
}

impl StorageError {
    pub fn backend(message: impl Into<String>) -> Self {
        StorageError::Backend {
            message: message.into(),
        }
    }
}

// =============================================================================
// Persistence Errors
// =============================================================================

/// Failure to persist an employee record
///
/// Returned by [`EmployeeStore::append`](crate::core::record_store::EmployeeStore::append).
/// Callers must check for it before treating a creation as successful.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The underlying store refused the read or write
    #[error("failed to persist employees: {0}")]
    Storage(#[from] StorageError),

    /// The collection could not be encoded
    #[error("failed to serialize employees: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The stored collection is unreadable and would be overwritten
    #[error("stored collection '{key}' is corrupt: {message}")]
    CorruptCollection { key: String, message: String },
}

impl PersistenceError {
    pub fn error_code(&self) -> &'static str {
        match self {
            PersistenceError::Storage(StorageError::QuotaExceeded { .. }) => "QUOTA_EXCEEDED",
            PersistenceError::Storage(_) => "STORAGE_ERROR",
            PersistenceError::Serialization(_) => "SERIALIZATION_ERROR",
            PersistenceError::CorruptCollection { .. } => "CORRUPT_COLLECTION",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to creation-form validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is blank
    #[error("field '{field}' is required")]
    MissingField { field: String },

    /// The state code is not in the reference list
    #[error("unknown state code '{code}'")]
    UnknownState { code: String },

    /// The department code is not in the reference list
    #[error("unknown department '{code}'")]
    UnknownDepartment { code: String },

    /// Several fields failed at once
    #[error("{} field(s) failed validation", .0.len())]
    FieldErrors(Vec<ValidationError>),
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MissingField { .. } => "MISSING_FIELD",
            ValidationError::UnknownState { .. } => "UNKNOWN_STATE",
            ValidationError::UnknownDepartment { .. } => "UNKNOWN_DEPARTMENT",
            ValidationError::FieldErrors(_) => "VALIDATION_ERROR",
        }
    }

    /// Collapse a list of errors into a single one
    ///
    /// Returns `None` for an empty list and the error itself when there is
    /// exactly one.
    pub fn collect(mut errors: Vec<ValidationError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(ValidationError::FieldErrors(errors)),
        }
    }

    /// Names of the fields this error refers to
    pub fn fields(&self) -> Vec<&str> {
        match self {
            ValidationError::MissingField { field } => vec![field.as_str()],
            ValidationError::UnknownState { .. } => vec!["state"],
            ValidationError::UnknownDepartment { .. } => vec!["department"],
            ValidationError::FieldErrors(errors) => {
                errors.iter().flat_map(|e| e.fields()).collect()
            }
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid YAML for [`HrnetConfig`](crate::config::HrnetConfig)
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A value is out of range or inconsistent with another value
    #[error("invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}
