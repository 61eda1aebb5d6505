//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::core::form::FallbackPolicy;
use crate::core::query::DEFAULT_ITEMS_PER_PAGE;
use crate::core::record_store::EMPLOYEES_KEY;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Persistence settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Name of the slot holding the employee collection
    pub key: String,

    /// Byte quota for the in-memory store (unbounded when absent)
    pub quota_bytes: Option<usize>,

    /// Directory of the LMDB environment, when that backend is used
    pub lmdb_path: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: EMPLOYEES_KEY.to_string(),
            quota_bytes: None,
            lmdb_path: None,
        }
    }
}

/// Listing settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub default_items_per_page: usize,

    pub max_items_per_page: usize,

    /// Choices offered by the page-size selector
    ///
    /// Hosts render these; other sizes are still served, within the maximum.
    pub page_size_options: Vec<usize>,
}

impl QueryConfig {
    /// The page size actually used for a requested size
    ///
    /// Zero takes the default and anything above the maximum is capped.
    pub fn items_per_page(&self, requested: usize) -> usize {
        let size = if requested == 0 {
            self.default_items_per_page
        } else {
            requested
        };
        let size = size.clamp(1, self.max_items_per_page.max(1));
        if !self.page_size_options.contains(&size) {
            tracing::debug!(
                requested,
                items_per_page = size,
                "Page size is not one of the offered options"
            );
        }
        size
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_items_per_page: DEFAULT_ITEMS_PER_PAGE,
            max_items_per_page: 100,
            page_size_options: vec![10, 25, 50, 100],
        }
    }
}

/// Creation form settings
///
/// Consumed by [`EmployeeForm::submit_with_config`](crate::core::form::EmployeeForm::submit_with_config).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub fallback: FallbackPolicy,
}

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HrnetConfig {
    pub storage: StorageConfig,
    pub query: QueryConfig,
    pub form: FormConfig,
}

impl HrnetConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that values are consistent with each other
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.key.is_empty() {
            return Err(invalid("storage.key", "must not be empty"));
        }
        let query = &self.query;
        if query.max_items_per_page == 0 {
            return Err(invalid("query.max_items_per_page", "must be at least 1"));
        }
        if query.default_items_per_page == 0 {
            return Err(invalid("query.default_items_per_page", "must be at least 1"));
        }
        if query.default_items_per_page > query.max_items_per_page {
            return Err(invalid(
                "query.default_items_per_page",
                format!(
                    "{} exceeds max_items_per_page ({})",
                    query.default_items_per_page, query.max_items_per_page
                ),
            ));
        }
        if query.page_size_options.is_empty() {
            return Err(invalid("query.page_size_options", "must not be empty"));
        }
        if let Some(size) = query
            .page_size_options
            .iter()
            .find(|size| **size == 0 || **size > query.max_items_per_page)
        {
            return Err(invalid(
                "query.page_size_options",
                format!("{} is outside 1..={}", size, query.max_items_per_page),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.into(),
    }
}
