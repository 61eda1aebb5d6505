//! Employee creation form
//!
//! Holds the raw values a user typed, checks that required fields are
//! present and hands a [`NewEmployee`] to the record store. The form is
//! cleared only once the record has actually been persisted.

use crate::config::FormConfig;
use crate::core::date::to_storage_format;
use crate::core::employee::{Employee, EmployeeField, NewEmployee};
use crate::core::error::{HrnetError, ValidationError};
use crate::core::record_store::EmployeeStore;
use crate::core::reference::{self, ReferenceEntry};
use crate::core::store::KeyValueStore;
use serde::{Deserialize, Serialize};

/// What to do with a blank state or department
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Use the first entry of the reference list
    #[default]
    FirstEntry,
    /// Every field must be filled in
    RequireAll,
}

impl FallbackPolicy {
    fn is_required(&self, field: EmployeeField) -> bool {
        match self {
            FallbackPolicy::FirstEntry => {
                !matches!(field, EmployeeField::State | EmployeeField::Department)
            }
            FallbackPolicy::RequireAll => true,
        }
    }
}

/// Raw creation-form state
///
/// Dates are kept in the calendar-input format `yyyy-mm-dd`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub start_date: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub department: String,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update one input, as a change handler would
    ///
    /// The identifier is not an input and is ignored.
    pub fn set(&mut self, field: EmployeeField, value: impl Into<String>) {
        if let Some(slot) = self.slot_mut(field) {
            *slot = value.into();
        }
    }

    pub fn get(&self, field: EmployeeField) -> Option<&str> {
        let value = match field {
            EmployeeField::Id => return None,
            EmployeeField::FirstName => &self.first_name,
            EmployeeField::LastName => &self.last_name,
            EmployeeField::DateOfBirth => &self.date_of_birth,
            EmployeeField::StartDate => &self.start_date,
            EmployeeField::Street => &self.street,
            EmployeeField::City => &self.city,
            EmployeeField::State => &self.state,
            EmployeeField::Zip => &self.zip,
            EmployeeField::Department => &self.department,
        };
        Some(value)
    }

    fn slot_mut(&mut self, field: EmployeeField) -> Option<&mut String> {
        let slot = match field {
            EmployeeField::Id => return None,
            EmployeeField::FirstName => &mut self.first_name,
            EmployeeField::LastName => &mut self.last_name,
            EmployeeField::DateOfBirth => &mut self.date_of_birth,
            EmployeeField::StartDate => &mut self.start_date,
            EmployeeField::Street => &mut self.street,
            EmployeeField::City => &mut self.city,
            EmployeeField::State => &mut self.state,
            EmployeeField::Zip => &mut self.zip,
            EmployeeField::Department => &mut self.department,
        };
        Some(slot)
    }

    /// Required fields that are still blank
    pub fn missing_fields(&self, policy: FallbackPolicy) -> Vec<EmployeeField> {
        EmployeeField::ALL
            .into_iter()
            .filter(|field| field.is_input() && policy.is_required(*field))
            .filter(|field| self.get(*field).is_none_or(|v| v.trim().is_empty()))
            .collect()
    }

    /// Whether the save button should be enabled
    pub fn is_submittable(&self, policy: FallbackPolicy) -> bool {
        self.missing_fields(policy).is_empty()
    }

    /// Build the record to persist
    ///
    /// Reports every problem at once. Dates are converted to `dd/mm/yyyy`;
    /// blank state and department fall back to the first reference entry
    /// under [`FallbackPolicy::FirstEntry`].
    pub fn to_new_employee(&self, policy: FallbackPolicy) -> Result<NewEmployee, ValidationError> {
        let mut errors: Vec<ValidationError> = self
            .missing_fields(policy)
            .into_iter()
            .map(|field| ValidationError::MissingField {
                field: field.key().to_string(),
            })
            .collect();

        let state = resolve(&self.state, reference::states(), reference::find_state);
        let department = resolve(
            &self.department,
            reference::departments(),
            reference::find_department,
        );
        if state.is_none() && !self.state.trim().is_empty() {
            errors.push(ValidationError::UnknownState {
                code: self.state.clone(),
            });
        }
        if department.is_none() && !self.department.trim().is_empty() {
            errors.push(ValidationError::UnknownDepartment {
                code: self.department.clone(),
            });
        }

        if let Some(error) = ValidationError::collect(errors) {
            return Err(error);
        }

        Ok(NewEmployee {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_of_birth: to_storage_format(&self.date_of_birth),
            start_date: to_storage_format(&self.start_date),
            street: self.street.clone(),
            city: self.city.clone(),
            state: state.map(|s| s.code.to_string()).unwrap_or_default(),
            zip: self.zip.clone(),
            department: department.map(|d| d.code.to_string()).unwrap_or_default(),
        })
    }

    /// Persist the form through `store`
    ///
    /// On success the form is cleared and the stored record returned. On
    /// failure the form keeps its values so the user can retry.
    pub fn submit<S: KeyValueStore>(
        &mut self,
        store: &EmployeeStore<S>,
        policy: FallbackPolicy,
    ) -> Result<Employee, HrnetError> {
        let new_employee = self.to_new_employee(policy)?;

        match store.append(new_employee) {
            Ok(employee) => {
                self.reset();
                Ok(employee)
            }
            Err(e) => {
                tracing::error!(error = %e, code = e.error_code(), "Failed to save employee");
                Err(e.into())
            }
        }
    }

    /// Persist the form using the fallback policy from `config`
    pub fn submit_with_config<S: KeyValueStore>(
        &mut self,
        store: &EmployeeStore<S>,
        config: &FormConfig,
    ) -> Result<Employee, HrnetError> {
        self.submit(store, config.fallback)
    }

    /// Clear every input
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A blank value takes the first entry, anything else must be a known code
fn resolve(
    value: &str,
    entries: &'static [ReferenceEntry],
    find: fn(&str) -> Option<&'static ReferenceEntry>,
) -> Option<&'static ReferenceEntry> {
    let value = value.trim();
    if value.is_empty() {
        entries.first()
    } else {
        find(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryKeyValueStore;

    fn filled() -> EmployeeForm {
        EmployeeForm {
            first_name: "Ana".into(),
            last_name: "Lopez".into(),
            date_of_birth: "1990-01-05".into(),
            start_date: "2020-06-01".into(),
            street: "1 Main St".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            zip: "62701".into(),
            department: "Engineering".into(),
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut form = EmployeeForm::new();
        form.set(EmployeeField::City, "Boston");
        form.set(EmployeeField::Id, "42");
        assert_eq!(form.get(EmployeeField::City), Some("Boston"));
        assert_eq!(form.get(EmployeeField::Id), None);
    }

    #[test]
    fn test_converts_dates() {
        let employee = filled().to_new_employee(FallbackPolicy::RequireAll).unwrap();
        assert_eq!(employee.date_of_birth, "05/01/1990");
        assert_eq!(employee.start_date, "01/06/2020");
        assert_eq!(employee.state, "IL");
        assert_eq!(employee.department, "Engineering");
    }

    #[test]
    fn test_first_entry_fallback() {
        let mut form = filled();
        form.state.clear();
        form.department.clear();
        assert!(form.is_submittable(FallbackPolicy::FirstEntry));

        let employee = form.to_new_employee(FallbackPolicy::FirstEntry).unwrap();
        assert_eq!(employee.state, "AL");
        assert_eq!(employee.department, "Sales");
    }

    #[test]
    fn test_require_all_rejects_blank_state() {
        let mut form = filled();
        form.state.clear();
        assert!(!form.is_submittable(FallbackPolicy::RequireAll));

        let err = form.to_new_employee(FallbackPolicy::RequireAll).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                field: "state".to_string()
            }
        );
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let form = EmployeeForm::new();
        let missing = form.missing_fields(FallbackPolicy::FirstEntry);
        assert_eq!(missing.len(), 7);
        assert!(!missing.contains(&EmployeeField::State));

        let err = form.to_new_employee(FallbackPolicy::FirstEntry).unwrap_err();
        assert_eq!(err.fields().len(), 7);
    }

    #[test]
    fn test_whitespace_counts_as_blank() {
        let mut form = filled();
        form.city = "   ".into();
        assert_eq!(
            form.missing_fields(FallbackPolicy::FirstEntry),
            vec![EmployeeField::City]
        );
    }

    #[test]
    fn test_unknown_codes() {
        let mut form = filled();
        form.state = "ZZ".into();
        form.department = "Finance".into();
        let err = form.to_new_employee(FallbackPolicy::FirstEntry).unwrap_err();
        assert_eq!(err.fields(), vec!["state", "department"]);
    }

    #[test]
    fn test_submit_success_resets_form() {
        let store = EmployeeStore::new(InMemoryKeyValueStore::new());
        let mut form = filled();

        let employee = form.submit(&store, FallbackPolicy::FirstEntry).unwrap();
        assert_eq!(employee.id, 1);
        assert_eq!(form, EmployeeForm::default());
        assert_eq!(store.get_all(), vec![employee]);
    }

    #[test]
    fn test_submit_failure_keeps_form() {
        let store = EmployeeStore::new(InMemoryKeyValueStore::with_quota(16));
        let mut form = filled();

        let err = form.submit(&store, FallbackPolicy::FirstEntry).unwrap_err();
        assert!(err.is_persistence_failure());
        assert_eq!(form, filled());
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn test_submit_with_config_applies_fallback() {
        let store = EmployeeStore::new(InMemoryKeyValueStore::new());
        let mut form = filled();
        form.department.clear();

        let strict = FormConfig {
            fallback: FallbackPolicy::RequireAll,
        };
        let err = form.submit_with_config(&store, &strict).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
        assert_eq!(form.city, "Springfield");

        let employee = form
            .submit_with_config(&store, &FormConfig::default())
            .unwrap();
        assert_eq!(employee.department, "Sales");
        assert_eq!(form, EmployeeForm::default());
    }

    #[test]
    fn test_submit_invalid_does_not_touch_store() {
        let store = EmployeeStore::new(InMemoryKeyValueStore::new());
        let mut form = filled();
        form.first_name.clear();

        let err = form.submit(&store, FallbackPolicy::FirstEntry).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
        assert!(store.backend().get("employees").unwrap().is_none());
    }
}
