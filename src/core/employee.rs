//! Employee records and their field names

use crate::core::field::{FieldKind, FieldValue};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A stored employee record
///
/// The JSON shape is the persisted format: camelCase keys, dates as
/// `dd/mm/yyyy` text and an integer `id` assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub start_date: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub department: String,
    pub id: u64,
}

/// An employee that has not been stored yet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
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

impl NewEmployee {
    /// Attach a store-assigned identifier
    pub fn with_id(self, id: u64) -> Employee {
        Employee {
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_birth: self.date_of_birth,
            start_date: self.start_date,
            street: self.street,
            city: self.city,
            state: self.state,
            zip: self.zip,
            department: self.department,
            id,
        }
    }
}

impl Employee {
    /// Get the value of a field
    pub fn field_value(&self, field: EmployeeField) -> FieldValue {
        let text = match field {
            EmployeeField::Id => return FieldValue::Integer(self.id),
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
        FieldValue::String(text.clone())
    }

    /// Iterate over every field value in column order
    pub fn field_values(&self) -> impl Iterator<Item = (EmployeeField, FieldValue)> + '_ {
        EmployeeField::ALL
            .into_iter()
            .map(move |field| (field, self.field_value(field)))
    }
}

/// The fields of an employee record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmployeeField {
    FirstName,
    LastName,
    DateOfBirth,
    StartDate,
    Street,
    City,
    State,
    Zip,
    Department,
    Id,
}

impl EmployeeField {
    /// All fields, in the order they are persisted and displayed
    pub const ALL: [EmployeeField; 10] = [
        EmployeeField::FirstName,
        EmployeeField::LastName,
        EmployeeField::DateOfBirth,
        EmployeeField::StartDate,
        EmployeeField::Street,
        EmployeeField::City,
        EmployeeField::State,
        EmployeeField::Zip,
        EmployeeField::Department,
        EmployeeField::Id,
    ];

    /// The persisted key (camelCase)
    pub fn key(&self) -> &'static str {
        match self {
            EmployeeField::FirstName => "firstName",
            EmployeeField::LastName => "lastName",
            EmployeeField::DateOfBirth => "dateOfBirth",
            EmployeeField::StartDate => "startDate",
            EmployeeField::Street => "street",
            EmployeeField::City => "city",
            EmployeeField::State => "state",
            EmployeeField::Zip => "zip",
            EmployeeField::Department => "department",
            EmployeeField::Id => "id",
        }
    }

    /// Field-type registry: how values of this field are ordered
    pub fn kind(&self) -> FieldKind {
        match self {
            EmployeeField::DateOfBirth | EmployeeField::StartDate => FieldKind::Date,
            EmployeeField::Id | EmployeeField::Zip => FieldKind::Numeric,
            _ => FieldKind::Text,
        }
    }

    /// Look up a field by its persisted key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Column header derived from the key: `dateOfBirth` -> `Date Of Birth`
    pub fn label(&self) -> String {
        let mut label = String::new();
        for (i, c) in self.key().chars().enumerate() {
            if i == 0 {
                label.extend(c.to_uppercase());
            } else if c.is_uppercase() {
                label.push(' ');
                label.push(c);
            } else {
                label.push(c);
            }
        }
        label
    }

    /// Look up a field from its column header
    pub fn from_label(label: &str) -> Option<Self> {
        Self::from_key(&camel_case(label))
    }

    /// Whether the creation form asks for this field
    pub fn is_input(&self) -> bool {
        !matches!(self, EmployeeField::Id)
    }
}

impl fmt::Display for EmployeeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for EmployeeField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| format!("unknown employee field '{}'", s))
    }
}

/// `"Date Of Birth"` -> `"dateOfBirth"`
fn camel_case(label: &str) -> String {
    label
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if i == 0 {
                return lower;
            }
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}
