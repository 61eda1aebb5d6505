//! Static reference lists offered by the creation form

use serde::Serialize;

/// One selectable option of a reference list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceEntry {
    /// Value stored on the employee record
    pub code: &'static str,
    /// Text shown to the user
    pub label: &'static str,
}

const fn entry(code: &'static str, label: &'static str) -> ReferenceEntry {
    ReferenceEntry { code, label }
}

static STATES: [ReferenceEntry; 59] = [
    entry("AL", "Alabama"),
    entry("AK", "Alaska"),
    entry("AS", "American Samoa"),
    entry("AZ", "Arizona"),
    entry("AR", "Arkansas"),
    entry("CA", "California"),
    entry("CO", "Colorado"),
    entry("CT", "Connecticut"),
    entry("DE", "Delaware"),
    entry("DC", "District Of Columbia"),
    entry("FM", "Federated States Of Micronesia"),
    entry("FL", "Florida"),
    entry("GA", "Georgia"),
    entry("GU", "Guam"),
    entry("HI", "Hawaii"),
    entry("ID", "Idaho"),
    entry("IL", "Illinois"),
    entry("IN", "Indiana"),
    entry("IA", "Iowa"),
    entry("KS", "Kansas"),
    entry("KY", "Kentucky"),
    entry("LA", "Louisiana"),
    entry("ME", "Maine"),
    entry("MH", "Marshall Islands"),
    entry("MD", "Maryland"),
    entry("MA", "Massachusetts"),
    entry("MI", "Michigan"),
    entry("MN", "Minnesota"),
    entry("MS", "Mississippi"),
    entry("MO", "Missouri"),
    entry("MT", "Montana"),
    entry("NE", "Nebraska"),
    entry("NV", "Nevada"),
    entry("NH", "New Hampshire"),
    entry("NJ", "New Jersey"),
    entry("NM", "New Mexico"),
    entry("NY", "New York"),
    entry("NC", "North Carolina"),
    entry("ND", "North Dakota"),
    entry("MP", "Northern Mariana Islands"),
    entry("OH", "Ohio"),
    entry("OK", "Oklahoma"),
    entry("OR", "Oregon"),
    entry("PW", "Palau"),
    entry("PA", "Pennsylvania"),
    entry("PR", "Puerto Rico"),
    entry("RI", "Rhode Island"),
    entry("SC", "South Carolina"),
    entry("SD", "South Dakota"),
    entry("TN", "Tennessee"),
    entry("TX", "Texas"),
    entry("UT", "Utah"),
    entry("VT", "Vermont"),
    entry("VI", "Virgin Islands"),
    entry("VA", "Virginia"),
    entry("WA", "Washington"),
    entry("WV", "West Virginia"),
    entry("WI", "Wisconsin"),
    entry("WY", "Wyoming"),
];

static DEPARTMENTS: [ReferenceEntry; 5] = [
    entry("Sales", "Sales"),
    entry("Marketing", "Marketing"),
    entry("Engineering", "Engineering"),
    entry("Human Resources", "Human Resources"),
    entry("Legal", "Legal"),
];

/// US states and territories, in display order
pub fn states() -> &'static [ReferenceEntry] {
    &STATES
}

/// Company departments, in display order
pub fn departments() -> &'static [ReferenceEntry] {
    &DEPARTMENTS
}

pub fn find_state(code: &str) -> Option<&'static ReferenceEntry> {
    STATES.iter().find(|state| state.code == code)
}

pub fn find_department(code: &str) -> Option<&'static ReferenceEntry> {
    DEPARTMENTS.iter().find(|department| department.code == code)
}
