//! Conversion between calendar-input dates and the storage date format
//!
//! Calendar inputs produce `yyyy-mm-dd`. Stored records keep `dd/mm/yyyy`,
//! which is only ever parsed back for ordering comparisons.

use chrono::{Datelike, NaiveDate};

/// Separator of the storage date format (`dd/mm/yyyy`)
pub const STORAGE_SEPARATOR: char = '/';

/// Separator of the calendar-input date format (`yyyy-mm-dd`)
pub const INPUT_SEPARATOR: char = '-';

/// Convert a `yyyy-mm-dd` input date to `dd/mm/yyyy`
///
/// This is pure string reassembly. Calendar correctness is not checked, so
/// `"2021-13-40"` becomes `"40/13/2021"`. Missing components are left empty.
pub fn to_storage_format(input: &str) -> String {
    let mut parts = input.splitn(3, INPUT_SEPARATOR);
    let year = parts.next().unwrap_or_default();
    let month = parts.next().unwrap_or_default();
    let day = parts.next().unwrap_or_default();
    format!("{day}{STORAGE_SEPARATOR}{month}{STORAGE_SEPARATOR}{year}")
}

/// Parse a `dd/mm/yyyy` storage date into a comparable date
///
/// Returns `None` for anything that is not three numeric components naming
/// a real calendar day: wrong separator, non-numeric parts, extra parts or
/// an impossible date such as `31/02/2020`.
pub fn parse_storage_format(text: &str) -> Option<NaiveDate> {
    let mut parts = text.trim().split(STORAGE_SEPARATOR);
    let day: u32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let year: i32 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Render a date in the storage format
pub fn format_storage_date(date: NaiveDate) -> String {
    format!(
        "{:02}{sep}{:02}{sep}{:04}",
        date.day(),
        date.month(),
        date.year(),
        sep = STORAGE_SEPARATOR
    )
}
