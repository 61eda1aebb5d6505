//! Query parameters and the filter → sort → paginate pipeline

use crate::core::date::parse_storage_format;
use crate::core::employee::{Employee, EmployeeField};
use crate::core::field::{FieldKind, FieldValue};
use chrono::NaiveDate;
use feruca::Collator;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Default number of items per page
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Query parameters for searching, sorting and paginating employees
///
/// All parameters have sensible defaults: no search, no sort, first page
/// of ten items.
///
/// # Example
/// ```rust,ignore
/// let params = QueryParams::default()
///     .with_search("an")
///     .with_sort("dateOfBirth", "desc")
///     .with_page(2);
/// let result = query(store.get_all(), &params);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryParams {
    /// Free-text filter, matched case-insensitively against every field
    pub search_query: String,

    /// Persisted key of the field to sort by (empty for insertion order)
    pub sort_field: String,

    /// `asc` or `desc`
    pub sort_direction: String,

    /// Page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub items_per_page: usize,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            sort_field: String::new(),
            sort_direction: String::new(),
            page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl QueryParams {
    pub fn with_search(mut self, search_query: impl Into<String>) -> Self {
        self.search_query = search_query.into();
        self
    }

    pub fn with_sort(mut self, field: impl Into<String>, direction: impl Into<String>) -> Self {
        self.sort_field = field.into();
        self.sort_direction = direction.into();
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Get items per page, ensuring minimum of 1
    pub fn items_per_page(&self) -> usize {
        self.items_per_page.max(1)
    }

    /// The field to sort by, if it names a known field
    pub fn sort_field(&self) -> Option<EmployeeField> {
        if self.sort_field.is_empty() {
            return None;
        }
        let field = EmployeeField::from_key(&self.sort_field);
        if field.is_none() {
            tracing::debug!(sort_field = %self.sort_field, "Ignoring unknown sort field");
        }
        field
    }

    pub fn sort_direction(&self) -> SortDirection {
        SortDirection::parse(&self.sort_direction)
    }
}

/// Sort direction
///
/// Anything other than `desc` sorts ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub current_page: usize,

    /// Number of items per page
    pub items_per_page: usize,

    /// Total number of items (after filters)
    pub total_items: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata from calculation
    pub fn new(page: usize, items_per_page: usize, total_items: usize) -> Self {
        let page = page.max(1);
        let items_per_page = items_per_page.max(1);
        let total_pages = total_items.div_ceil(items_per_page);

        Self {
            current_page: page,
            items_per_page,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

/// A filtered, sorted page of employees
///
/// Echoes back the search, sort field and direction that were actually
/// applied. An unknown sort field is reported as empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub items: Vec<Employee>,

    #[serde(flatten)]
    pub pagination: PaginationMeta,

    pub search_query: String,

    pub sort_field: String,

    pub sort_direction: SortDirection,
}

impl QueryResult {
    pub fn total_items(&self) -> usize {
        self.pagination.total_items
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page
    }
}

/// Run the full pipeline over a collection
pub fn query(records: Vec<Employee>, params: &QueryParams) -> QueryResult {
    let filtered = filter_records(records, &params.search_query);

    let sort_field = params.sort_field();
    let direction = params.sort_direction();
    let sorted = match sort_field {
        Some(field) => sort_records(filtered, field, direction),
        None => filtered,
    };

    let (items, pagination) = paginate(sorted, params.page(), params.items_per_page());

    tracing::debug!(
        search = %params.search_query,
        sort_field = sort_field.map(|f| f.key()).unwrap_or_default(),
        direction = %direction,
        total = pagination.total_items,
        page = pagination.current_page,
        "Employee query"
    );

    QueryResult {
        items,
        pagination,
        search_query: params.search_query.clone(),
        sort_field: sort_field.map(|f| f.key().to_string()).unwrap_or_default(),
        sort_direction: direction,
    }
}

/// Keep records where any field contains `search_query`, ignoring case
///
/// An empty query keeps everything.
pub fn filter_records(records: Vec<Employee>, search_query: &str) -> Vec<Employee> {
    if search_query.is_empty() {
        return records;
    }
    let needle = search_query.to_lowercase();
    records
        .into_iter()
        .filter(|record| {
            record
                .field_values()
                .any(|(_, value)| value.contains_lowercase(&needle))
        })
        .collect()
}

/// Stable sort by one field, using the field's registered kind
///
/// Text is compared case-insensitively with the Unicode collation
/// algorithm (root locale), so accented letters sort next to their base
/// letter and punctuation only breaks ties.
pub fn sort_records(
    records: Vec<Employee>,
    field: EmployeeField,
    direction: SortDirection,
) -> Vec<Employee> {
    let kind = field.kind();
    let mut keyed: Vec<(SortKey, Employee)> = records
        .into_iter()
        .map(|record| (SortKey::new(kind, record.field_value(field)), record))
        .collect();

    let mut collator = Collator::default();
    keyed.sort_by(|(a, _), (b, _)| a.compare(b, direction, &mut collator));

    keyed.into_iter().map(|(_, record)| record).collect()
}

/// Slice out one 1-indexed page
///
/// A page past the end yields no items but still reports the totals.
pub fn paginate<T>(items: Vec<T>, page: usize, items_per_page: usize) -> (Vec<T>, PaginationMeta) {
    let meta = PaginationMeta::new(page, items_per_page, items.len());
    let start = (meta.current_page - 1).saturating_mul(meta.items_per_page);
    let page_items = items
        .into_iter()
        .skip(start)
        .take(meta.items_per_page)
        .collect();
    (page_items, meta)
}

/// Comparable form of a field value, computed once per record
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    /// `None` when the stored text is not a valid date
    Date(Option<NaiveDate>),
    Number(f64),
    Text(String),
}

impl SortKey {
    fn new(kind: FieldKind, value: FieldValue) -> Self {
        match kind {
            FieldKind::Date => SortKey::Date(value.as_string().and_then(parse_storage_format)),
            FieldKind::Numeric => match value.as_number() {
                Some(n) => SortKey::Number(n),
                None => SortKey::Text(value.to_string().to_lowercase()),
            },
            FieldKind::Text => SortKey::Text(value.to_string().to_lowercase()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Date(_) => 0,
            SortKey::Number(_) => 1,
            SortKey::Text(_) => 2,
        }
    }

    fn compare(
        &self,
        other: &Self,
        direction: SortDirection,
        collator: &mut Collator,
    ) -> Ordering {
        match (self, other) {
            // Unparseable dates stay last whatever the direction
            (SortKey::Date(a), SortKey::Date(b)) => match (a, b) {
                (Some(a), Some(b)) => direction.apply(a.cmp(b)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            (SortKey::Number(a), SortKey::Number(b)) => direction.apply(a.total_cmp(b)),
            (SortKey::Text(a), SortKey::Text(b)) => {
                direction.apply(collator.collate(a.as_str(), b.as_str()))
            }
            _ => direction.apply(self.rank().cmp(&other.rank())),
        }
    }
}
