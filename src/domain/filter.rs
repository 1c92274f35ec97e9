//! Filter and pagination state of the grievance table.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::grievance::GrievanceStatus;
use crate::domain::types::{FilterValue, TypeConstraintError};

/// Page size used when the page-size control is missing or invalid.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Sort order requested from the list endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Ordering {
    /// `-created_at`: newest grievances first.
    NewestFirst,
}

impl Ordering {
    pub fn as_str(self) -> &'static str {
        match self {
            Ordering::NewestFirst => "-created_at",
        }
    }
}

/// Raw values of the filter controls, exactly as the operator left them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterInputs {
    pub status: String,
    pub category: String,
    pub assigned_officer: String,
    pub date_from: String,
    pub date_to: String,
    pub search: String,
}

/// Canonical filter and pagination state.
///
/// Blank inputs are stored as `None`, so a serialized query never carries
/// an empty parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    page: usize,
    page_size: usize,
    pub status: Option<GrievanceStatus>,
    pub category: Option<FilterValue>,
    pub assigned_officer: Option<FilterValue>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub search: Option<FilterValue>,
    pub ordering: Option<Ordering>,
}

impl FilterState {
    /// Creates an unfiltered state; zero page or page size are raised to the minimum.
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
            status: None,
            category: None,
            assigned_officer: None,
            date_from: None,
            date_to: None,
            search: None,
            ordering: None,
        }
    }

    /// Builds the listing state from the current control values.
    ///
    /// Unparseable dates are dropped rather than sent to the server.
    pub fn from_inputs(page: usize, page_size: usize, inputs: &FilterInputs) -> Self {
        let mut state = Self::new(page, page_size);
        state.status = GrievanceStatus::from_input(&inputs.status);
        state.category = FilterValue::new(inputs.category.as_str()).ok();
        state.assigned_officer = FilterValue::new(inputs.assigned_officer.as_str()).ok();
        state.date_from = parse_date_input(&inputs.date_from);
        state.date_to = parse_date_input(&inputs.date_to);
        state.search = FilterValue::new(inputs.search.as_str()).ok();
        state.ordered(Ordering::NewestFirst)
    }

    pub fn ordered(mut self, ordering: Ordering) -> Self {
        self.ordering = Some(ordering);
        self
    }

    pub fn status(mut self, status: GrievanceStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn search(mut self, term: &str) -> Self {
        self.search = FilterValue::new(term).ok();
        self
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE).ordered(Ordering::NewestFirst)
    }
}

/// Parses a page-size control value, accepting only positive integers.
pub fn parse_page_size(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|size| *size > 0)
}

/// Parses a date control value in `YYYY-MM-DD` form.
pub fn parse_date(value: &str) -> Result<NaiveDate, TypeConstraintError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| TypeConstraintError::InvalidDate(value.trim().to_string()))
}

fn parse_date_input(value: &str) -> Option<NaiveDate> {
    if value.trim().is_empty() {
        return None;
    }
    parse_date(value).ok()
}
