//! Payloads exchanged with the admin API.

use serde::{Deserialize, Serialize};

use crate::domain::grievance::GrievanceStatus;
use crate::domain::types::OfficerId;

/// One page of list results.
///
/// The list endpoint may answer with a bare array or with a
/// `{ "results": [...], "count": N }` envelope; both decode into `Page`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "ListPayload<T>")]
pub struct Page<T> {
    /// Records in server order.
    pub results: Vec<T>,
    /// Total matching records, when the server reported it.
    pub count: Option<u64>,
}

impl<T> Page<T> {
    pub fn new(results: Vec<T>, count: Option<u64>) -> Self {
        Self { results, count }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Declared count, or the number of rows on this page when absent.
    pub fn total(&self) -> u64 {
        self.count.unwrap_or(self.results.len() as u64)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListPayload<T> {
    Bare(Vec<T>),
    Envelope {
        #[serde(default = "Vec::new")]
        results: Vec<T>,
        #[serde(default)]
        count: Option<u64>,
    },
}

impl<T> From<ListPayload<T>> for Page<T> {
    fn from(payload: ListPayload<T>) -> Self {
        match payload {
            ListPayload::Envelope { results, count } => Page { results, count },
            ListPayload::Bare(results) => Page {
                results,
                count: None,
            },
        }
    }
}

/// Partial update body for `PATCH grievances/{id}/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatusUpdate {
    pub status: GrievanceStatus,
}

/// Body for `POST grievances/{id}/assign/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AssignOfficer {
    pub assigned_officer: OfficerId,
}

/// Body for `POST grievances/{id}/remarks/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewRemark {
    pub remark: String,
}
