//! Flat row shape written by the CSV export.

use serde::Serialize;

use crate::domain::grievance::GrievanceRecord;

/// Header line of the exported file, matching [`ExportRow`] field order.
pub const EXPORT_COLUMNS: [&str; 8] = [
    "id",
    "tracking_id",
    "title",
    "user",
    "category",
    "assigned_officer",
    "status",
    "created_at",
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub id: i64,
    pub tracking_id: String,
    pub title: String,
    pub user: String,
    pub category: String,
    pub assigned_officer: String,
    pub status: String,
    pub created_at: String,
}

impl From<&GrievanceRecord> for ExportRow {
    fn from(record: &GrievanceRecord) -> Self {
        Self {
            id: record.id.get(),
            tracking_id: record.tracking_id().unwrap_or_default().to_string(),
            title: record.title.clone(),
            user: record.submitter_name().unwrap_or_default().to_string(),
            category: record.category_name().unwrap_or_default().to_string(),
            assigned_officer: record.officer_name().unwrap_or_default().to_string(),
            status: record.status.as_str().to_string(),
            created_at: record
                .created_at
                .map(|created| created.to_rfc3339())
                .unwrap_or_default(),
        }
    }
}
