use std::fmt::{Display, Formatter};

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, DepartmentId, GrievanceId, RemarkId, UserId};

/// Lifecycle state of a grievance.
///
/// Unknown values reported by the server are preserved in [`GrievanceStatus::Other`]
/// so they can still be displayed and round-tripped.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GrievanceStatus {
    New,
    InProgress,
    Resolved,
    Escalated,
    Other(String),
}

impl GrievanceStatus {
    /// Statuses an operator can pick from the row status control.
    pub const SELECTABLE: [GrievanceStatus; 4] = [
        GrievanceStatus::New,
        GrievanceStatus::InProgress,
        GrievanceStatus::Resolved,
        GrievanceStatus::Escalated,
    ];

    /// Wire value understood by the admin API.
    pub fn as_str(&self) -> &str {
        match self {
            GrievanceStatus::New => "new",
            GrievanceStatus::InProgress => "in_progress",
            GrievanceStatus::Resolved => "resolved",
            GrievanceStatus::Escalated => "escalated",
            GrievanceStatus::Other(value) => value,
        }
    }

    /// Human readable label used in badges and selects.
    pub fn label(&self) -> &str {
        match self {
            GrievanceStatus::New => "New",
            GrievanceStatus::InProgress => "In progress",
            GrievanceStatus::Resolved => "Resolved",
            GrievanceStatus::Escalated => "Escalated",
            GrievanceStatus::Other(value) => value,
        }
    }

    /// Badge variant class; `None` selects the neutral fallback badge.
    pub fn badge_class(&self) -> Option<&'static str> {
        match self {
            GrievanceStatus::New => Some("badge-new"),
            GrievanceStatus::InProgress => Some("badge-in"),
            GrievanceStatus::Resolved => Some("badge-resolved"),
            GrievanceStatus::Escalated => Some("badge-escalated"),
            GrievanceStatus::Other(_) => None,
        }
    }

    /// Parses a control value, treating blank input as "no status".
    pub fn from_input(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self::from(trimmed.to_string()))
        }
    }
}

impl From<String> for GrievanceStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "new" => GrievanceStatus::New,
            "in_progress" => GrievanceStatus::InProgress,
            "resolved" => GrievanceStatus::Resolved,
            "escalated" => GrievanceStatus::Escalated,
            _ => GrievanceStatus::Other(value),
        }
    }
}

impl From<GrievanceStatus> for String {
    fn from(value: GrievanceStatus) -> Self {
        match value {
            GrievanceStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl Default for GrievanceStatus {
    fn default() -> Self {
        GrievanceStatus::Other(String::new())
    }
}

impl Display for GrievanceStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compact user representation embedded in grievance payloads.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserRef {
    pub id: UserId,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DepartmentRef {
    pub id: DepartmentId,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CategoryRef {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub department: Option<DepartmentRef>,
}

/// A timestamped note attached to a grievance by an officer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Remark {
    #[serde(default)]
    pub id: Option<RemarkId>,
    #[serde(default)]
    pub officer: Option<UserRef>,
    #[serde(default)]
    pub remark: String,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
}

impl Remark {
    /// Name shown next to the remark, falling back to a generic label.
    pub fn officer_name(&self) -> &str {
        self.officer
            .as_ref()
            .map(|officer| officer.username.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("Officer")
    }

    pub fn text(&self) -> &str {
        &self.remark
    }
}

/// A citizen-submitted complaint as returned by the admin API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GrievanceRecord {
    pub id: GrievanceId,
    #[serde(default)]
    pub tracking_id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: GrievanceStatus,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub department: Option<DepartmentRef>,
    /// Submitting citizen.
    #[serde(default)]
    pub user: Option<UserRef>,
    #[serde(default)]
    pub assigned_officer: Option<UserRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
    /// Remark history in server order (oldest first); only present on detail payloads.
    #[serde(default)]
    pub remarks: Vec<Remark>,
}

impl GrievanceRecord {
    pub fn submitter_name(&self) -> Option<&str> {
        non_empty(self.user.as_ref().map(|user| user.username.as_str()))
    }

    pub fn category_name(&self) -> Option<&str> {
        non_empty(self.category.as_ref().map(|category| category.name.as_str()))
    }

    pub fn department_name(&self) -> Option<&str> {
        non_empty(self.department.as_ref().map(|department| department.name.as_str()))
    }

    pub fn officer_name(&self) -> Option<&str> {
        non_empty(self.assigned_officer.as_ref().map(|officer| officer.username.as_str()))
    }

    pub fn tracking_id(&self) -> Option<&str> {
        non_empty(self.tracking_id.as_deref())
    }

    /// The newest `limit` remarks, newest first.
    pub fn recent_remarks(&self, limit: usize) -> impl Iterator<Item = &Remark> {
        let skip = self.remarks.len().saturating_sub(limit);
        self.remarks.iter().skip(skip).rev()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record_with_remarks(texts: &[&str]) -> GrievanceRecord {
        serde_json::from_value(json!({
            "id": 1,
            "title": "Broken street light",
            "status": "new",
            "remarks": texts
                .iter()
                .map(|text| json!({ "remark": text }))
                .collect::<Vec<_>>(),
        }))
        .unwrap()
    }

    #[test]
    fn status_round_trips_known_and_unknown_values() {
        assert_eq!(GrievanceStatus::from("in_progress".to_string()), GrievanceStatus::InProgress);
        let other = GrievanceStatus::from("on_hold".to_string());
        assert_eq!(other, GrievanceStatus::Other("on_hold".to_string()));
        assert_eq!(String::from(other), "on_hold");
        assert_eq!(GrievanceStatus::Escalated.badge_class(), Some("badge-escalated"));
        assert_eq!(GrievanceStatus::Other("x".into()).badge_class(), None);
    }

    #[test]
    fn status_from_blank_input_is_none() {
        assert_eq!(GrievanceStatus::from_input("  "), None);
        assert_eq!(GrievanceStatus::from_input("resolved"), Some(GrievanceStatus::Resolved));
    }

    #[test]
    fn decodes_list_payload_with_nested_references() {
        let record: GrievanceRecord = serde_json::from_value(json!({
            "id": 9,
            "tracking_id": "GRV-2024-0009",
            "title": "Water leak",
            "description": "Pipe burst",
            "status": "escalated",
            "category": { "id": 2, "name": "Water", "department": null },
            "department": { "id": 3, "name": "Utilities", "code": "UTL" },
            "user": { "id": 5, "username": "citizen5" },
            "assigned_officer": null,
            "created_at": "2024-05-01T10:15:00+05:30",
            "updated_at": "2024-05-02T08:00:00Z"
        }))
        .unwrap();

        assert_eq!(record.id.get(), 9);
        assert_eq!(record.submitter_name(), Some("citizen5"));
        assert_eq!(record.category_name(), Some("Water"));
        assert_eq!(record.department_name(), Some("Utilities"));
        assert_eq!(record.officer_name(), None);
        assert!(record.remarks.is_empty());
        assert!(record.created_at.is_some());
    }

    #[test]
    fn recent_remarks_are_newest_first() {
        let record = record_with_remarks(&["a", "b"]);
        let texts: Vec<_> = record.recent_remarks(5).map(Remark::text).collect();
        assert_eq!(texts, vec!["b", "a"]);
    }

    #[test]
    fn recent_remarks_keep_only_the_last_entries() {
        let record = record_with_remarks(&["1", "2", "3", "4", "5", "6", "7"]);
        let texts: Vec<_> = record.recent_remarks(5).map(Remark::text).collect();
        assert_eq!(texts, vec!["7", "6", "5", "4", "3"]);
    }

    #[test]
    fn remark_without_officer_uses_generic_name() {
        let remark = Remark {
            id: None,
            officer: None,
            remark: "noted".into(),
            created_at: None,
        };
        assert_eq!(remark.officer_name(), "Officer");
    }
}
