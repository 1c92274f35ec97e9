//! Auxiliary payloads used to populate the filter controls.

use serde::{Deserialize, Serialize};

use crate::domain::types::OfficerId;

/// One `<option>` of a filter select.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CategoryCount {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

/// Subset of `GET analytics/` consumed by the console.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AnalyticsResponse {
    #[serde(default)]
    pub by_category: Vec<CategoryCount>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct OfficerStatus {
    pub id: OfficerId,
    #[serde(default)]
    pub username: Option<String>,
}

/// Subset of `GET user-status/` consumed by the console.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UserStatusResponse {
    #[serde(default)]
    pub officers: Vec<OfficerStatus>,
}

impl AnalyticsResponse {
    /// Category options keyed by id, or by name when the id is missing.
    pub fn category_options(&self) -> Vec<FilterOption> {
        self.by_category
            .iter()
            .map(|category| FilterOption {
                value: category
                    .id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| category.name.clone()),
                label: category.name.clone(),
            })
            .collect()
    }
}

impl UserStatusResponse {
    pub fn officer_options(&self) -> Vec<FilterOption> {
        self.officers
            .iter()
            .map(|officer| FilterOption {
                value: officer.id.to_string(),
                label: officer
                    .username
                    .clone()
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| officer.id.to_string()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn category_options_fall_back_to_name() {
        let analytics: AnalyticsResponse = serde_json::from_value(json!({
            "total": 10,
            "by_category": [
                { "id": 3, "name": "Roads", "count": 4 },
                { "name": "Uncategorised", "count": 6 }
            ]
        }))
        .unwrap();

        assert_eq!(
            analytics.category_options(),
            vec![
                FilterOption { value: "3".into(), label: "Roads".into() },
                FilterOption { value: "Uncategorised".into(), label: "Uncategorised".into() },
            ]
        );
    }

    #[test]
    fn officer_options_fall_back_to_id() {
        let users: UserStatusResponse = serde_json::from_value(json!({
            "officers": [
                { "id": 4, "username": "asha" },
                { "id": 9, "username": "" }
            ]
        }))
        .unwrap();

        let labels: Vec<_> = users
            .officer_options()
            .into_iter()
            .map(|option| option.label)
            .collect();
        assert_eq!(labels, vec!["asha", "9"]);
    }
}
