//! Configuration model loaded from external sources.

use serde::Deserialize;
use validator::Validate;

use crate::domain::filter::{DEFAULT_PAGE_SIZE, FilterInputs};

#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(default)]
/// Settings shared by every console host.
pub struct ConsoleConfig {
    /// Root of the admin API, relative to `origin`.
    #[validate(length(min = 1))]
    pub api_base: String,
    /// Absolute origin for hosts that are not running inside the page (`https://admin.example.org`).
    pub origin: Option<String>,
    /// Page size used when the page-size control has no usable value.
    #[validate(range(min = 1))]
    pub default_page_size: usize,
    /// Quiet period before typed search text reloads the table.
    #[validate(range(min = 1))]
    pub search_debounce_ms: u64,
    #[validate(length(min = 1))]
    pub csrf_cookie: String,
    #[validate(length(min = 1))]
    pub csrf_header: String,
    #[validate(length(min = 1))]
    pub export_filename: String,
    /// Number of remarks shown in the detail drawer.
    pub remark_preview_limit: usize,
    /// Raw `Cookie` header for hosts without a browser cookie jar.
    pub cookies: Option<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base: "/adminpanel/api/".to_string(),
            origin: None,
            default_page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: 500,
            csrf_cookie: "csrftoken".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
            export_filename: "grievances.csv".to_string(),
            remark_preview_limit: 5,
            cookies: None,
        }
    }
}

/// Filter values preset for the command-line host.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FilterPreset {
    pub status: String,
    pub category: String,
    pub assigned_officer: String,
    pub date_from: String,
    pub date_to: String,
    pub search: String,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl From<&FilterPreset> for FilterInputs {
    fn from(preset: &FilterPreset) -> Self {
        FilterInputs {
            status: preset.status.clone(),
            category: preset.category.clone(),
            assigned_officer: preset.assigned_officer.clone(),
            date_from: preset.date_from.clone(),
            date_to: preset.date_to.clone(),
            search: preset.search.clone(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Full configuration of the `export_grievances` binary.
pub struct ExportConfig {
    #[serde(default)]
    #[validate(nested)]
    pub console: ConsoleConfig,
    #[serde(default)]
    pub filters: FilterPreset,
    /// Directory receiving downloaded files.
    #[serde(default = "default_output_dir")]
    #[validate(length(min = 1))]
    pub output_dir: String,
}

fn default_output_dir() -> String {
    ".".to_string()
}
