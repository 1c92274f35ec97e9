//! HTML rendering of the grievance table and detail drawer.
//!
//! Templates are compiled into the binary and rendered with tera's HTML
//! autoescaping, so every record-derived string reaches the page escaped.
//! The only unescaped markup is the template text itself (badges, buttons).

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::grievance::{GrievanceRecord, GrievanceStatus, Remark};
use crate::domain::types::GrievanceId;
use crate::dto::api::Page;
use crate::pagination::PageInfo;

const SKELETON: &str = "table/skeleton.html";
const MESSAGE_ROW: &str = "table/message_row.html";
const ROWS: &str = "table/rows.html";
const DETAIL: &str = "detail/body.html";
const DETAIL_LOADING: &str = "detail/loading.html";
const DETAIL_ERROR: &str = "detail/error.html";

const SKELETON_ROWS: usize = 5;
const PREVIEW_CHARS: usize = 140;

pub const EMPTY_TABLE_MESSAGE: &str = "No grievances found.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load. Check console.";
pub const DETAIL_FAILED_MESSAGE: &str = "Failed to load details.";

pub type RenderResult<T> = Result<T, tera::Error>;

/// Interactive elements of one rendered row, all keyed by the grievance id:
/// the title link, the status select, and the Assign and Remark buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowBinding {
    pub grievance_id: GrievanceId,
}

/// Table body markup plus the rows the view must bind handlers to.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedTable {
    pub html: String,
    pub rows: Vec<RowBinding>,
    pub page_info: PageInfo,
}

/// Contents of the detail drawer. `title` and `subtitle` are plain text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub subtitle: String,
    pub body_html: String,
}

#[derive(Serialize)]
struct RowContext<'a> {
    id: i64,
    tracking_id: &'a str,
    title: &'a str,
    preview: String,
    submitter: &'a str,
    category: &'a str,
    officer: &'a str,
    status_label: &'a str,
    badge_class: Option<&'static str>,
    created_at: String,
}

#[derive(Serialize)]
struct StatusOption {
    value: String,
    label: String,
}

#[derive(Serialize)]
struct RemarkContext<'a> {
    officer: &'a str,
    created_at: String,
    text: &'a str,
}

pub struct Renderer {
    tera: Tera,
    remark_limit: usize,
}

impl Renderer {
    /// Compiles the embedded templates.
    pub fn new(remark_limit: usize) -> RenderResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (SKELETON, include_str!("templates/skeleton.html")),
            (MESSAGE_ROW, include_str!("templates/message_row.html")),
            (ROWS, include_str!("templates/rows.html")),
            (DETAIL, include_str!("templates/detail.html")),
            (DETAIL_LOADING, include_str!("templates/detail_loading.html")),
            (DETAIL_ERROR, include_str!("templates/detail_error.html")),
        ])?;
        Ok(Self { tera, remark_limit })
    }

    /// Placeholder rows shown while a page is loading.
    pub fn skeleton(&self) -> RenderResult<String> {
        let mut context = Context::new();
        context.insert("rows", &SKELETON_ROWS);
        self.tera.render(SKELETON, &context)
    }

    /// A single full-width informational row.
    pub fn message_row(&self, message: &str) -> RenderResult<String> {
        let mut context = Context::new();
        context.insert("message", message);
        self.tera.render(MESSAGE_ROW, &context)
    }

    /// Renders one page of grievances.
    ///
    /// An empty page yields one informational row and no bindings.
    pub fn table(
        &self,
        page: &Page<GrievanceRecord>,
        current_page: usize,
        page_size: usize,
    ) -> RenderResult<RenderedTable> {
        if page.is_empty() {
            return Ok(RenderedTable {
                html: self.message_row(EMPTY_TABLE_MESSAGE)?,
                rows: Vec::new(),
                page_info: PageInfo::new(current_page, page_size, page.count.unwrap_or(0)),
            });
        }

        let rows: Vec<RowContext<'_>> = page.results.iter().map(row_context).collect();
        let status_options: Vec<StatusOption> = GrievanceStatus::SELECTABLE
            .iter()
            .map(|status| StatusOption {
                value: status.as_str().to_string(),
                label: status.label().to_string(),
            })
            .collect();

        let mut context = Context::new();
        context.insert("rows", &rows);
        context.insert("status_options", &status_options);

        Ok(RenderedTable {
            html: self.tera.render(ROWS, &context)?,
            rows: page
                .results
                .iter()
                .map(|record| RowBinding {
                    grievance_id: record.id,
                })
                .collect(),
            page_info: PageInfo::new(current_page, page_size, page.total()),
        })
    }

    /// Drawer contents while the detail request is in flight.
    pub fn detail_loading(&self) -> RenderResult<DetailView> {
        Ok(DetailView {
            title: "Loading...".to_string(),
            subtitle: String::new(),
            body_html: self.tera.render(DETAIL_LOADING, &Context::new())?,
        })
    }

    pub fn detail(&self, record: &GrievanceRecord) -> RenderResult<DetailView> {
        let remarks: Vec<RemarkContext<'_>> = record
            .recent_remarks(self.remark_limit)
            .map(remark_context)
            .collect();

        let mut context = Context::new();
        context.insert("submitter", or_dash(record.submitter_name()));
        context.insert("description", &record.description);
        context.insert("category", or_dash(record.category_name()));
        context.insert("department", or_dash(record.department_name()));
        context.insert("officer", or_dash(record.officer_name()));
        context.insert("status", record.status.as_str());
        context.insert("remarks", &remarks);

        let title = if record.title.trim().is_empty() {
            format!("#{}", record.id)
        } else {
            record.title.clone()
        };

        Ok(DetailView {
            title,
            subtitle: record.tracking_id().unwrap_or_default().to_string(),
            body_html: self.tera.render(DETAIL, &context)?,
        })
    }

    /// Terminal error shown in the drawer body.
    pub fn detail_error(&self) -> RenderResult<String> {
        let mut context = Context::new();
        context.insert("message", DETAIL_FAILED_MESSAGE);
        self.tera.render(DETAIL_ERROR, &context)
    }
}

fn row_context(record: &GrievanceRecord) -> RowContext<'_> {
    RowContext {
        id: record.id.get(),
        tracking_id: or_dash(record.tracking_id()),
        title: &record.title,
        preview: preview(&record.description),
        submitter: or_dash(record.submitter_name()),
        category: or_dash(record.category_name()),
        officer: or_dash(record.officer_name()),
        status_label: record.status.label(),
        badge_class: record.status.badge_class(),
        created_at: format_timestamp(record.created_at),
    }
}

fn remark_context(remark: &Remark) -> RemarkContext<'_> {
    RemarkContext {
        officer: remark.officer_name(),
        created_at: format_timestamp(remark.created_at),
        text: remark.text(),
    }
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// First characters of the description, used as the title link tooltip.
fn preview(description: &str) -> String {
    let trimmed = description.trim();
    match trimmed.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}\u{2026}", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}

/// `YYYY-MM-DD HH:MM` in the offset reported by the server, `-` when unknown.
pub fn format_timestamp(timestamp: Option<DateTime<FixedOffset>>) -> String {
    timestamp
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
