//! The console's contract with the page it drives.
//!
//! A browser host implements [`ConsoleView`] over the DOM elements listed
//! in [`ids`]; the command-line host uses [`headless::HeadlessView`].

use crate::domain::filter::FilterInputs;
use crate::domain::types::GrievanceId;
use crate::dto::filters::FilterOption;
use crate::pagination::PageInfo;
use crate::render::{DetailView, RowBinding};

#[cfg(feature = "cli")]
pub mod headless;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Element ids of the admin page.
pub mod ids {
    pub const TABLE_BODY: &str = "grievanceTable";
    pub const TOTAL_COUNT: &str = "total-count";
    pub const PAGE_INFO: &str = "page-info";
    pub const PAGE_SIZE: &str = "page-size";

    pub const FILTER_STATUS: &str = "filter-status";
    pub const FILTER_CATEGORY: &str = "filter-category";
    pub const FILTER_OFFICER: &str = "filter-officer";
    pub const DATE_FROM: &str = "date-from";
    pub const DATE_TO: &str = "date-to";
    pub const SEARCH: &str = "searchTop";
    pub const SEARCH_BUTTON: &str = "searchBtn";
    pub const APPLY_FILTERS: &str = "applyFilters";
    pub const RESET_FILTERS: &str = "resetFilters";

    pub const NEXT_PAGE: &str = "nextPage";
    pub const PREV_PAGE: &str = "prevPage";
    pub const EXPORT_CSV: &str = "exportCsv";

    pub const DETAIL_DRAWER: &str = "detailDrawer";
    pub const CLOSE_DRAWER: &str = "closeDrawer";

    pub const REMARK_MODAL: &str = "remarkModal";
    pub const REMARK_TEXT: &str = "remarkText";
    pub const REMARK_SAVE: &str = "remarkSave";
    pub const REMARK_CANCEL: &str = "remarkCancel";
    pub const REMARK_CLOSE: &str = "remarkClose";

    pub const ASSIGN_PROMPT: &str = "assignPrompt";
    pub const ASSIGN_INPUT: &str = "assignOfficerId";
    pub const ASSIGN_CONFIRM: &str = "assignConfirm";
    pub const ASSIGN_CANCEL: &str = "assignCancel";
}

/// A file handed to the host for download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Operations the console performs on the page.
///
/// Implementations are called synchronously and must not call back into
/// the console.
pub trait ConsoleView {
    /// Current values of the filter controls.
    fn filter_inputs(&self) -> FilterInputs;
    /// Raw value of the page-size control, `None` when the control is absent.
    fn page_size_input(&self) -> Option<String>;
    fn clear_filter_inputs(&self);

    fn set_category_options(&self, options: &[FilterOption]);
    fn set_officer_options(&self, options: &[FilterOption]);

    /// Replaces the table body and binds row handlers to exactly `rows`.
    fn replace_table_body(&self, html: &str, rows: &[RowBinding]);
    fn set_total_count(&self, total: u64);
    fn set_page_info(&self, info: &PageInfo);

    /// Opens the detail drawer with the given header and body.
    fn show_detail(&self, detail: &DetailView);
    fn set_detail_body(&self, html: &str);
    fn hide_detail(&self);

    /// Opens the remark modal labelled for `id` with an empty textarea.
    fn open_remark_modal(&self, id: GrievanceId);
    fn close_remark_modal(&self);
    fn remark_text(&self) -> String;

    /// Opens the non-blocking officer-id prompt for `id`.
    fn open_assign_prompt(&self, id: GrievanceId);
    fn assign_input(&self) -> String;
    fn close_assign_prompt(&self);

    fn alert(&self, message: &str);
    fn download(&self, file: &Download);
}
