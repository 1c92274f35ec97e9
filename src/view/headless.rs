//! [`ConsoleView`] for the command-line host.
//!
//! Filter controls are preset from configuration, rendered markup is
//! discarded, alerts go to the log and downloads are written to disk.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::filter::FilterInputs;
use crate::domain::types::GrievanceId;
use crate::dto::filters::FilterOption;
use crate::models::config::FilterPreset;
use crate::pagination::PageInfo;
use crate::render::{DetailView, RowBinding};
use crate::view::{ConsoleView, Download};

pub struct HeadlessView {
    inputs: RefCell<FilterInputs>,
    page_size: Option<usize>,
    output_dir: PathBuf,
    alerts: RefCell<Vec<String>>,
    written: RefCell<Vec<PathBuf>>,
}

impl HeadlessView {
    pub fn new(preset: &FilterPreset, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            inputs: RefCell::new(FilterInputs::from(preset)),
            page_size: preset.page_size,
            output_dir: output_dir.into(),
            alerts: RefCell::new(Vec::new()),
            written: RefCell::new(Vec::new()),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Alerts raised so far, oldest first.
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    /// Files written by downloads, oldest first.
    pub fn written(&self) -> Vec<PathBuf> {
        self.written.borrow().clone()
    }
}

impl ConsoleView for HeadlessView {
    fn filter_inputs(&self) -> FilterInputs {
        self.inputs.borrow().clone()
    }

    fn page_size_input(&self) -> Option<String> {
        self.page_size.map(|size| size.to_string())
    }

    fn clear_filter_inputs(&self) {
        *self.inputs.borrow_mut() = FilterInputs::default();
    }

    fn set_category_options(&self, options: &[FilterOption]) {
        log::debug!("Loaded {} category options", options.len());
    }

    fn set_officer_options(&self, options: &[FilterOption]) {
        log::debug!("Loaded {} officer options", options.len());
    }

    fn replace_table_body(&self, _html: &str, rows: &[RowBinding]) {
        log::debug!("Rendered {} grievance rows", rows.len());
    }

    fn set_total_count(&self, total: u64) {
        log::info!("{total} grievances match the filters");
    }

    fn set_page_info(&self, info: &PageInfo) {
        log::info!("{}", info.label());
    }

    fn show_detail(&self, detail: &DetailView) {
        log::info!("Grievance {} {}", detail.title, detail.subtitle);
    }

    fn set_detail_body(&self, _html: &str) {}

    fn hide_detail(&self) {}

    fn open_remark_modal(&self, _id: GrievanceId) {}

    fn close_remark_modal(&self) {}

    fn remark_text(&self) -> String {
        String::new()
    }

    fn open_assign_prompt(&self, _id: GrievanceId) {}

    fn assign_input(&self) -> String {
        String::new()
    }

    fn close_assign_prompt(&self) {}

    fn alert(&self, message: &str) {
        log::warn!("{message}");
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn download(&self, file: &Download) {
        let path = self.output_dir.join(&file.filename);
        match fs::write(&path, &file.bytes) {
            Ok(()) => {
                log::info!("Wrote {} bytes to {}", file.bytes.len(), path.display());
                self.written.borrow_mut().push(path);
            }
            Err(e) => {
                log::error!("Failed to write {}: {e}", path.display());
                self.alerts
                    .borrow_mut()
                    .push(format!("Failed to write {}", path.display()));
            }
        }
    }
}
