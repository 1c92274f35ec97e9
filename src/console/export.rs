//! CSV export of the filtered grievance list.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::console::GrievanceConsole;
use crate::domain::grievance::GrievanceRecord;
use crate::dto::export::{EXPORT_COLUMNS, ExportRow};
use crate::errors::{ConsoleError, ConsoleResult};
use crate::http::Transport;
use crate::view::{ConsoleView, Download};

pub const CSV_MIME: &str = "text/csv";
pub const NO_DATA_MESSAGE: &str = "No data to export";
pub const EXPORT_FAILED_MESSAGE: &str = "Export failed";

impl<T: Transport, V: ConsoleView> GrievanceConsole<T, V> {
    /// Downloads the rows matching the last loaded page as CSV.
    pub async fn export(&self) {
        let state = self.state();
        let page = match self.fetch_page(&state).await {
            Ok(page) => page,
            Err(e) => {
                log::error!("Failed to fetch grievances for export: {e}");
                self.view.alert(EXPORT_FAILED_MESSAGE);
                return;
            }
        };

        if page.is_empty() {
            self.view.alert(NO_DATA_MESSAGE);
            return;
        }

        match write_csv(&page.results) {
            Ok(bytes) => self.view.download(&Download {
                filename: self.config.export_filename.clone(),
                mime: CSV_MIME.to_string(),
                bytes,
            }),
            Err(e) => {
                log::error!("Failed to write export: {e}");
                self.view.alert(EXPORT_FAILED_MESSAGE);
            }
        }
    }
}

/// Serializes records as CSV: a bare header line, then one line per record
/// with every field quoted.
pub fn write_csv(records: &[GrievanceRecord]) -> ConsoleResult<Vec<u8>> {
    let mut buffer = EXPORT_COLUMNS.join(",").into_bytes();
    buffer.push(b'\n');

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(buffer);
    for record in records {
        writer.serialize(ExportRow::from(record))?;
    }
    writer
        .into_inner()
        .map_err(|e| ConsoleError::Export(e.to_string()))
}
