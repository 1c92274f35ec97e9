//! Controller for the grievance administration console.
//!
//! The `data` feature provides the typed model of the admin API: records,
//! filter state, query strings and operator forms. The `console` feature adds
//! the HTTP adapter, HTML rendering and [`console::GrievanceConsole`], which
//! drives a page through the [`view::ConsoleView`] trait. The `cli` feature
//! adds a headless host that exports the filtered list to a CSV file.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod query;

#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "console")]
pub mod errors;
#[cfg(feature = "console")]
pub mod http;
#[cfg(feature = "console")]
pub mod render;
#[cfg(feature = "console")]
pub mod view;

#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use crate::console::GrievanceConsole;
#[cfg(feature = "cli")]
use crate::errors::{ConsoleError, ConsoleResult};
#[cfg(feature = "cli")]
use crate::http::ApiClient;
#[cfg(feature = "cli")]
use crate::http::reqwest_transport::ReqwestTransport;
#[cfg(feature = "cli")]
use crate::models::config::ExportConfig;
#[cfg(feature = "cli")]
use crate::view::headless::HeadlessView;

/// Loads the configured page with the configured filters and exports it.
///
/// Returns the files written to `output_dir`. Any alert raised along the way
/// (empty result, failed fetch) is reported as an error.
#[cfg(feature = "cli")]
pub async fn run_export(config: ExportConfig) -> ConsoleResult<Vec<PathBuf>> {
    let cookies = config.console.cookies.clone().unwrap_or_default();

    let mut transport = ReqwestTransport::default();
    if !cookies.is_empty() {
        transport = transport.with_cookies(cookies.as_str());
    }

    let api = ApiClient::from_config(transport, &config.console, &cookies);
    let view = HeadlessView::new(&config.filters, config.output_dir.as_str());
    let console = GrievanceConsole::new(api, view, config.console.clone())?;

    console.reload(config.filters.page.unwrap_or(1)).await;
    console.export().await;

    if let Some(alert) = console.view().alerts().into_iter().next() {
        return Err(ConsoleError::Export(alert));
    }
    Ok(console.view().written())
}
