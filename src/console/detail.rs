//! The grievance detail drawer.

use crate::console::rows::detail_path;
use crate::console::{GrievanceConsole, next_generation};
use crate::domain::grievance::GrievanceRecord;
use crate::domain::types::GrievanceId;
use crate::errors::{ConsoleError, ConsoleResult};
use crate::http::Transport;
use crate::render::DetailView;
use crate::view::ConsoleView;

impl<T: Transport, V: ConsoleView> GrievanceConsole<T, V> {
    /// Opens the drawer for `id` and fills it once the record arrives.
    ///
    /// Only the most recent open is rendered; earlier responses are dropped.
    pub async fn open_detail(&self, id: GrievanceId) {
        let generation = next_generation(&self.detail_generation);

        match self.renderer.detail_loading() {
            Ok(loading) => self.view.show_detail(&loading),
            Err(e) => log::error!("Failed to render detail placeholder: {e}"),
        }

        let result = self.load_detail(id).await;

        if generation != self.detail_generation.get() {
            log::debug!("Discarding stale detail response for grievance {id}");
            return;
        }

        match result {
            Ok(detail) => self.view.show_detail(&detail),
            Err(e) => {
                log::error!("Failed to load grievance {id}: {e}");
                match self.renderer.detail_error() {
                    Ok(html) => self.view.set_detail_body(&html),
                    Err(e) => log::error!("Failed to render detail error: {e}"),
                }
            }
        }
    }

    /// Hides the drawer. A detail request still in flight is not rendered.
    pub fn close_detail(&self) {
        next_generation(&self.detail_generation);
        self.view.hide_detail();
    }

    async fn load_detail(&self, id: GrievanceId) -> ConsoleResult<DetailView> {
        let record: GrievanceRecord = self
            .api
            .get_json(&detail_path(id))
            .await
            .map_err(ConsoleError::from)?;
        Ok(self.renderer.detail(&record)?)
    }
}
