//! The add-remark modal.

use crate::console::GrievanceConsole;
use crate::domain::types::GrievanceId;
use crate::forms::FormError;
use crate::forms::remark::{AddRemarkForm, AddRemarkPayload};
use crate::http::{Method, Transport};
use crate::view::ConsoleView;

pub const EMPTY_REMARK_MESSAGE: &str = "Please write a remark";
pub const REMARK_FAILED_MESSAGE: &str = "Failed to save remark";

fn remarks_path(id: GrievanceId) -> String {
    format!("grievances/{id}/remarks/")
}

impl<T: Transport, V: ConsoleView> GrievanceConsole<T, V> {
    pub fn open_remark(&self, id: GrievanceId) {
        self.remark_target.set(Some(id));
        self.view.open_remark_modal(id);
    }

    /// Posts the modal text for the current target.
    ///
    /// On failure the modal stays open with its text so the operator can retry.
    pub async fn save_remark(&self) {
        let form = AddRemarkForm {
            target: self.remark_target.get(),
            remark: self.view.remark_text(),
        };

        let payload = match AddRemarkPayload::try_from(form) {
            Ok(payload) => payload,
            Err(FormError::EmptyRemark) => {
                self.view.alert(EMPTY_REMARK_MESSAGE);
                return;
            }
            Err(e) => {
                log::warn!("Remark not saved: {e}");
                return;
            }
        };

        let id = payload.grievance_id;
        match self
            .api
            .send_json(&remarks_path(id), Method::Post, &payload.body())
            .await
        {
            Ok(_) => {
                self.close_remark();
                self.reload(self.current_page()).await;
            }
            Err(e) => {
                log::error!("Failed to save remark for grievance {id}: {e}");
                self.view.alert(REMARK_FAILED_MESSAGE);
            }
        }
    }

    pub fn close_remark(&self) {
        self.remark_target.set(None);
        self.view.close_remark_modal();
    }
}
