//! Row actions: status change and officer assignment.

use crate::console::GrievanceConsole;
use crate::console::bindings::RowEvent;
use crate::domain::grievance::GrievanceStatus;
use crate::domain::types::GrievanceId;
use crate::dto::api::StatusUpdate;
use crate::forms::FormError;
use crate::forms::assign::{AssignOfficerForm, AssignOfficerPayload};
use crate::http::{Method, Transport};
use crate::view::ConsoleView;

pub const STATUS_FAILED_MESSAGE: &str = "Failed to update status";
pub const ASSIGN_FAILED_MESSAGE: &str = "Assign failed";
pub const INVALID_OFFICER_MESSAGE: &str = "Officer id must be a number";

pub(crate) fn detail_path(id: GrievanceId) -> String {
    format!("grievances/{id}/")
}

fn assign_path(id: GrievanceId) -> String {
    format!("grievances/{id}/assign/")
}

impl<T: Transport, V: ConsoleView> GrievanceConsole<T, V> {
    /// Routes an event from a rendered row.
    ///
    /// Events for rows that are no longer bound (replaced by a newer render)
    /// are ignored.
    pub async fn on_row_event(&self, event: RowEvent) {
        let id = event.grievance_id();
        let bound = self.bound_rows.borrow().contains(&id);
        if !bound {
            log::debug!("Ignoring event for unbound grievance row {id}");
            return;
        }

        match event {
            RowEvent::OpenDetail(id) => self.open_detail(id).await,
            RowEvent::ChangeStatus(id, value) => self.change_status(id, &value).await,
            RowEvent::Assign(id) => self.assign(id).await,
            RowEvent::OpenRemark(id) => self.open_remark(id),
        }
    }

    /// Sends the selected status and reloads the current page.
    ///
    /// A blank select value is ignored. The row is only updated by the reload.
    pub async fn change_status(&self, id: GrievanceId, value: &str) {
        let Some(status) = GrievanceStatus::from_input(value) else {
            return;
        };

        let body = StatusUpdate { status };
        match self.api.send_json(&detail_path(id), Method::Patch, &body).await {
            Ok(_) => self.reload(self.current_page()).await,
            Err(e) => {
                log::error!("Failed to update status of grievance {id}: {e}");
                self.view.alert(STATUS_FAILED_MESSAGE);
            }
        }
    }

    /// Assigns the officer selected in the officer filter, or asks for one.
    pub async fn assign(&self, id: GrievanceId) {
        let form = AssignOfficerForm {
            officer: self.view.filter_inputs().assigned_officer,
        };
        if form.is_blank() {
            self.assign_target.set(Some(id));
            self.view.open_assign_prompt(id);
            return;
        }
        self.submit_assignment(id, form).await;
    }

    /// Submits the officer id typed into the assign prompt.
    ///
    /// Blank input abandons the assignment without a message.
    pub async fn confirm_assign(&self) {
        let Some(id) = self.assign_target.get() else {
            return;
        };
        let form = AssignOfficerForm {
            officer: self.view.assign_input(),
        };
        if form.is_blank() {
            self.cancel_assign();
            return;
        }
        self.submit_assignment(id, form).await;
    }

    pub fn cancel_assign(&self) {
        self.assign_target.set(None);
        self.view.close_assign_prompt();
    }

    async fn submit_assignment(&self, id: GrievanceId, form: AssignOfficerForm) {
        let payload = match AssignOfficerPayload::try_from(form) {
            Ok(payload) => payload,
            Err(FormError::InvalidOfficerId) => {
                self.view.alert(INVALID_OFFICER_MESSAGE);
                return;
            }
            Err(e) => {
                log::warn!("Assignment of grievance {id} abandoned: {e}");
                return;
            }
        };

        match self
            .api
            .send_json(&assign_path(id), Method::Post, &payload.body())
            .await
        {
            Ok(_) => {
                if self.assign_target.get() == Some(id) {
                    self.cancel_assign();
                }
                self.reload(self.current_page()).await;
            }
            Err(e) => {
                log::error!("Failed to assign officer to grievance {id}: {e}");
                self.view.alert(ASSIGN_FAILED_MESSAGE);
            }
        }
    }
}
