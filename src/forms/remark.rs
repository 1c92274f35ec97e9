use crate::domain::types::{GrievanceId, RemarkText};
use crate::dto::api::NewRemark;
use crate::forms::FormError;

/// Contents of the remark modal at the moment "Save" is pressed.
#[derive(Debug, Clone, Default)]
pub struct AddRemarkForm {
    /// Grievance the modal was opened for.
    pub target: Option<GrievanceId>,
    /// Raw textarea value.
    pub remark: String,
}

/// Validated remark ready for submission.
#[derive(Debug, Clone, PartialEq)]
pub struct AddRemarkPayload {
    pub grievance_id: GrievanceId,
    pub remark: RemarkText,
}

impl TryFrom<AddRemarkForm> for AddRemarkPayload {
    type Error = FormError;

    fn try_from(form: AddRemarkForm) -> Result<Self, Self::Error> {
        let remark = RemarkText::new(form.remark).map_err(|_| FormError::EmptyRemark)?;
        let grievance_id = form.target.ok_or(FormError::MissingTarget)?;
        Ok(Self {
            grievance_id,
            remark,
        })
    }
}

impl AddRemarkPayload {
    pub fn body(&self) -> NewRemark {
        NewRemark {
            remark: self.remark.as_str().to_string(),
        }
    }
}
