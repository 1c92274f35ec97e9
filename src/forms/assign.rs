use crate::domain::types::OfficerId;
use crate::dto::api::AssignOfficer;
use crate::forms::FormError;

/// Officer id typed by the operator or taken from the officer filter.
#[derive(Debug, Clone, Default)]
pub struct AssignOfficerForm {
    pub officer: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignOfficerPayload {
    pub officer_id: OfficerId,
}

impl AssignOfficerForm {
    /// `true` when nothing usable was entered; the assignment is then abandoned.
    pub fn is_blank(&self) -> bool {
        self.officer.trim().is_empty()
    }
}

impl TryFrom<AssignOfficerForm> for AssignOfficerPayload {
    type Error = FormError;

    fn try_from(form: AssignOfficerForm) -> Result<Self, Self::Error> {
        if form.is_blank() {
            return Err(FormError::MissingOfficer);
        }
        let officer_id = form
            .officer
            .parse::<OfficerId>()
            .map_err(|_| FormError::InvalidOfficerId)?;
        Ok(Self { officer_id })
    }
}

impl AssignOfficerPayload {
    pub fn body(&self) -> AssignOfficer {
        AssignOfficer {
            assigned_officer: self.officer_id,
        }
    }
}
