//! Operator input captured from the console's modals and prompts.

use thiserror::Error;

pub mod assign;
pub mod remark;

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors that can occur when processing operator input.
pub enum FormError {
    #[error("remark text is required")]
    EmptyRemark,

    #[error("officer id is required")]
    MissingOfficer,

    #[error("invalid officer id")]
    InvalidOfficerId,

    #[error("no grievance selected")]
    MissingTarget,
}
