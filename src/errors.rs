//! Failures of console actions.

use thiserror::Error;

use crate::forms::FormError;
use crate::http::ApiError;

/// Any failure an operator action can end in.
///
/// Actions never surface these to the host; they are logged and turned into
/// an inline error state or an alert at the point where the action started.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] FormError),

    #[error("render error: {0}")]
    Render(#[from] tera::Error),

    #[error("export error: {0}")]
    Export(String),
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;

impl From<csv::Error> for ConsoleError {
    fn from(value: csv::Error) -> Self {
        ConsoleError::Export(value.to_string())
    }
}
