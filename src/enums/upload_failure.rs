use thiserror::Error;
use crate::config::constants::GENERIC_UPLOAD_FAILURE_MESSAGE;

/// Why one upload attempt did not produce a result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UploadFailure {
    #[error("request could not be completed: {0}")]
    Transport(String),

    #[error("service returned an unreadable result: {0}")]
    MalformedResponse(String),

    #[error("service rejected the file ({status}): {detail}")]
    Service { status: u16, detail: String },

    #[error("service failed with status {status} and no usable detail")]
    UnstructuredService { status: u16 },
}

impl UploadFailure {
    /// Message shown to the user. Only a service-provided detail is surfaced
    /// verbatim; every other failure gets the column guidance.
    pub fn user_message(&self) -> String {
        match self {
            UploadFailure::Service { detail, .. } => detail.clone(),
            _ => GENERIC_UPLOAD_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            UploadFailure::Service { status, .. } | UploadFailure::UnstructuredService { status } => Some(*status),
            _ => None,
        }
    }
}
