//! Client error types

use shared::FieldErrors;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or undecodable body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// 404
    #[error("Not found")]
    NotFound,

    /// 400 with field errors
    #[error("Validation failed: {}", summarize(.errors))]
    Validation { errors: FieldErrors },

    /// 400 without field errors (e.g. id mismatch)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Any other non-success status
    #[error("Unexpected status {status}")]
    Unexpected { status: u16 },

    /// Input rejected before any request was made
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ClientError {
    /// Field errors of a validation failure, if any
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation { errors } => Some(errors),
            _ => None,
        }
    }
}

fn summarize(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, messages)| format!("{field}: {}", messages.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
