//! HTTP status mapping and axum response conversion

use super::codes::ErrorCode;
use super::types::{AppError, ProblemDetails};
use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::EmployeeNotFound | Self::TaskNotFound => StatusCode::NOT_FOUND,

            Self::ValidationFailed | Self::InvalidRequest | Self::IdMismatch => {
                StatusCode::BAD_REQUEST
            }

            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether responses for this code carry a body
    pub fn has_body(&self) -> bool {
        !matches!(
            self,
            Self::EmployeeNotFound | Self::TaskNotFound | Self::IdMismatch
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();

        if status.is_server_error() {
            tracing::error!(code = %self.code, error = %self.message, "Internal error occurred");
        }

        if !self.code.has_body() {
            return status.into_response();
        }

        let title = if status.is_server_error() {
            ErrorCode::InternalError.message().to_string()
        } else {
            self.code.message().to_string()
        };

        let body = ProblemDetails {
            title,
            status: status.as_u16(),
            errors: self.errors,
        };

        (status, Json(body)).into_response()
    }
}
