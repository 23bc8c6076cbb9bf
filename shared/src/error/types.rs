//! Error types and response bodies

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use validator::ValidationErrors;

/// Field-level validation messages keyed by camelCase wire name
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Application error with a structured code and optional field errors
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Field-level validation messages (validation failures only)
    pub errors: Option<FieldErrors>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            errors: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            errors: None,
        }
    }

    /// Append a field-level message
    pub fn with_field_error(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.errors
            .get_or_insert_with(BTreeMap::new)
            .entry(field.into())
            .or_default()
            .push(message.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Validation error carrying the given field messages
    pub fn validation(errors: FieldErrors) -> Self {
        Self {
            errors: Some(errors),
            ..Self::new(ErrorCode::ValidationFailed)
        }
    }

    /// Validation error for a single field
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed).with_field_error(field, message)
    }

    /// Unreadable request body (malformed JSON, unknown enum code, ...)
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest).with_field_error("body", msg)
    }

    /// Unreadable query string or path segment, keyed by where it came from
    pub fn invalid_parameter(source: &'static str, msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest).with_field_error(source, msg)
    }

    pub fn id_mismatch(path_id: i32, body_id: i32) -> Self {
        Self::with_message(
            ErrorCode::IdMismatch,
            format!("Route id {path_id} does not match body id {body_id}"),
        )
    }

    pub fn employee_not_found(id: i32) -> Self {
        Self::with_message(ErrorCode::EmployeeNotFound, format!("Employee {id} not found"))
    }

    pub fn task_not_found(id: i32) -> Self {
        Self::with_message(ErrorCode::TaskNotFound, format!("Task {id} not found"))
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            let messages = fields.entry(to_camel_case(&field)).or_default();
            for err in errs.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                messages.push(message);
            }
        }
        Self::validation(fields)
    }
}

/// Result type for handlers and services
pub type AppResult<T> = Result<T, AppError>;

/// Error body written for 400 (validation) and 500 responses
///
/// ```json
/// {
///   "title": "One or more validation errors occurred.",
///   "status": 400,
///   "errors": { "email": ["invalid email syntax"] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemDetails {
    pub title: String,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

/// `first_name` -> `firstName`
fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for ch in field.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_camel_case() {
        assert_eq!(to_camel_case("first_name"), "firstName");
        assert_eq!(to_camel_case("email"), "email");
        assert_eq!(to_camel_case("employee_id"), "employeeId");
    }

    #[test]
    fn test_from_validation_errors_uses_wire_names() {
        let mut errors = ValidationErrors::new();
        let mut err = ValidationError::new("length");
        err.message = Some("max length exceeded".into());
        errors.add("last_name", err);

        let app: AppError = errors.into();
        assert_eq!(app.code, ErrorCode::ValidationFailed);
        let fields = app.errors.unwrap();
        assert_eq!(fields["lastName"], vec!["max length exceeded".to_string()]);
    }

    #[test]
    fn test_message_falls_back_to_code() {
        let mut errors = ValidationErrors::new();
        errors.add("title", ValidationError::new("custom_rule"));

        let app: AppError = errors.into();
        assert_eq!(app.errors.unwrap()["title"], vec!["custom_rule".to_string()]);
    }

    #[test]
    fn test_with_field_error_accumulates() {
        let err = AppError::field("email", "required").with_field_error("email", "invalid email syntax");
        assert_eq!(
            err.errors.unwrap()["email"],
            vec!["required".to_string(), "invalid email syntax".to_string()]
        );
    }

    #[test]
    fn test_not_found_constructors() {
        assert_eq!(AppError::employee_not_found(5).message, "Employee 5 not found");
        assert_eq!(AppError::task_not_found(7).code, ErrorCode::TaskNotFound);
    }

    #[test]
    fn test_invalid_parameter_keyed_by_source() {
        let err = AppError::invalid_parameter("query", "employeeId: invalid digit found in string");
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert_eq!(
            err.errors.unwrap()["query"],
            vec!["employeeId: invalid digit found in string".to_string()]
        );
    }
}
