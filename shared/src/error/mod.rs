//! Unified error system for the task tracker
//!
//! - [`ErrorCode`]: standardized, u16-coded error codes
//! - [`AppError`]: error with code, message and optional field-level errors
//! - [`ProblemDetails`]: JSON body written for 400/500 responses
//!
//! # Status mapping
//!
//! | Code | Status | Body |
//! |------|--------|------|
//! | ValidationFailed | 400 | problem details with `errors` |
//! | InvalidRequest | 400 | problem details with `errors["body" / "query" / "path"]` |
//! | IdMismatch | 400 | empty |
//! | EmployeeNotFound / TaskNotFound | 404 | empty |
//! | InternalError | 500 | problem details |
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::task_not_found(42);
//! assert_eq!(err.code, ErrorCode::TaskNotFound);
//!
//! let err = AppError::field("email", "invalid email syntax");
//! assert_eq!(err.errors.unwrap()["email"], vec!["invalid email syntax"]);
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, FieldErrors, ProblemDetails};
