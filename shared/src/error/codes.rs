//! Error codes shared by the server and the client
//!
//! - 0xxx: General errors
//! - 8xxx: Employee / task errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as its u16 value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// One or more fields failed validation
    ValidationFailed = 2,
    /// Request body or parameters could not be read
    InvalidRequest = 5,
    /// Route id and body id differ
    IdMismatch = 9,

    // ==================== 8xxx: Employee / Task ====================
    /// Employee not found
    EmployeeNotFound = 8001,
    /// Task not found
    TaskNotFound = 8101,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
}

impl ErrorCode {
    /// Numeric value of this code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default message for this code
    pub const fn message(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "One or more validation errors occurred.",
            Self::InvalidRequest => "The request is invalid.",
            Self::IdMismatch => "Route id does not match body id",
            Self::EmployeeNotFound => "Employee not found",
            Self::TaskNotFound => "Task not found",
            Self::InternalError => "Internal server error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Returned when a u16 does not name a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ErrorCode::ValidationFailed),
            5 => Ok(ErrorCode::InvalidRequest),
            9 => Ok(ErrorCode::IdMismatch),
            8001 => Ok(ErrorCode::EmployeeNotFound),
            8101 => Ok(ErrorCode::TaskNotFound),
            9001 => Ok(ErrorCode::InternalError),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
