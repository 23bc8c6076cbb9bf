//! Shared types for the task tracker
//!
//! Entity definitions, request payloads, response shapes and the unified
//! error type used by both `tracker-server` and `tracker-client`.

pub mod error;
pub mod models;

pub use error::{AppError, AppResult, ErrorCode, FieldErrors};
pub use models::{
    DashboardStats, Employee, EmployeeId, EmployeePayload, EmployeeResponse, PriorityCount,
    StatusCount, TaskId, TaskItem, TaskPayload, TaskPriority, TaskResponse, TaskStatus,
};
