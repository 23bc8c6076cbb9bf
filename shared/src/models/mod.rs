//! Data models
//!
//! Shared between tracker-server and tracker-client (via API).
//! All IDs are `i32`, assigned by the server.

pub mod dashboard;
pub mod employee;
pub mod serde_helpers;
pub mod task;
mod validation;

// Re-exports
pub use dashboard::*;
pub use employee::*;
pub use task::*;
