//! API routes
//!
//! - [`health`] - liveness and record counts
//! - [`employees`] - employee CRUD (soft delete)
//! - [`tasks`] - task CRUD and the dashboard

pub mod extract;

pub mod employees;
pub mod health;
pub mod tasks;

use axum::Router;

use crate::core::ServerState;

pub use extract::{ApiJson, ApiPath, ApiQuery};

/// Build the API router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(employees::router())
        .merge(tasks::router())
}
