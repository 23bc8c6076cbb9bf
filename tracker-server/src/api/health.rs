//! Health check route
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /health | GET | liveness plus raw record counts |
//!
//! ```json
//! { "status": "ok", "version": "0.1.0", "uptimeSeconds": 12, "employees": 3, "tasks": 3 }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    uptime_seconds: u64,
    /// Soft-deleted employees included
    employees: usize,
    tasks: usize,
}

async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let employees = state.employees.read().len();
    let tasks = state.tasks.read().len();
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.uptime_seconds(),
        employees,
        tasks,
    })
}
