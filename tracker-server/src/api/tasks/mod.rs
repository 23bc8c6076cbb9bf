//! Task API Module
//!
//! | Path | Method | Result |
//! |------|--------|--------|
//! | /api/tasks?employeeId= | GET | tasks, newest first |
//! | /api/tasks/{id} | GET | one task or 404 |
//! | /api/tasks | POST | 201 + Location |
//! | /api/tasks/{id} | PUT | 204 |
//! | /api/tasks/{id} | DELETE | 204, hard delete |
//! | /api/tasks/dashboard | GET | aggregate counts |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Task router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/tasks", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/dashboard", get(handler::dashboard))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
