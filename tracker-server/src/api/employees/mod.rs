//! Employee API Module
//!
//! | Path | Method | Result |
//! |------|--------|--------|
//! | /api/employees | GET | active employees |
//! | /api/employees/{id} | GET | one active employee or 404 |
//! | /api/employees | POST | 201 + Location |
//! | /api/employees/{id} | PUT | 204 |
//! | /api/employees/{id} | DELETE | 204, soft delete |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/employees", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
