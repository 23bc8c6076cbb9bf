//! Task API Handlers

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;
use shared::models::serde_helpers::empty_as_none;
use shared::{AppResult, DashboardStats, EmployeeId, TaskId, TaskPayload, TaskResponse};

use crate::api::{ApiJson, ApiPath, ApiQuery};
use crate::core::ServerState;

/// `?employeeId=` filter; a blank value means no filter
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub employee_id: Option<EmployeeId>,
}

/// List tasks, newest first, optionally for one employee
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> Json<Vec<TaskResponse>> {
    let tasks = state.tasks.read().list(query.employee_id);
    let now = Utc::now();
    Json(tasks.iter().map(|t| t.to_response(now)).collect())
}

/// Get a task by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<TaskId>,
) -> AppResult<Json<TaskResponse>> {
    let task = state.tasks.read().get(id)?;
    Ok(Json(task.to_response(Utc::now())))
}

/// Create a task
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<TaskPayload>,
) -> AppResult<impl IntoResponse> {
    let now = Utc::now();
    let task = state.tasks.write().create(payload, now)?;
    tracing::info!(id = task.id, employee_id = task.employee_id, "Task created");

    let location = format!("/api/tasks/{}", task.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(task.to_response(now)),
    ))
}

/// Update a task
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<TaskId>,
    ApiJson(payload): ApiJson<TaskPayload>,
) -> AppResult<StatusCode> {
    let status = payload.status;
    state.tasks.write().update(id, payload, Utc::now())?;
    tracing::info!(id, status = %status.name(), "Task updated");
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a task permanently
pub async fn delete(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<TaskId>,
) -> AppResult<StatusCode> {
    state.tasks.write().delete(id)?;
    tracing::info!(id, "Task deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Aggregate counts over all tasks
pub async fn dashboard(State(state): State<ServerState>) -> Json<DashboardStats> {
    let stats = state.tasks.read().dashboard(Utc::now());
    Json(stats)
}
