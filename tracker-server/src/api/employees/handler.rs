//! Employee API Handlers

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use chrono::Utc;
use shared::{AppResult, EmployeeId, EmployeePayload, EmployeeResponse};

use crate::api::{ApiJson, ApiPath};
use crate::core::ServerState;

/// List active employees
pub async fn list(State(state): State<ServerState>) -> Json<Vec<EmployeeResponse>> {
    let employees = state.employees.read().list_active();
    Json(employees.into_iter().map(EmployeeResponse::from).collect())
}

/// Get an active employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<EmployeeId>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.employees.read().get_active(id)?;
    Ok(Json(employee.into()))
}

/// Create an employee
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<EmployeePayload>,
) -> AppResult<impl IntoResponse> {
    let employee = state.employees.write().create(payload, Utc::now())?;
    tracing::info!(id = employee.id, "Employee created");

    let location = format!("/api/employees/{}", employee.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(EmployeeResponse::from(employee)),
    ))
}

/// Update an employee
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<EmployeeId>,
    ApiJson(payload): ApiJson<EmployeePayload>,
) -> AppResult<StatusCode> {
    state.employees.write().update(id, payload)?;
    tracing::info!(id, "Employee updated");
    Ok(StatusCode::NO_CONTENT)
}

/// Soft delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<EmployeeId>,
) -> AppResult<StatusCode> {
    state.employees.write().deactivate(id)?;
    tracing::info!(id, "Employee deactivated");
    Ok(StatusCode::NO_CONTENT)
}
