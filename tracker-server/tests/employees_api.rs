mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

fn alice() -> serde_json::Value {
    json!({
        "firstName": "Alice",
        "lastName": "Ng",
        "email": "alice@x.io",
        "department": "Eng",
        "position": "Dev"
    })
}

#[tokio::test]
async fn test_create_then_fetch() {
    let (app, _) = empty_app();

    let created = post(&app, "/api/employees", alice()).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.location(), Some("/api/employees/1"));

    let body = created.json();
    assert_eq!(body["id"], 1);
    assert_eq!(body["fullName"], "Alice Ng");
    assert_eq!(body["isActive"], true);
    assert!(body["hireDate"].is_string());

    let fetched = get(&app, "/api/employees/1").await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.json()["email"], "alice@x.io");
}

#[tokio::test]
async fn test_create_ignores_server_owned_fields() {
    let (app, _) = empty_app();
    let mut body = alice();
    body["id"] = json!(77);
    body["isActive"] = json!(false);
    body["hireDate"] = json!("1999-01-01T00:00:00Z");
    body["tasks"] = json!([]);

    let created = post(&app, "/api/employees", body).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.json()["id"], 1);
    assert_eq!(created.json()["isActive"], true);
    assert_ne!(created.json()["hireDate"], "1999-01-01T00:00:00Z");
}

#[tokio::test]
async fn test_create_validation_errors() {
    let (app, state) = empty_app();

    let res = post(
        &app,
        "/api/employees",
        json!({ "firstName": "", "lastName": "Ng", "email": "nope" }),
    )
    .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    let body = res.json();
    assert_eq!(body["status"], 400);
    assert_eq!(body["errors"]["firstName"], json!(["required"]));
    assert_eq!(body["errors"]["email"], json!(["invalid email syntax"]));
    assert!(body["errors"].get("lastName").is_none());
    assert!(state.employees.read().is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let (app, _) = empty_app();
    let res = send_raw(&app, axum::http::Method::POST, "/api/employees", "{ not json").await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.json()["errors"]["body"].is_array());
}

#[tokio::test]
async fn test_get_unknown_is_empty_404() {
    let (app, _) = empty_app();
    let res = get(&app, "/api/employees/99").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert!(res.body.is_none());
}

#[tokio::test]
async fn test_non_numeric_id_is_problem_body() {
    let (app, _) = empty_app();
    let res = delete(&app, "/api/employees/x1").await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json()["status"], 400);
    assert!(res.json()["errors"]["path"].is_array());
}

#[tokio::test]
async fn test_soft_delete() {
    let (app, state) = empty_app();
    post(&app, "/api/employees", alice()).await;

    let res = delete(&app, "/api/employees/1").await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);

    assert_eq!(get(&app, "/api/employees/1").await.status, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/api/employees").await.json(), &json!([]));
    // record is still stored
    assert_eq!(state.employees.read().len(), 1);

    let health = get(&app, "/health").await;
    assert_eq!(health.json()["employees"], 1);
}

#[tokio::test]
async fn test_delete_unknown_is_404() {
    let (app, _) = empty_app();
    assert_eq!(delete(&app, "/api/employees/5").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update() {
    let (app, _) = empty_app();
    let created = post(&app, "/api/employees", alice()).await;
    let hire_date = created.json()["hireDate"].clone();

    let mut body = alice();
    body["id"] = json!(1);
    body["position"] = json!("Lead");
    body["isActive"] = json!(false);
    body["hireDate"] = json!("2000-01-01T00:00:00Z");

    let res = put(&app, "/api/employees/1", body).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert!(res.body.is_none());

    let fetched = get(&app, "/api/employees/1").await;
    assert_eq!(fetched.json()["position"], "Lead");
    assert_eq!(fetched.json()["isActive"], true);
    assert_eq!(fetched.json()["hireDate"], hire_date);
}

#[tokio::test]
async fn test_update_id_mismatch() {
    let (app, _) = empty_app();
    post(&app, "/api/employees", alice()).await;

    let mut body = alice();
    body["id"] = json!(2);
    let res = put(&app, "/api/employees/1", body).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body.is_none());
}

#[tokio::test]
async fn test_update_unknown_before_validation() {
    let (app, _) = empty_app();
    let res = put(&app, "/api/employees/9", json!({ "id": 9, "firstName": "" })).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_invalid() {
    let (app, _) = empty_app();
    post(&app, "/api/employees", alice()).await;

    let mut body = alice();
    body["id"] = json!(1);
    body["department"] = json!("x".repeat(51));
    let res = put(&app, "/api/employees/1", body).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json()["errors"]["department"], json!(["max length exceeded"]));
}

#[tokio::test]
async fn test_seeded_list() {
    let (app, _) = seeded_app();
    let res = get(&app, "/api/employees").await;
    let names: Vec<_> = res
        .json()
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["fullName"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["John Doe", "Jane Smith", "Mike Johnson"]);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let (app, _) = empty_app();
    let request = axum::http::Request::builder()
        .uri("/health")
        .header("x-request-id", "abc-123")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "abc-123");
}
