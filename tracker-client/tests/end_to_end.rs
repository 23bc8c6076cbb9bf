//! Client against the real router on a loopback port

use std::sync::Arc;

use shared::{EmployeePayload, TaskPayload, TaskPriority, TaskStatus};
use tokio::net::TcpListener;
use tracker_client::{
    ClientConfig, ClientError, DashboardView, EmployeeListView, HttpTrackerClient, TaskListView,
    TrackerApi,
};
use tracker_server::{Config, ServerState, build_router};

async fn spawn_server(seed: bool) -> Arc<HttpTrackerClient> {
    let config = Config::with_overrides(0, seed);
    let state = ServerState::initialize(&config);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, build_router(state)).await.unwrap();
    });

    let config = ClientConfig::new(format!("http://{addr}/api")).with_timeout(5);
    Arc::new(HttpTrackerClient::new(&config).unwrap())
}

#[tokio::test]
async fn test_seeded_dashboard() {
    let api = spawn_server(true).await;
    let mut view = DashboardView::new(api);
    view.load().await.unwrap();

    let stats = view.stats().unwrap();
    assert_eq!(stats.total_tasks, 3);
    assert_eq!(stats.completed_tasks, 1);
    assert_eq!(view.recent_tasks()[0].task.title, "Create Marketing Campaign");
}

#[tokio::test]
async fn test_employee_round_trip() {
    let api = spawn_server(false).await;
    let mut view = EmployeeListView::new(api.clone());

    view.save(EmployeePayload {
        first_name: "Alice".into(),
        last_name: "Ng".into(),
        email: "alice@x.io".into(),
        department: "Eng".into(),
        position: "Dev".into(),
        ..Default::default()
    })
    .await
    .unwrap();

    let created = view.find(1).unwrap();
    assert_eq!(created.full_name, "Alice Ng");

    let mut edit = view.edit_form(1).unwrap();
    edit.position = "Lead".into();
    view.save(edit).await.unwrap();
    assert_eq!(api.get_employee(1).await.unwrap().employee.position, "Lead");

    view.delete(1).await.unwrap();
    assert!(view.employees().is_empty());
    assert!(matches!(api.get_employee(1).await, Err(ClientError::NotFound)));
}

#[tokio::test]
async fn test_validation_errors_surface() {
    let api = spawn_server(false).await;

    let err = api
        .create_employee(&EmployeePayload {
            last_name: "Ng".into(),
            email: "not-an-email".into(),
            ..Default::default()
        })
        .await
        .unwrap_err();

    let errors = err.field_errors().unwrap();
    assert_eq!(errors["firstName"], ["required"]);
    assert_eq!(errors["email"], ["invalid email syntax"]);
}

#[tokio::test]
async fn test_update_unknown_employee() {
    let api = spawn_server(true).await;
    let mut payload = EmployeePayload::from(&api.get_employee(1).await.unwrap().employee);
    payload.id = 40;

    let err = api.update_employee(&payload).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound));
}

#[tokio::test]
async fn test_task_lifecycle() {
    let api = spawn_server(false).await;
    let mut view = TaskListView::new(api.clone());
    view.load().await.unwrap();

    view.save(TaskPayload {
        title: "Ship v1".into(),
        priority: TaskPriority::Critical,
        employee_id: 4,
        ..Default::default()
    })
    .await
    .unwrap();
    assert_eq!(view.tasks().len(), 1);
    assert_eq!(view.employee_name(4), "Unassigned");

    view.mark_completed(1).await.unwrap();
    let done = api.get_task(1).await.unwrap();
    assert_eq!(done.task.status, TaskStatus::Completed);
    assert!(done.task.completed_date.is_some());

    let filtered = api.list_tasks(Some(4)).await.unwrap();
    assert_eq!(filtered.len(), 1);
    assert!(api.list_tasks(Some(5)).await.unwrap().is_empty());

    view.delete(1).await.unwrap();
    assert!(view.tasks().is_empty());
    assert!(matches!(api.get_task(1).await, Err(ClientError::NotFound)));
}
