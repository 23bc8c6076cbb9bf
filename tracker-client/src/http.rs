//! HTTP client for the tracker API

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::error::ProblemDetails;
use shared::{
    DashboardStats, EmployeeId, EmployeePayload, EmployeeResponse, TaskId, TaskPayload,
    TaskResponse,
};

use crate::{ClientConfig, ClientError, ClientResult};

/// Operations the views need from the backend
///
/// Updates address the record by the payload's own `id`.
#[async_trait]
pub trait TrackerApi: Send + Sync {
    async fn list_employees(&self) -> ClientResult<Vec<EmployeeResponse>>;
    async fn get_employee(&self, id: EmployeeId) -> ClientResult<EmployeeResponse>;
    async fn create_employee(&self, payload: &EmployeePayload) -> ClientResult<EmployeeResponse>;
    async fn update_employee(&self, payload: &EmployeePayload) -> ClientResult<()>;
    async fn delete_employee(&self, id: EmployeeId) -> ClientResult<()>;

    async fn list_tasks(&self, employee_id: Option<EmployeeId>) -> ClientResult<Vec<TaskResponse>>;
    async fn get_task(&self, id: TaskId) -> ClientResult<TaskResponse>;
    async fn create_task(&self, payload: &TaskPayload) -> ClientResult<TaskResponse>;
    async fn update_task(&self, payload: &TaskPayload) -> ClientResult<()>;
    async fn delete_task(&self, id: TaskId) -> ClientResult<()>;

    async fn dashboard(&self) -> ClientResult<DashboardStats>;
}

/// reqwest-backed [`TrackerApi`]
#[derive(Debug, Clone)]
pub struct HttpTrackerClient {
    client: Client,
    base_url: String,
}

impl HttpTrackerClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn fetch<T: DeserializeOwned>(request: RequestBuilder) -> ClientResult<T> {
        let response = Self::check(request.send().await?).await?;
        response.json().await.map_err(Into::into)
    }

    async fn execute(request: RequestBuilder) -> ClientResult<()> {
        Self::check(request.send().await?).await.map(|_| ())
    }

    /// Pass successes through, turn everything else into a [`ClientError`]
    async fn check(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::NOT_FOUND => Err(ClientError::NotFound),
            StatusCode::BAD_REQUEST => {
                let text = response.text().await?;
                match serde_json::from_str::<ProblemDetails>(&text) {
                    Ok(ProblemDetails {
                        errors: Some(errors),
                        ..
                    }) => Err(ClientError::Validation { errors }),
                    Ok(problem) => Err(ClientError::BadRequest(problem.title)),
                    Err(_) => Err(ClientError::BadRequest(text)),
                }
            }
            _ => {
                tracing::debug!(status = status.as_u16(), "Unexpected response status");
                Err(ClientError::Unexpected {
                    status: status.as_u16(),
                })
            }
        }
    }
}

#[async_trait]
impl TrackerApi for HttpTrackerClient {
    async fn list_employees(&self) -> ClientResult<Vec<EmployeeResponse>> {
        Self::fetch(self.client.get(self.url("employees"))).await
    }

    async fn get_employee(&self, id: EmployeeId) -> ClientResult<EmployeeResponse> {
        Self::fetch(self.client.get(self.url(&format!("employees/{id}")))).await
    }

    async fn create_employee(&self, payload: &EmployeePayload) -> ClientResult<EmployeeResponse> {
        Self::fetch(self.client.post(self.url("employees")).json(payload)).await
    }

    async fn update_employee(&self, payload: &EmployeePayload) -> ClientResult<()> {
        let url = self.url(&format!("employees/{}", payload.id));
        Self::execute(self.client.put(url).json(payload)).await
    }

    async fn delete_employee(&self, id: EmployeeId) -> ClientResult<()> {
        Self::execute(self.client.delete(self.url(&format!("employees/{id}")))).await
    }

    async fn list_tasks(&self, employee_id: Option<EmployeeId>) -> ClientResult<Vec<TaskResponse>> {
        let path = match employee_id {
            Some(id) => format!("tasks?employeeId={id}"),
            None => "tasks".to_string(),
        };
        Self::fetch(self.client.get(self.url(&path))).await
    }

    async fn get_task(&self, id: TaskId) -> ClientResult<TaskResponse> {
        Self::fetch(self.client.get(self.url(&format!("tasks/{id}")))).await
    }

    async fn create_task(&self, payload: &TaskPayload) -> ClientResult<TaskResponse> {
        Self::fetch(self.client.post(self.url("tasks")).json(payload)).await
    }

    async fn update_task(&self, payload: &TaskPayload) -> ClientResult<()> {
        let url = self.url(&format!("tasks/{}", payload.id));
        Self::execute(self.client.put(url).json(payload)).await
    }

    async fn delete_task(&self, id: TaskId) -> ClientResult<()> {
        Self::execute(self.client.delete(self.url(&format!("tasks/{id}")))).await
    }

    async fn dashboard(&self) -> ClientResult<DashboardStats> {
        Self::fetch(self.client.get(self.url("tasks/dashboard"))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = HttpTrackerClient::new(&ClientConfig::new("http://localhost:5001/api/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5001/api");
        assert_eq!(client.url("/tasks/3"), "http://localhost:5001/api/tasks/3");
        assert_eq!(client.url("employees"), "http://localhost:5001/api/employees");
    }
}
