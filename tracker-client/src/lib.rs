//! Task Tracker Client
//!
//! - [`HttpTrackerClient`] - reqwest client for the REST API, behind the
//!   [`TrackerApi`] trait
//! - [`views`] - dashboard, employee and task view-models
//! - [`ClientConfig`] - base URL and timeout from the environment

pub mod config;
pub mod error;
pub mod http;
pub mod views;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpTrackerClient, TrackerApi};
pub use views::{DashboardView, EmployeeListView, TaskFilter, TaskListView};
