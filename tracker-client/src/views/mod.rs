//! View-models over [`TrackerApi`](crate::TrackerApi)
//!
//! Each view owns the data it displays. Loads and mutations report failures
//! with `tracing::error!` and leave the previous data in place; every
//! successful mutation reloads the list.

pub mod dashboard;
pub mod employees;
pub mod tasks;

pub use dashboard::DashboardView;
pub use employees::EmployeeListView;
pub use tasks::{TaskFilter, TaskListView};

use chrono::{DateTime, Utc};

use crate::ClientResult;

/// Log a failed call and hand the result back
fn logged<T>(action: &'static str, result: ClientResult<T>) -> ClientResult<T> {
    if let Err(e) = &result {
        tracing::error!(action, error = %e, "Request failed");
    }
    result
}

fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
