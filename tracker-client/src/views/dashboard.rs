//! Dashboard: headline counts plus the most recent tasks

use std::fmt::Write;
use std::sync::Arc;

use shared::{DashboardStats, TaskResponse};

use super::{format_date, logged};
use crate::{ClientResult, TrackerApi};

/// Tasks shown under "Recent Tasks"
pub const RECENT_TASK_COUNT: usize = 5;

pub struct DashboardView {
    api: Arc<dyn TrackerApi>,
    stats: Option<DashboardStats>,
    recent_tasks: Vec<TaskResponse>,
}

impl DashboardView {
    pub fn new(api: Arc<dyn TrackerApi>) -> Self {
        Self {
            api,
            stats: None,
            recent_tasks: Vec::new(),
        }
    }

    pub fn stats(&self) -> Option<&DashboardStats> {
        self.stats.as_ref()
    }

    pub fn recent_tasks(&self) -> &[TaskResponse] {
        &self.recent_tasks
    }

    /// Fetch stats and the task list; each part keeps its old value on failure
    pub async fn load(&mut self) -> ClientResult<()> {
        let stats = logged("load dashboard stats", self.api.dashboard().await);
        let tasks = logged("load recent tasks", self.api.list_tasks(None).await);

        let stats = stats.map(|stats| self.stats = Some(stats));
        let tasks = tasks.map(|mut tasks| {
            tasks.truncate(RECENT_TASK_COUNT);
            self.recent_tasks = tasks;
        });
        stats.and(tasks)
    }

    pub fn render(&self) -> String {
        let mut out = String::from("Employee Task Tracker Dashboard\n\n");

        if let Some(stats) = &self.stats {
            let _ = writeln!(out, "  Total Tasks   {:>4}", stats.total_tasks);
            let _ = writeln!(out, "  Completed     {:>4}", stats.completed_tasks);
            let _ = writeln!(out, "  In Progress   {:>4}", stats.in_progress_tasks);
            let _ = writeln!(out, "  Overdue       {:>4}", stats.overdue_tasks);
            out.push('\n');
        }

        out.push_str("Recent Tasks\n");
        if self.recent_tasks.is_empty() {
            out.push_str("  No tasks found. Create your first task!\n");
            return out;
        }
        for item in &self.recent_tasks {
            let task = &item.task;
            let _ = write!(
                out,
                "  #{:<4} {:<40} [{}] {}",
                task.id,
                task.title,
                task.priority.label(),
                task.status.label()
            );
            if task.due_date.is_some() {
                let _ = write!(out, "  Due: {}", format_date(task.due_date));
            }
            out.push('\n');
        }
        out
    }
}
