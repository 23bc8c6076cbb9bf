//! Task list with filters, the add/edit form and quick completion

use std::fmt::Write;
use std::sync::Arc;

use shared::{
    EmployeeId, EmployeeResponse, TaskId, TaskPayload, TaskPriority, TaskResponse, TaskStatus,
};

use super::{format_date, logged};
use crate::{ClientError, ClientResult, TrackerApi};

/// Display name for tasks whose employee is not in the loaded list
pub const UNASSIGNED: &str = "Unassigned";

/// Active list filters; `None` means "all"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub search: String,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub employee_id: Option<EmployeeId>,
}

impl TaskFilter {
    pub fn matches(&self, item: &TaskResponse) -> bool {
        let task = &item.task;
        task.matches_search(&self.search)
            && self.status.is_none_or(|s| task.status == s)
            && self.priority.is_none_or(|p| task.priority == p)
            && self.employee_id.is_none_or(|id| task.employee_id == id)
    }
}

pub struct TaskListView {
    api: Arc<dyn TrackerApi>,
    tasks: Vec<TaskResponse>,
    employees: Vec<EmployeeResponse>,
    pub filter: TaskFilter,
}

impl TaskListView {
    pub fn new(api: Arc<dyn TrackerApi>) -> Self {
        Self {
            api,
            tasks: Vec::new(),
            employees: Vec::new(),
            filter: TaskFilter::default(),
        }
    }

    pub fn tasks(&self) -> &[TaskResponse] {
        &self.tasks
    }

    pub fn employees(&self) -> &[EmployeeResponse] {
        &self.employees
    }

    /// Tasks passing every active filter, in server order
    pub fn filtered(&self) -> Vec<&TaskResponse> {
        self.tasks.iter().filter(|t| self.filter.matches(t)).collect()
    }

    pub fn find(&self, id: TaskId) -> Option<&TaskResponse> {
        self.tasks.iter().find(|t| t.task.id == id)
    }

    /// "First Last" for a loaded employee, otherwise [`UNASSIGNED`]
    pub fn employee_name(&self, employee_id: EmployeeId) -> String {
        self.employees
            .iter()
            .find(|e| e.employee.id == employee_id)
            .map(|e| e.employee.full_name())
            .unwrap_or_else(|| UNASSIGNED.to_string())
    }

    /// Reload tasks and the employee list used for names
    pub async fn load(&mut self) -> ClientResult<()> {
        let tasks = logged("load tasks", self.api.list_tasks(None).await);
        let employees = logged("load employees", self.api.list_employees().await);

        let tasks = tasks.map(|tasks| self.tasks = tasks);
        let employees = employees.map(|employees| self.employees = employees);
        tasks.and(employees)
    }

    async fn reload_tasks(&mut self) -> ClientResult<()> {
        let tasks = logged("load tasks", self.api.list_tasks(None).await)?;
        self.tasks = tasks;
        Ok(())
    }

    /// Form payload for editing `id`, prefilled from the loaded list
    pub fn edit_form(&self, id: TaskId) -> ClientResult<TaskPayload> {
        self.find(id)
            .map(|t| TaskPayload::from(&t.task))
            .ok_or(ClientError::NotFound)
    }

    /// Submit the form: id 0 creates, anything else updates
    pub async fn save(&mut self, payload: TaskPayload) -> ClientResult<()> {
        if payload.id == 0 {
            logged("create task", self.api.create_task(&payload).await)?;
        } else {
            logged("update task", self.api.update_task(&payload).await)?;
        }
        self.reload_tasks().await
    }

    /// Permanent delete; confirmation is up to the caller
    pub async fn delete(&mut self, id: TaskId) -> ClientResult<()> {
        logged("delete task", self.api.delete_task(id).await)?;
        self.reload_tasks().await
    }

    /// Resubmit a loaded task with status Completed
    pub async fn mark_completed(&mut self, id: TaskId) -> ClientResult<()> {
        let mut payload = self.edit_form(id)?;
        payload.status = TaskStatus::Completed;
        logged("complete task", self.api.update_task(&payload).await)?;
        self.reload_tasks().await
    }

    pub fn render(&self) -> String {
        let tasks = self.filtered();
        let mut out = String::from("Tasks\n\n");
        if tasks.is_empty() {
            out.push_str("  No tasks match the current filters.\n");
            return out;
        }
        for item in tasks {
            let task = &item.task;
            let _ = write!(
                out,
                "  #{:<4} {:<40} {:<12} {:<9} {:>3}%  {:<20}",
                task.id,
                task.title,
                task.status.label(),
                task.priority.label(),
                task.status.progress(),
                self.employee_name(task.employee_id)
            );
            if task.due_date.is_some() {
                let _ = write!(out, " due {}", format_date(task.due_date));
            }
            if item.is_overdue {
                out.push_str(" OVERDUE");
            }
            out.push('\n');
        }
        out
    }
}
