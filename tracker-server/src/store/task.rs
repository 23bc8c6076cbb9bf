//! Task Store

use super::{RecordTable, RepoError, RepoResult, Resource};
use chrono::{DateTime, Utc};
use shared::{
    DashboardStats, EmployeeId, PriorityCount, StatusCount, TaskId, TaskItem, TaskPayload,
    TaskPriority, TaskStatus,
};
use validator::Validate;

#[derive(Debug, Default)]
pub struct TaskStore {
    table: RecordTable<TaskItem>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = TaskItem>) -> Self {
        Self {
            table: records.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Tasks newest first, optionally only those assigned to `employee_id`
    ///
    /// Tasks created at the same instant keep storage order.
    pub fn list(&self, employee_id: Option<EmployeeId>) -> Vec<TaskItem> {
        let mut tasks: Vec<TaskItem> = self
            .table
            .iter()
            .filter(|t| employee_id.is_none_or(|id| t.employee_id == id))
            .cloned()
            .collect();
        tasks.sort_by(|a, b| b.created_date.cmp(&a.created_date));
        tasks
    }

    pub fn get(&self, id: TaskId) -> RepoResult<TaskItem> {
        self.table.get(id).cloned().ok_or(RepoError::NotFound {
            resource: Resource::Task,
            id,
        })
    }

    /// Create a new task with a fresh id and `created_date = now`
    pub fn create(&mut self, payload: TaskPayload, now: DateTime<Utc>) -> RepoResult<TaskItem> {
        payload.validate()?;

        let task = TaskItem {
            id: self.table.next_id(),
            title: payload.title,
            description: payload.description,
            status: payload.status,
            priority: payload.priority,
            created_date: now,
            due_date: payload.due_date,
            completed_date: None,
            employee_id: payload.employee_id,
        };
        self.table.insert(task.clone());
        Ok(task)
    }

    /// Update a task in place
    ///
    /// Moving to Completed stamps `completed_date` only when it was unset;
    /// any other status clears it.
    pub fn update(&mut self, id: TaskId, payload: TaskPayload, now: DateTime<Utc>) -> RepoResult<()> {
        if payload.id != id {
            return Err(RepoError::IdMismatch {
                path_id: id,
                body_id: payload.id,
            });
        }

        let existing = self.table.get_mut(id).ok_or(RepoError::NotFound {
            resource: Resource::Task,
            id,
        })?;

        payload.validate()?;

        existing.title = payload.title;
        existing.description = payload.description;
        existing.status = payload.status;
        existing.priority = payload.priority;
        existing.due_date = payload.due_date;
        existing.employee_id = payload.employee_id;

        if payload.status == TaskStatus::Completed {
            existing.completed_date.get_or_insert(now);
        } else {
            existing.completed_date = None;
        }
        Ok(())
    }

    /// Hard delete
    pub fn delete(&mut self, id: TaskId) -> RepoResult<()> {
        self.table
            .remove(id)
            .map(|_| ())
            .ok_or(RepoError::NotFound {
                resource: Resource::Task,
                id,
            })
    }

    /// Aggregate counts over every task, in storage order
    pub fn dashboard(&self, now: DateTime<Utc>) -> DashboardStats {
        let mut stats = DashboardStats::default();
        let mut by_priority: Vec<(TaskPriority, usize)> = Vec::new();
        let mut by_status: Vec<(TaskStatus, usize)> = Vec::new();

        for task in self.table.iter() {
            stats.total_tasks += 1;
            match task.status {
                TaskStatus::Completed => stats.completed_tasks += 1,
                TaskStatus::InProgress => stats.in_progress_tasks += 1,
                _ => {}
            }
            if task.is_overdue_at(now) {
                stats.overdue_tasks += 1;
            }
            bump(&mut by_priority, task.priority);
            bump(&mut by_status, task.status);
        }

        stats.tasks_by_priority = by_priority
            .into_iter()
            .map(|(priority, count)| PriorityCount {
                priority: priority.name().to_string(),
                count,
            })
            .collect();
        stats.tasks_by_status = by_status
            .into_iter()
            .map(|(status, count)| StatusCount {
                status: status.name().to_string(),
                count,
            })
            .collect();
        stats
    }
}

/// Increment `key`'s bucket, appending it on first sight
fn bump<K: PartialEq>(groups: &mut Vec<(K, usize)>, key: K) {
    match groups.iter_mut().find(|(k, _)| *k == key) {
        Some((_, count)) => *count += 1,
        None => groups.push((key, 1)),
    }
}
