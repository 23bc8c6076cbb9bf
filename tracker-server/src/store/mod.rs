//! In-memory stores
//!
//! Each store owns a [`RecordTable`]: an id → record map plus the insertion
//! order. Stores are plain values; [`crate::core::ServerState`] wraps each one
//! in its own lock so that id assignment + insert and lookup + mutation run
//! as one critical section.

pub mod employee;
pub mod seed;
pub mod task;

pub use employee::EmployeeStore;
pub use task::TaskStore;

use shared::{AppError, Employee, TaskItem};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use validator::ValidationErrors;

/// Kind of record a [`RepoError::NotFound`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Employee,
    Task,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Employee => f.write_str("Employee"),
            Self::Task => f.write_str("Task"),
        }
    }
}

/// Store error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{resource} {id} not found")]
    NotFound { resource: Resource, id: i32 },

    #[error("route id {path_id} does not match body id {body_id}")]
    IdMismatch { path_id: i32, body_id: i32 },

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound {
                resource: Resource::Employee,
                id,
            } => AppError::employee_not_found(id),
            RepoError::NotFound {
                resource: Resource::Task,
                id,
            } => AppError::task_not_found(id),
            RepoError::IdMismatch { path_id, body_id } => AppError::id_mismatch(path_id, body_id),
            RepoError::Validation(errors) => errors.into(),
        }
    }
}

/// Result type for store operations
pub type RepoResult<T> = Result<T, RepoError>;

/// A record addressable by its server-assigned id
pub trait Record {
    fn id(&self) -> i32;
}

impl Record for Employee {
    fn id(&self) -> i32 {
        self.id
    }
}

impl Record for TaskItem {
    fn id(&self) -> i32 {
        self.id
    }
}

/// Id → record map with insertion order
#[derive(Debug, Clone)]
pub struct RecordTable<T> {
    rows: HashMap<i32, T>,
    order: Vec<i32>,
}

impl<T> Default for RecordTable<T> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T: Record> RecordTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Highest existing id + 1, or 1 when empty
    pub fn next_id(&self) -> i32 {
        self.order.iter().max().map_or(1, |max| max + 1)
    }

    /// Insert or replace; a replaced record keeps its original position
    pub fn insert(&mut self, row: T) {
        let id = row.id();
        if self.rows.insert(id, row).is_none() {
            self.order.push(id);
        }
    }

    pub fn get(&self, id: i32) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: i32) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    pub fn remove(&mut self, id: i32) -> Option<T> {
        let row = self.rows.remove(&id)?;
        self.order.retain(|existing| *existing != id);
        Some(row)
    }

    /// Records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(|id| self.rows.get(id))
    }
}

impl<T: Record> FromIterator<T> for RecordTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Self::new();
        for row in iter {
            table.insert(row);
        }
        table
    }
}
