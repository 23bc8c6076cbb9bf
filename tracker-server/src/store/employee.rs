//! Employee Store

use super::{RecordTable, RepoError, RepoResult, Resource};
use chrono::{DateTime, Utc};
use shared::{Employee, EmployeeId, EmployeePayload};
use validator::Validate;

#[derive(Debug, Default)]
pub struct EmployeeStore {
    table: RecordTable<Employee>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = Employee>) -> Self {
        Self {
            table: records.into_iter().collect(),
        }
    }

    /// Number of records, soft-deleted included
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Active employees in storage order
    pub fn list_active(&self) -> Vec<Employee> {
        self.table.iter().filter(|e| e.is_active).cloned().collect()
    }

    /// Find an active employee by id
    pub fn get_active(&self, id: EmployeeId) -> RepoResult<Employee> {
        self.table
            .get(id)
            .filter(|e| e.is_active)
            .cloned()
            .ok_or(RepoError::NotFound {
                resource: Resource::Employee,
                id,
            })
    }

    /// Create a new employee
    ///
    /// The id is assigned here, `hire_date` is `now` and the record starts active.
    pub fn create(&mut self, payload: EmployeePayload, now: DateTime<Utc>) -> RepoResult<Employee> {
        payload.validate()?;

        let employee = Employee {
            id: self.table.next_id(),
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            department: payload.department,
            position: payload.position,
            hire_date: now,
            is_active: true,
        };
        self.table.insert(employee.clone());
        Ok(employee)
    }

    /// Update an employee, active or not
    ///
    /// Only the name, email, department and position are copied; id,
    /// `hire_date` and `is_active` are never touched.
    pub fn update(&mut self, id: EmployeeId, payload: EmployeePayload) -> RepoResult<()> {
        if payload.id != id {
            return Err(RepoError::IdMismatch {
                path_id: id,
                body_id: payload.id,
            });
        }

        let existing = self.table.get_mut(id).ok_or(RepoError::NotFound {
            resource: Resource::Employee,
            id,
        })?;

        payload.validate()?;

        existing.first_name = payload.first_name;
        existing.last_name = payload.last_name;
        existing.email = payload.email;
        existing.department = payload.department;
        existing.position = payload.position;
        Ok(())
    }

    /// Soft delete: the record stays but drops out of list/get
    pub fn deactivate(&mut self, id: EmployeeId) -> RepoResult<()> {
        let existing = self.table.get_mut(id).ok_or(RepoError::NotFound {
            resource: Resource::Employee,
            id,
        })?;
        existing.is_active = false;
        Ok(())
    }
}
