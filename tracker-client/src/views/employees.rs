//! Employee list with search and the add/edit form actions

use std::fmt::Write;
use std::sync::Arc;

use shared::{EmployeeId, EmployeePayload, EmployeeResponse};

use super::{format_date, logged};
use crate::{ClientError, ClientResult, TrackerApi};

pub struct EmployeeListView {
    api: Arc<dyn TrackerApi>,
    employees: Vec<EmployeeResponse>,
    search_term: String,
}

impl EmployeeListView {
    pub fn new(api: Arc<dyn TrackerApi>) -> Self {
        Self {
            api,
            employees: Vec::new(),
            search_term: String::new(),
        }
    }

    pub fn employees(&self) -> &[EmployeeResponse] {
        &self.employees
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Employees matching the current search term
    pub fn filtered(&self) -> Vec<&EmployeeResponse> {
        self.employees
            .iter()
            .filter(|e| e.employee.matches_search(&self.search_term))
            .collect()
    }

    pub fn find(&self, id: EmployeeId) -> Option<&EmployeeResponse> {
        self.employees.iter().find(|e| e.employee.id == id)
    }

    pub async fn load(&mut self) -> ClientResult<()> {
        let employees = logged("load employees", self.api.list_employees().await)?;
        self.employees = employees;
        Ok(())
    }

    /// Form payload for editing `id`, prefilled from the loaded list
    pub fn edit_form(&self, id: EmployeeId) -> ClientResult<EmployeePayload> {
        self.find(id)
            .map(|e| EmployeePayload::from(&e.employee))
            .ok_or(ClientError::NotFound)
    }

    /// Submit the form: id 0 creates, anything else updates
    pub async fn save(&mut self, payload: EmployeePayload) -> ClientResult<()> {
        if payload.id == 0 {
            logged("create employee", self.api.create_employee(&payload).await)?;
        } else {
            logged("update employee", self.api.update_employee(&payload).await)?;
        }
        self.load().await
    }

    /// Soft delete; confirmation is up to the caller
    pub async fn delete(&mut self, id: EmployeeId) -> ClientResult<()> {
        logged("delete employee", self.api.delete_employee(id).await)?;
        self.load().await
    }

    pub fn render(&self) -> String {
        let employees = self.filtered();
        let mut out = String::from("Employees\n\n");
        if employees.is_empty() {
            out.push_str("  No employees found.\n");
            return out;
        }
        for item in employees {
            let e = &item.employee;
            let _ = writeln!(
                out,
                "  #{:<4} {:<24} {:<32} {:<16} {:<24} hired {}",
                e.id,
                item.full_name,
                e.email,
                e.department,
                e.position,
                format_date(Some(e.hire_date))
            );
        }
        out
    }
}
