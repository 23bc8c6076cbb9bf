//! Demo data loaded at startup when `SEED_DEMO_DATA` is on
//!
//! Dates are relative to `now`.

use chrono::{DateTime, Duration, Months, Utc};
use shared::{Employee, TaskItem, TaskPriority, TaskStatus};

fn months_ago(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(months)).unwrap_or(now)
}

fn employee(
    id: i32,
    (first_name, last_name): (&str, &str),
    department: &str,
    position: &str,
    hire_date: DateTime<Utc>,
) -> Employee {
    Employee {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}.{}@company.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        department: department.to_string(),
        position: position.to_string(),
        hire_date,
        is_active: true,
    }
}

pub fn demo_employees(now: DateTime<Utc>) -> Vec<Employee> {
    vec![
        employee(1, ("John", "Doe"), "Engineering", "Software Developer", months_ago(now, 24)),
        employee(2, ("Jane", "Smith"), "Marketing", "Marketing Manager", months_ago(now, 12)),
        employee(3, ("Mike", "Johnson"), "Sales", "Sales Representative", months_ago(now, 6)),
    ]
}

pub fn demo_tasks(now: DateTime<Utc>) -> Vec<TaskItem> {
    vec![
        TaskItem {
            id: 1,
            title: "Implement User Authentication".into(),
            description: "Add login and registration functionality to the application".into(),
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            created_date: now - Duration::days(5),
            due_date: Some(now + Duration::days(7)),
            completed_date: None,
            employee_id: 1,
        },
        TaskItem {
            id: 2,
            title: "Create Marketing Campaign".into(),
            description: "Design and launch Q4 marketing campaign".into(),
            status: TaskStatus::NotStarted,
            priority: TaskPriority::Medium,
            created_date: now - Duration::days(3),
            due_date: Some(now + Duration::days(14)),
            completed_date: None,
            employee_id: 2,
        },
        TaskItem {
            id: 3,
            title: "Follow up with leads".into(),
            description: "Contact potential customers from last week's trade show".into(),
            status: TaskStatus::Completed,
            priority: TaskPriority::High,
            created_date: now - Duration::days(7),
            due_date: Some(now - Duration::days(2)),
            completed_date: Some(now - Duration::days(1)),
            employee_id: 3,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{EmployeeStore, TaskStore};

    #[test]
    fn test_seeded_stores() {
        let now = Utc::now();
        let employees = EmployeeStore::from_records(demo_employees(now));
        let tasks = TaskStore::from_records(demo_tasks(now));

        assert_eq!(employees.list_active().len(), 3);
        assert_eq!(
            employees.get_active(1).unwrap().email,
            "john.doe@company.com"
        );

        let stats = tasks.dashboard(now);
        assert_eq!(stats.total_tasks, 3);
        assert_eq!(stats.completed_tasks, 1);
        assert_eq!(stats.in_progress_tasks, 1);
        assert_eq!(stats.overdue_tasks, 0);

        // newest first
        let ids: Vec<_> = tasks.list(None).into_iter().map(|t| t.id).collect();
        assert_eq!(ids, [2, 1, 3]);
    }
}
