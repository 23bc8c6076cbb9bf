use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Instant;

use crate::core::Config;
use crate::store::{EmployeeStore, TaskStore, seed};

/// Server state handed to every handler
///
/// Cloning is cheap: each store sits behind its own `Arc<RwLock<_>>`.
/// Handlers take the lock, do their whole read-modify-write, and release it
/// before returning; no lock is ever held across an `.await`.
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | immutable configuration |
/// | employees | Arc<RwLock<EmployeeStore>> | employee records |
/// | tasks | Arc<RwLock<TaskStore>> | task records |
/// | started_at | Instant | process start, for uptime |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub employees: Arc<RwLock<EmployeeStore>>,
    pub tasks: Arc<RwLock<TaskStore>>,
    pub started_at: Instant,
}

impl ServerState {
    pub fn new(config: Config, employees: EmployeeStore, tasks: TaskStore) -> Self {
        Self {
            config,
            employees: Arc::new(RwLock::new(employees)),
            tasks: Arc::new(RwLock::new(tasks)),
            started_at: Instant::now(),
        }
    }

    /// Build the state, loading the demo records when `seed_demo_data` is on
    pub fn initialize(config: &Config) -> Self {
        if !config.seed_demo_data {
            return Self::empty(config.clone());
        }

        let now = Utc::now();
        let employees = EmployeeStore::from_records(seed::demo_employees(now));
        let tasks = TaskStore::from_records(seed::demo_tasks(now));
        tracing::info!(
            employees = employees.len(),
            tasks = tasks.len(),
            "Loaded demo data"
        );
        Self::new(config.clone(), employees, tasks)
    }

    /// State with both stores empty
    pub fn empty(config: Config) -> Self {
        Self::new(config, EmployeeStore::new(), TaskStore::new())
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
