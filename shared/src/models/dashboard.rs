//! Dashboard statistics shape

use serde::{Deserialize, Serialize};

/// Aggregate counts over the full task list
///
/// Groupings keep first-occurrence order of each distinct value in the
/// scanned list, not declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub in_progress_tasks: usize,
    pub overdue_tasks: usize,
    pub tasks_by_priority: Vec<PriorityCount>,
    pub tasks_by_status: Vec<StatusCount>,
}

/// One `tasksByPriority` entry; `priority` is the variant name (`"High"`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityCount {
    pub priority: String,
    pub count: usize,
}

/// One `tasksByStatus` entry; `status` is the variant name (`"InProgress"`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}
