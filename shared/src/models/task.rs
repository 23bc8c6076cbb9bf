//! Task Model
//!
//! [`TaskStatus`] and [`TaskPriority`] travel as integer codes. Their display
//! text lives here, in [`TaskStatus::label`] / [`TaskPriority::label`], and is
//! the single lookup used by every view.

use super::employee::EmployeeId;
use super::serde_helpers;
use super::validation::required;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Task ID type
pub type TaskId = i32;

/// Returned when an integer code or name does not match any variant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

// =============================================================================
// Status
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum TaskStatus {
    #[default]
    NotStarted = 0,
    InProgress = 1,
    Completed = 2,
    OnHold = 3,
    Cancelled = 4,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 5] = [
        Self::NotStarted,
        Self::InProgress,
        Self::Completed,
        Self::OnHold,
        Self::Cancelled,
    ];

    #[inline]
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    /// Variant name, used as the dashboard group key
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NotStarted => "NotStarted",
            Self::InProgress => "InProgress",
            Self::Completed => "Completed",
            Self::OnHold => "OnHold",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Human-readable label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::OnHold => "On Hold",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Kebab-case identifier (`not-started`, `in-progress`, ...)
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::OnHold => "on-hold",
            Self::Cancelled => "cancelled",
        }
    }

    /// Rough completion percentage shown next to a task
    pub const fn progress(&self) -> u8 {
        match self {
            Self::NotStarted | Self::Cancelled => 0,
            Self::OnHold => 25,
            Self::InProgress => 50,
            Self::Completed => 100,
        }
    }
}

impl From<TaskStatus> for u8 {
    #[inline]
    fn from(status: TaskStatus) -> Self {
        status.code()
    }
}

impl TryFrom<u8> for TaskStatus {
    type Error = UnknownVariant;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|s| s.code() == value)
            .ok_or_else(|| UnknownVariant {
                kind: "task status",
                value: value.to_string(),
            })
    }
}

/// Accepts the code, the variant name, the label or the slug (case-insensitive)
impl FromStr for TaskStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u8>() {
            return Self::try_from(code);
        }
        Self::ALL
            .into_iter()
            .find(|v| {
                v.name().eq_ignore_ascii_case(s)
                    || v.label().eq_ignore_ascii_case(s)
                    || v.slug().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| UnknownVariant {
                kind: "task status",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Priority
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum TaskPriority {
    Low = 1,
    #[default]
    Medium = 2,
    High = 3,
    Critical = 4,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    #[inline]
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// Priority names are already human-readable
    pub const fn label(&self) -> &'static str {
        self.name()
    }
}

impl From<TaskPriority> for u8 {
    #[inline]
    fn from(priority: TaskPriority) -> Self {
        priority.code()
    }
}

impl TryFrom<u8> for TaskPriority {
    type Error = UnknownVariant;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|p| p.code() == value)
            .ok_or_else(|| UnknownVariant {
                kind: "task priority",
                value: value.to_string(),
            })
    }
}

impl FromStr for TaskPriority {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u8>() {
            return Self::try_from(code);
        }
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant {
                kind: "task priority",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// TaskItem
// =============================================================================

/// Stored task record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    pub created_date: DateTime<Utc>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_date: Option<DateTime<Utc>>,
    /// Not checked against the employee store
    pub employee_id: EmployeeId,
}

impl TaskItem {
    /// Due before `now` and not completed
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        self.status != TaskStatus::Completed && self.due_date.is_some_and(|due| due < now)
    }

    pub fn is_overdue(&self) -> bool {
        self.is_overdue_at(Utc::now())
    }

    /// Case-insensitive match against title and description
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.title.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }

    pub fn to_response(&self, now: DateTime<Utc>) -> TaskResponse {
        TaskResponse {
            is_overdue: self.is_overdue_at(now),
            task: self.clone(),
        }
    }
}

/// Create / update task payload
///
/// `createdDate`, `completedDate` and `isOverdue` are accepted and ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    #[serde(default)]
    pub id: TaskId,
    #[serde(default, deserialize_with = "serde_helpers::string_or_empty")]
    #[validate(
        custom(function = "required"),
        length(max = 200, message = "max length exceeded")
    )]
    pub title: String,
    #[serde(default, deserialize_with = "serde_helpers::string_or_empty")]
    #[validate(length(max = 1000, message = "max length exceeded"))]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default, with = "serde_helpers::flexible_datetime")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub employee_id: EmployeeId,
}

impl From<&TaskItem> for TaskPayload {
    fn from(task: &TaskItem) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            priority: task.priority,
            due_date: task.due_date,
            employee_id: task.employee_id,
        }
    }
}

/// Task as returned by the API, with the derived `isOverdue`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    #[serde(flatten)]
    pub task: TaskItem,
    pub is_overdue: bool,
}
