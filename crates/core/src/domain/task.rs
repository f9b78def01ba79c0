// Task Domain Model

use super::board::BoardId;
use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Task ID (storage-generated)
pub type TaskId = i64;

/// Status key assigned when the request names none
pub const DEFAULT_STATUS_KEY: &str = "todo";

/// Task Priority (stored upper-case, accepted in any case)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "LOW"),
            Priority::Medium => write!(f, "MEDIUM"),
            Priority::High => write!(f, "HIGH"),
        }
    }
}

impl FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(DomainError::InvalidPriority(s.to_string())),
        }
    }
}

/// Task Entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub board_id: BoardId,
    /// Soft reference to a lane key on the same board (never checked)
    pub status_key: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub position: i64,
    pub created_at: i64, // epoch ms
    pub updated_at: i64, // epoch ms
}

/// Task joined with display fields of its board and lane
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskView {
    #[serde(flatten)]
    pub task: Task,
    pub board_title: String,
    /// `None` when no lane on the board carries the task's key
    pub status_label: Option<String>,
    pub status_color: Option<String>,
}

/// Validated fields for a new task; position is assigned on insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub board_id: BoardId,
    pub status_key: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
}

/// Partial task update; outer `None` leaves the column untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    pub title: Option<String>,
    /// `Some(None)` clears the description
    pub description: Option<Option<String>>,
    pub status_key: Option<String>,
    pub priority: Option<Priority>,
    pub position: Option<i64>,
}

impl TaskChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status_key.is_none()
            && self.priority.is_none()
            && self.position.is_none()
    }
}
