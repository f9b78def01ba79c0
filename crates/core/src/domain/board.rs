// Board Domain Model

use super::status::Status;
use serde::{Deserialize, Serialize};

/// Board ID (storage-generated)
pub type BoardId = i64;

pub const TITLE_MAX_LEN: usize = 255;
pub const DESCRIPTION_MAX_LEN: usize = 1000;

/// Board Entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    pub description: Option<String>,
    pub created_at: i64, // epoch ms
}

/// Validated board fields, used for both create and full update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBoard {
    pub title: String,
    pub description: Option<String>,
}

/// Board annotated with the number of tasks it owns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSummary {
    #[serde(flatten)]
    pub board: Board,
    pub task_count: i64,
}

/// Board with its lanes (ordered by position) and task count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDetail {
    #[serde(flatten)]
    pub board: Board,
    pub task_count: i64,
    pub statuses: Vec<Status>,
}
