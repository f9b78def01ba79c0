// Task Repository Port (Interface)

use crate::domain::{BoardId, TaskChanges, TaskId, TaskView};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for task reads and in-place writes.
///
/// Listings are ordered by position ascending, then newest first.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Tasks across all boards
    async fn list_all(&self) -> Result<Vec<TaskView>>;

    /// Tasks of one board
    async fn list_for_board(&self, board_id: BoardId) -> Result<Vec<TaskView>>;

    /// Find task by ID
    async fn find_by_id(&self, id: TaskId) -> Result<Option<TaskView>>;

    /// Apply a partial update. Returns false if the task does not exist.
    async fn update(&self, id: TaskId, changes: &TaskChanges) -> Result<bool>;

    /// Delete task. Returns false if absent.
    async fn delete(&self, id: TaskId) -> Result<bool>;
}
