// Status Repository Port (Interface)

use crate::domain::{BoardId, Status, StatusChanges, StatusId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for lane reads and in-place writes
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Lanes of a board ordered by position, then insertion order
    async fn list_for_board(&self, board_id: BoardId) -> Result<Vec<Status>>;

    /// Find lane by ID
    async fn find_by_id(&self, id: StatusId) -> Result<Option<Status>>;

    /// Whether another lane on the board already uses `label`
    async fn label_exists(
        &self,
        board_id: BoardId,
        label: &str,
        excluding: Option<StatusId>,
    ) -> Result<bool>;

    /// Apply a partial update. Returns false if the lane does not exist.
    async fn update(&self, id: StatusId, changes: &StatusChanges) -> Result<bool>;

    /// Delete lane. Returns false if absent.
    async fn delete(&self, id: StatusId) -> Result<bool>;

    /// Tasks on the board tagged with `status_key`
    async fn count_tasks_with_key(&self, board_id: BoardId, status_key: &str) -> Result<i64>;
}
