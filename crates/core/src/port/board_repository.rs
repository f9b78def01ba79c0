// Board Repository Port (Interface)

use crate::domain::{Board, BoardId, BoardSummary, NewBoard};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for Board reads and in-place writes.
///
/// Board creation goes through [`crate::port::StoreTransaction`] because it
/// also seeds the default lanes.
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// All boards, newest first, with task counts
    async fn list(&self) -> Result<Vec<BoardSummary>>;

    /// Find board by ID
    async fn find_by_id(&self, id: BoardId) -> Result<Option<Board>>;

    /// Whether another board already uses `title` (exact match)
    async fn title_exists(&self, title: &str, excluding: Option<BoardId>) -> Result<bool>;

    /// Replace title and description. Returns false if the board does not exist.
    async fn update(&self, id: BoardId, board: &NewBoard) -> Result<bool>;

    /// Delete board (lanes and tasks cascade). Returns false if absent.
    async fn delete(&self, id: BoardId) -> Result<bool>;

    /// Number of tasks on the board
    async fn count_tasks(&self, id: BoardId) -> Result<i64>;
}
