// Transaction port for atomic check-then-insert sequences

use crate::domain::{BoardId, NewBoard, NewStatus, NewTask, StatusId, TaskId};
use crate::error::Result;
use async_trait::async_trait;

/// Transaction trait for atomic multi-step operations
#[async_trait]
pub trait Transaction: Send {
    /// Commit the transaction
    async fn commit(self: Box<Self>) -> Result<()>;

    /// Rollback the transaction
    async fn rollback(self: Box<Self>) -> Result<()>;
}

/// Store that can open a transaction
#[async_trait]
pub trait TransactionalStore: Send + Sync {
    /// Begin a new transaction
    async fn begin_transaction(&self) -> Result<Box<dyn StoreTransaction>>;
}

/// Creation-path operations within a transaction.
///
/// Uniqueness pre-checks, the next-position read and the insert that uses it
/// all see the same snapshot.
#[async_trait]
pub trait StoreTransaction: Transaction {
    async fn board_exists(&mut self, id: BoardId) -> Result<bool>;

    async fn board_title_exists(&mut self, title: &str) -> Result<bool>;

    async fn insert_board(&mut self, board: &NewBoard) -> Result<BoardId>;

    async fn status_key_exists(&mut self, board_id: BoardId, status_key: &str) -> Result<bool>;

    async fn status_label_exists(&mut self, board_id: BoardId, status_label: &str)
        -> Result<bool>;

    /// Highest lane position on the board, `None` if it has no lanes
    async fn max_status_position(&mut self, board_id: BoardId) -> Result<Option<i64>>;

    async fn insert_status(&mut self, status: &NewStatus, position: i64) -> Result<StatusId>;

    /// Highest task position on the board, `None` if it has no tasks
    async fn max_task_position(&mut self, board_id: BoardId) -> Result<Option<i64>>;

    async fn insert_task(&mut self, task: &NewTask, position: i64) -> Result<TaskId>;
}
