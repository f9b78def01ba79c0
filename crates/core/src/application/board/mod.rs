// Board Service - board lifecycle and default lanes

pub mod request;

pub use request::BoardRequest;

use crate::domain::{BoardDetail, BoardId, BoardSummary, DEFAULT_STATUSES};
use crate::error::{AppError, Result};
use crate::port::{BoardRepository, StatusRepository, TransactionalStore};
use std::sync::Arc;
use tracing::info;

pub struct BoardService {
    boards: Arc<dyn BoardRepository>,
    statuses: Arc<dyn StatusRepository>,
    store: Arc<dyn TransactionalStore>,
}

fn board_not_found() -> AppError {
    AppError::NotFound("Board not found".to_string())
}

fn duplicate_title() -> AppError {
    AppError::Conflict("A board with this title already exists".to_string())
}

impl BoardService {
    pub fn new(
        boards: Arc<dyn BoardRepository>,
        statuses: Arc<dyn StatusRepository>,
        store: Arc<dyn TransactionalStore>,
    ) -> Self {
        Self {
            boards,
            statuses,
            store,
        }
    }

    /// All boards, newest first, with task counts
    pub async fn list(&self) -> Result<Vec<BoardSummary>> {
        self.boards.list().await
    }

    /// One board with its lanes and task count
    pub async fn get(&self, id: BoardId) -> Result<BoardDetail> {
        let board = self
            .boards
            .find_by_id(id)
            .await?
            .ok_or_else(board_not_found)?;
        let statuses = self.statuses.list_for_board(id).await?;
        let task_count = self.boards.count_tasks(id).await?;

        Ok(BoardDetail {
            board,
            task_count,
            statuses,
        })
    }

    /// Create a board together with its default lanes (one transaction)
    pub async fn create(&self, req: BoardRequest) -> Result<BoardDetail> {
        let new_board = req.validate()?;

        let mut tx = self.store.begin_transaction().await?;

        if tx.board_title_exists(&new_board.title).await? {
            return Err(duplicate_title());
        }

        let board_id = tx.insert_board(&new_board).await?;
        for (position, template) in DEFAULT_STATUSES.iter().enumerate() {
            tx.insert_status(&template.to_new_status(board_id), position as i64)
                .await?;
        }

        tx.commit().await?;

        info!(board_id, title = %new_board.title, "Board created");
        self.get(board_id).await
    }

    /// Replace title and description
    pub async fn update(&self, id: BoardId, req: BoardRequest) -> Result<BoardDetail> {
        let changes = req.validate()?;

        if self.boards.find_by_id(id).await?.is_none() {
            return Err(board_not_found());
        }
        if self.boards.title_exists(&changes.title, Some(id)).await? {
            return Err(duplicate_title());
        }
        if !self.boards.update(id, &changes).await? {
            return Err(board_not_found());
        }

        self.get(id).await
    }

    /// Delete a board; its lanes and tasks go with it
    pub async fn delete(&self, id: BoardId) -> Result<()> {
        if !self.boards.delete(id).await? {
            return Err(board_not_found());
        }
        info!(board_id = id, "Board deleted");
        Ok(())
    }
}
