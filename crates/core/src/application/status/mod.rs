// Status Service - ordered lanes per board

pub mod request;

pub use request::{CreateStatusRequest, UpdateStatusRequest};

use crate::domain::{next_status_position, BoardId, Status, StatusId};
use crate::error::{AppError, Result};
use crate::port::{StatusRepository, TransactionalStore};
use std::sync::Arc;
use tracing::info;

pub struct StatusService {
    statuses: Arc<dyn StatusRepository>,
    store: Arc<dyn TransactionalStore>,
}

fn status_not_found() -> AppError {
    AppError::NotFound("Status not found".to_string())
}

fn duplicate_label() -> AppError {
    AppError::Conflict("Status with this label already exists for this board".to_string())
}

impl StatusService {
    pub fn new(statuses: Arc<dyn StatusRepository>, store: Arc<dyn TransactionalStore>) -> Self {
        Self { statuses, store }
    }

    /// Lanes of a board, by position
    pub async fn list_for_board(&self, board_id: BoardId) -> Result<Vec<Status>> {
        self.statuses.list_for_board(board_id).await
    }

    /// Append a lane at the end of the board
    pub async fn create(&self, req: CreateStatusRequest) -> Result<Status> {
        let new_status = req.validate()?;
        let board_id = new_status.board_id;

        let mut tx = self.store.begin_transaction().await?;

        if !tx.board_exists(board_id).await? {
            return Err(AppError::NotFound("Board not found".to_string()));
        }
        if tx.status_key_exists(board_id, &new_status.status_key).await? {
            return Err(AppError::Conflict(
                "Status with this key already exists for this board".to_string(),
            ));
        }
        if tx
            .status_label_exists(board_id, &new_status.status_label)
            .await?
        {
            return Err(duplicate_label());
        }

        let position = next_status_position(tx.max_status_position(board_id).await?)?;
        let id = tx.insert_status(&new_status, position).await?;
        tx.commit().await?;

        info!(
            status_id = id,
            board_id,
            status_key = %new_status.status_key,
            position,
            "Status created"
        );
        self.fetch(id).await
    }

    /// Partial update of label, color and position
    pub async fn update(&self, id: StatusId, req: UpdateStatusRequest) -> Result<Status> {
        let changes = req.validate()?;

        let current = self
            .statuses
            .find_by_id(id)
            .await?
            .ok_or_else(status_not_found)?;

        if let Some(label) = &changes.status_label {
            if *label != current.status_label
                && self
                    .statuses
                    .label_exists(current.board_id, label, Some(id))
                    .await?
            {
                return Err(duplicate_label());
            }
        }

        if !self.statuses.update(id, &changes).await? {
            return Err(status_not_found());
        }
        self.fetch(id).await
    }

    /// Delete a lane, refused while tasks still reference its key
    pub async fn delete(&self, id: StatusId) -> Result<()> {
        let status = self
            .statuses
            .find_by_id(id)
            .await?
            .ok_or_else(status_not_found)?;

        let blocking = self
            .statuses
            .count_tasks_with_key(status.board_id, &status.status_key)
            .await?;
        if blocking > 0 {
            return Err(AppError::Conflict(format!(
                "Cannot delete status that has {} task(s). Please move or delete the tasks first.",
                blocking
            )));
        }

        if !self.statuses.delete(id).await? {
            return Err(status_not_found());
        }
        info!(status_id = id, board_id = status.board_id, "Status deleted");
        Ok(())
    }

    async fn fetch(&self, id: StatusId) -> Result<Status> {
        self.statuses
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Status {} vanished after write", id)))
    }
}
