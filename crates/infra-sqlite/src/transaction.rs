// SQLite Transaction Implementation

use crate::error::map_sqlx_error;
use async_trait::async_trait;
use sqlx::{Sqlite, Transaction as SqlxTransaction};
use std::sync::Arc;
use taskboard_core::domain::{BoardId, NewBoard, NewStatus, NewTask, StatusId, TaskId};
use taskboard_core::error::Result;
use taskboard_core::port::{StoreTransaction, TimeProvider, Transaction};

pub struct SqliteStoreTransaction<'a> {
    tx: SqlxTransaction<'a, Sqlite>,
    time_provider: Arc<dyn TimeProvider>,
}

impl<'a> SqliteStoreTransaction<'a> {
    pub fn new(tx: SqlxTransaction<'a, Sqlite>, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self { tx, time_provider }
    }
}

#[async_trait]
impl Transaction for SqliteStoreTransaction<'_> {
    async fn commit(self: Box<Self>) -> Result<()> {
        self.tx.commit().await.map_err(map_sqlx_error)
    }

    async fn rollback(self: Box<Self>) -> Result<()> {
        self.tx.rollback().await.map_err(map_sqlx_error)
    }
}

#[async_trait]
impl StoreTransaction for SqliteStoreTransaction<'_> {
    async fn board_exists(&mut self, id: BoardId) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM boards WHERE id = ?")
            .bind(id)
            .fetch_one(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;
        Ok(count > 0)
    }

    async fn board_title_exists(&mut self, title: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM boards WHERE title = ?")
            .bind(title)
            .fetch_one(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;
        Ok(count > 0)
    }

    async fn insert_board(&mut self, board: &NewBoard) -> Result<BoardId> {
        let now = self.time_provider.now_millis();

        let result =
            sqlx::query("INSERT INTO boards (title, description, created_at) VALUES (?, ?, ?)")
                .bind(&board.title)
                .bind(&board.description)
                .bind(now)
                .execute(&mut *self.tx)
                .await
                .map_err(map_sqlx_error)?;

        Ok(result.last_insert_rowid())
    }

    async fn status_key_exists(&mut self, board_id: BoardId, status_key: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM board_statuses WHERE board_id = ? AND status_key = ?",
        )
        .bind(board_id)
        .bind(status_key)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;
        Ok(count > 0)
    }

    async fn status_label_exists(
        &mut self,
        board_id: BoardId,
        status_label: &str,
    ) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM board_statuses WHERE board_id = ? AND status_label = ?",
        )
        .bind(board_id)
        .bind(status_label)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;
        Ok(count > 0)
    }

    async fn max_status_position(&mut self, board_id: BoardId) -> Result<Option<i64>> {
        sqlx::query_scalar("SELECT MAX(position) FROM board_statuses WHERE board_id = ?")
            .bind(board_id)
            .fetch_one(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)
    }

    async fn insert_status(&mut self, status: &NewStatus, position: i64) -> Result<StatusId> {
        let now = self.time_provider.now_millis();

        let result = sqlx::query(
            r#"
            INSERT INTO board_statuses (
                board_id, status_key, status_label, status_color,
                position, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(status.board_id)
        .bind(&status.status_key)
        .bind(&status.status_label)
        .bind(status.status_color.as_str())
        .bind(position)
        .bind(now)
        .bind(now)
        .execute(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.last_insert_rowid())
    }

    async fn max_task_position(&mut self, board_id: BoardId) -> Result<Option<i64>> {
        sqlx::query_scalar("SELECT MAX(position) FROM tasks WHERE board_id = ?")
            .bind(board_id)
            .fetch_one(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)
    }

    async fn insert_task(&mut self, task: &NewTask, position: i64) -> Result<TaskId> {
        let now = self.time_provider.now_millis();

        let result = sqlx::query(
            r#"
            INSERT INTO tasks (
                board_id, status_key, title, description, priority,
                position, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(task.board_id)
        .bind(&task.status_key)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.priority.to_string())
        .bind(position)
        .bind(now)
        .bind(now)
        .execute(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.last_insert_rowid())
    }
}
