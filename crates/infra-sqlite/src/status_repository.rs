// SQLite StatusRepository Implementation

use crate::error::map_sqlx_error;
use crate::rows::StatusRow;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;
use taskboard_core::domain::{BoardId, Status, StatusChanges, StatusId};
use taskboard_core::error::Result;
use taskboard_core::port::{StatusRepository, TimeProvider};

const STATUS_COLUMNS: &str = "id, board_id, status_key, status_label, status_color, position, created_at, updated_at";

pub struct SqliteStatusRepository {
    pool: SqlitePool,
    time_provider: Arc<dyn TimeProvider>,
}

impl SqliteStatusRepository {
    pub fn new(pool: SqlitePool, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            pool,
            time_provider,
        }
    }
}

#[async_trait]
impl StatusRepository for SqliteStatusRepository {
    async fn list_for_board(&self, board_id: BoardId) -> Result<Vec<Status>> {
        let rows: Vec<StatusRow> = sqlx::query_as(&format!(
            "SELECT {} FROM board_statuses WHERE board_id = ? ORDER BY position ASC, id ASC",
            STATUS_COLUMNS
        ))
        .bind(board_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(StatusRow::into_status).collect())
    }

    async fn find_by_id(&self, id: StatusId) -> Result<Option<Status>> {
        let row: Option<StatusRow> = sqlx::query_as(&format!(
            "SELECT {} FROM board_statuses WHERE id = ?",
            STATUS_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(StatusRow::into_status))
    }

    async fn label_exists(
        &self,
        board_id: BoardId,
        label: &str,
        excluding: Option<StatusId>,
    ) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM board_statuses WHERE board_id = ? AND status_label = ? AND id IS NOT ?",
        )
        .bind(board_id)
        .bind(label)
        .bind(excluding)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(count > 0)
    }

    async fn update(&self, id: StatusId, changes: &StatusChanges) -> Result<bool> {
        let now = self.time_provider.now_millis();

        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new("UPDATE board_statuses SET updated_at = ");
        query.push_bind(now);
        if let Some(label) = &changes.status_label {
            query.push(", status_label = ").push_bind(label.clone());
        }
        if let Some(color) = &changes.status_color {
            query
                .push(", status_color = ")
                .push_bind(color.as_str().to_string());
        }
        if let Some(position) = changes.position {
            query.push(", position = ").push_bind(position);
        }
        query.push(" WHERE id = ").push_bind(id);

        let result = query
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: StatusId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM board_statuses WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_tasks_with_key(&self, board_id: BoardId, status_key: &str) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE board_id = ? AND status_key = ?")
            .bind(board_id)
            .bind(status_key)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }
}
