// SQLite TaskRepository Implementation

use crate::error::map_sqlx_error;
use crate::rows::{TaskViewRow, TASK_VIEW_ORDER, TASK_VIEW_SELECT};
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;
use taskboard_core::domain::{BoardId, TaskChanges, TaskId, TaskView};
use taskboard_core::error::Result;
use taskboard_core::port::{TaskRepository, TimeProvider};

pub struct SqliteTaskRepository {
    pool: SqlitePool,
    time_provider: Arc<dyn TimeProvider>,
}

impl SqliteTaskRepository {
    pub fn new(pool: SqlitePool, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            pool,
            time_provider,
        }
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn list_all(&self) -> Result<Vec<TaskView>> {
        let rows: Vec<TaskViewRow> =
            sqlx::query_as(&format!("{}{}", TASK_VIEW_SELECT, TASK_VIEW_ORDER))
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(TaskViewRow::into_view).collect())
    }

    async fn list_for_board(&self, board_id: BoardId) -> Result<Vec<TaskView>> {
        let rows: Vec<TaskViewRow> = sqlx::query_as(&format!(
            "{} WHERE t.board_id = ?{}",
            TASK_VIEW_SELECT, TASK_VIEW_ORDER
        ))
        .bind(board_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(TaskViewRow::into_view).collect())
    }

    async fn find_by_id(&self, id: TaskId) -> Result<Option<TaskView>> {
        let row: Option<TaskViewRow> =
            sqlx::query_as(&format!("{} WHERE t.id = ?", TASK_VIEW_SELECT))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(row.map(TaskViewRow::into_view))
    }

    async fn update(&self, id: TaskId, changes: &TaskChanges) -> Result<bool> {
        let now = self.time_provider.now_millis();

        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE tasks SET updated_at = ");
        query.push_bind(now);
        if let Some(title) = &changes.title {
            query.push(", title = ").push_bind(title.clone());
        }
        if let Some(description) = &changes.description {
            query.push(", description = ").push_bind(description.clone());
        }
        if let Some(status_key) = &changes.status_key {
            query.push(", status_key = ").push_bind(status_key.clone());
        }
        if let Some(priority) = changes.priority {
            query.push(", priority = ").push_bind(priority.to_string());
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

    async fn delete(&self, id: TaskId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
