// SQLite BoardRepository Implementation

use crate::error::map_sqlx_error;
use crate::rows::{BoardRow, BoardSummaryRow};
use async_trait::async_trait;
use sqlx::SqlitePool;
use taskboard_core::domain::{Board, BoardId, BoardSummary, NewBoard};
use taskboard_core::error::Result;
use taskboard_core::port::BoardRepository;

pub struct SqliteBoardRepository {
    pool: SqlitePool,
}

impl SqliteBoardRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BoardRepository for SqliteBoardRepository {
    async fn list(&self) -> Result<Vec<BoardSummary>> {
        let rows: Vec<BoardSummaryRow> = sqlx::query_as(
            r#"
            SELECT b.id, b.title, b.description, b.created_at,
                   (SELECT COUNT(*) FROM tasks t WHERE t.board_id = b.id) AS task_count
            FROM boards b
            ORDER BY b.created_at DESC, b.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(BoardSummaryRow::into_summary).collect())
    }

    async fn find_by_id(&self, id: BoardId) -> Result<Option<Board>> {
        let row = sqlx::query_as::<_, BoardRow>(
            "SELECT id, title, description, created_at FROM boards WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(BoardRow::into_board))
    }

    async fn title_exists(&self, title: &str, excluding: Option<BoardId>) -> Result<bool> {
        // NULL exclusion matches no row, so every board is considered
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM boards WHERE title = ? AND id IS NOT ?",
        )
        .bind(title)
        .bind(excluding)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(count > 0)
    }

    async fn update(&self, id: BoardId, board: &NewBoard) -> Result<bool> {
        let result = sqlx::query("UPDATE boards SET title = ?, description = ? WHERE id = ?")
            .bind(&board.title)
            .bind(&board.description)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: BoardId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM boards WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_tasks(&self, id: BoardId) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE board_id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }
}
