// SQLite row representations and their domain conversions

use taskboard_core::domain::{Board, BoardSummary, Priority, Status, Task, TaskView};
use tracing::warn;

/// Shared SELECT for task listings (task + board title + lane display fields).
/// The lane join is a LEFT JOIN because `status_key` is a soft reference.
pub(crate) const TASK_VIEW_SELECT: &str = r#"
    SELECT t.id, t.board_id, t.status_key, t.title, t.description, t.priority,
           t.position, t.created_at, t.updated_at,
           b.title AS board_title,
           s.status_label AS status_label,
           s.status_color AS status_color
    FROM tasks t
    JOIN boards b ON b.id = t.board_id
    LEFT JOIN board_statuses s ON s.board_id = t.board_id AND s.status_key = t.status_key
"#;

pub(crate) const TASK_VIEW_ORDER: &str = " ORDER BY t.position ASC, t.created_at DESC, t.id DESC";

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct BoardRow {
    id: i64,
    title: String,
    description: Option<String>,
    created_at: i64,
}

impl BoardRow {
    pub(crate) fn into_board(self) -> Board {
        Board {
            id: self.id,
            title: self.title,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct BoardSummaryRow {
    id: i64,
    title: String,
    description: Option<String>,
    created_at: i64,
    task_count: i64,
}

impl BoardSummaryRow {
    pub(crate) fn into_summary(self) -> BoardSummary {
        BoardSummary {
            board: Board {
                id: self.id,
                title: self.title,
                description: self.description,
                created_at: self.created_at,
            },
            task_count: self.task_count,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct StatusRow {
    id: i64,
    board_id: i64,
    status_key: String,
    status_label: String,
    status_color: String,
    position: i64,
    created_at: i64,
    updated_at: i64,
}

impl StatusRow {
    pub(crate) fn into_status(self) -> Status {
        Status {
            id: self.id,
            board_id: self.board_id,
            status_key: self.status_key,
            status_label: self.status_label,
            status_color: self.status_color,
            position: self.position,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct TaskViewRow {
    id: i64,
    board_id: i64,
    status_key: String,
    title: String,
    description: Option<String>,
    priority: String,
    position: i64,
    created_at: i64,
    updated_at: i64,
    board_title: String,
    status_label: Option<String>,
    status_color: Option<String>,
}

impl TaskViewRow {
    pub(crate) fn into_view(self) -> TaskView {
        let priority = self.priority.parse::<Priority>().unwrap_or_else(|_| {
            warn!(task_id = self.id, priority = %self.priority, "Unknown stored priority, using default");
            Priority::default()
        });

        TaskView {
            task: Task {
                id: self.id,
                board_id: self.board_id,
                status_key: self.status_key,
                title: self.title,
                description: self.description,
                priority,
                position: self.position,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            board_title: self.board_title,
            status_label: self.status_label,
            status_color: self.status_color,
        }
    }
}
