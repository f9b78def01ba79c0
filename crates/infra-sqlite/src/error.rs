// sqlx::Error -> AppError mapping

use taskboard_core::error::AppError;

/// Friendly conflict message for a violated unique index
fn unique_violation_message(message: &str) -> String {
    if message.contains("boards.title") {
        "A board with this title already exists".to_string()
    } else if message.contains("board_statuses.status_key") {
        "Status with this key already exists for this board".to_string()
    } else if message.contains("board_statuses.status_label") {
        "Status with this label already exists for this board".to_string()
    } else {
        format!("Unique constraint violation: {}", message)
    }
}

/// Convert sqlx::Error to AppError with structured information.
///
/// Unique violations become `Conflict`, so a pre-check that lost a race
/// still reports the same error class to the caller.
pub fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                let code_str = code.as_ref();

                // SQLite error codes: https://www.sqlite.org/rescode.html
                match code_str {
                    "2067" | "1555" => {
                        // UNIQUE constraint failed
                        AppError::Conflict(unique_violation_message(db_err.message()))
                    }
                    "787" | "3850" => {
                        // FOREIGN KEY constraint failed
                        AppError::Database(format!(
                            "Foreign key constraint violation: {} ({})",
                            db_err.message(),
                            code_str
                        ))
                    }
                    "5" => {
                        // SQLITE_BUSY - database is locked
                        AppError::Database(format!(
                            "Database locked (SQLITE_BUSY): {}",
                            db_err.message()
                        ))
                    }
                    _ => AppError::Database(format!(
                        "Database error [{}]: {}",
                        code_str,
                        db_err.message()
                    )),
                }
            } else {
                AppError::Database(format!("Database error: {}", db_err.message()))
            }
        }
        sqlx::Error::RowNotFound => AppError::Database("Row not found".to_string()),
        sqlx::Error::ColumnNotFound(col) => {
            AppError::Database(format!("Column not found: {}", col))
        }
        // Connection, pool, protocol errors
        _ => AppError::Database(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_messages() {
        assert_eq!(
            unique_violation_message("UNIQUE constraint failed: boards.title"),
            "A board with this title already exists"
        );
        assert_eq!(
            unique_violation_message(
                "UNIQUE constraint failed: board_statuses.board_id, board_statuses.status_key"
            ),
            "Status with this key already exists for this board"
        );
        assert_eq!(
            unique_violation_message(
                "UNIQUE constraint failed: board_statuses.board_id, board_statuses.status_label"
            ),
            "Status with this label already exists for this board"
        );
    }

    #[test]
    fn test_row_not_found_is_database_error() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            AppError::Database(_)
        ));
    }
}
