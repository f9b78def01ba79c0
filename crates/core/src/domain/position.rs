// Per-board position sequencing
//
// Both sequences are derived from the current maximum on the owning board.
// Callers must read the maximum and insert inside one storage transaction.
// Positions can be set explicitly on update, so the maximum may already be i64::MAX.

use super::error::{DomainError, Result};

fn after(current_max: Option<i64>, first: i64) -> Result<i64> {
    match current_max {
        None => Ok(first),
        Some(max) => max.checked_add(1).ok_or(DomainError::PositionsExhausted),
    }
}

/// Next lane position: 0-based
pub fn next_status_position(current_max: Option<i64>) -> Result<i64> {
    after(current_max, 0)
}

/// Next task position: 1-based (unlike lanes)
pub fn next_task_position(current_max: Option<i64>) -> Result<i64> {
    after(current_max, 1)
}
