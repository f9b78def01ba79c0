// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid priority: {0} (expected low, medium or high)")]
    InvalidPriority(String),

    #[error("Invalid status color: {0} (expected #RRGGBB)")]
    InvalidColor(String),

    #[error("Board has no free position")]
    PositionsExhausted,
}

pub type Result<T> = std::result::Result<T, DomainError>;
