// Domain Layer - Pure business logic and entities

pub mod board;
pub mod error;
pub mod position;
pub mod status;
pub mod task;

// Re-exports
pub use board::{Board, BoardDetail, BoardId, BoardSummary, NewBoard};
pub use error::DomainError;
pub use position::{next_status_position, next_task_position};
pub use status::{
    NewStatus, Status, StatusChanges, StatusColor, StatusId, StatusTemplate, DEFAULT_STATUSES,
    DEFAULT_STATUS_COLOR,
};
pub use task::{NewTask, Priority, Task, TaskChanges, TaskId, TaskView, DEFAULT_STATUS_KEY};
