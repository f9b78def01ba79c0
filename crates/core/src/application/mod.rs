// Application Layer - Use Cases and Business Logic

pub mod board;
pub mod input;
pub mod status;
pub mod task;
pub mod validation;

// Re-exports
pub use board::{BoardRequest, BoardService};
pub use input::{parse_body, FieldAlias, STATUS_FIELD_ALIASES, TASK_FIELD_ALIASES};
pub use status::{CreateStatusRequest, StatusService, UpdateStatusRequest};
pub use task::{CreateTaskRequest, TaskService, UpdateTaskRequest};
