// Taskboard Infrastructure - SQLite Adapter
// Implements: BoardRepository, StatusRepository, TaskRepository, TransactionalStore

mod board_repository;
mod connection;
mod error;
mod migration;
mod rows;
mod status_repository;
mod store;
mod task_repository;
mod transaction;

#[cfg(test)]
mod test_support;

pub use board_repository::SqliteBoardRepository;
pub use connection::create_pool;
pub use error::map_sqlx_error;
pub use migration::run_migrations;
pub use status_repository::SqliteStatusRepository;
pub use store::SqliteStore;
pub use task_repository::SqliteTaskRepository;
pub use transaction::SqliteStoreTransaction;

// Note: sqlx::Error conversion is handled by `map_sqlx_error`
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
