// Port Layer - Interfaces for external dependencies

pub mod board_repository;
#[cfg(test)]
pub(crate) mod mocks;
pub mod status_repository;
pub mod task_repository;
pub mod time_provider; // For deterministic testing
pub mod transaction;

// Re-exports
pub use board_repository::BoardRepository;
pub use status_repository::StatusRepository;
pub use task_repository::TaskRepository;
pub use time_provider::TimeProvider;
pub use transaction::{StoreTransaction, Transaction, TransactionalStore};
