// Shared fixtures for the adapter's unit tests

use crate::{create_pool, run_migrations, SqliteStore};
use sqlx::SqlitePool;
use std::sync::Arc;
use taskboard_core::domain::{BoardId, NewBoard, NewTask, Priority, DEFAULT_STATUSES};
use taskboard_core::port::time_provider::SteppingTimeProvider;
use taskboard_core::port::{TimeProvider, TransactionalStore};

pub(crate) async fn setup_test_db() -> (SqlitePool, Arc<dyn TimeProvider>) {
    let pool = create_pool("sqlite::memory:", 1).await.unwrap();
    run_migrations(&pool).await.unwrap();
    let time_provider: Arc<dyn TimeProvider> = Arc::new(SteppingTimeProvider::new(1000, 1000));
    (pool, time_provider)
}

/// Insert a board with the default lanes
pub(crate) async fn seed_board(
    pool: &SqlitePool,
    time_provider: &Arc<dyn TimeProvider>,
    title: &str,
) -> BoardId {
    let store = SqliteStore::new(pool.clone(), Arc::clone(time_provider));
    let mut tx = store.begin_transaction().await.unwrap();
    let board_id = tx
        .insert_board(&NewBoard {
            title: title.to_string(),
            description: None,
        })
        .await
        .unwrap();
    for (position, template) in DEFAULT_STATUSES.iter().enumerate() {
        tx.insert_status(&template.to_new_status(board_id), position as i64)
            .await
            .unwrap();
    }
    tx.commit().await.unwrap();
    board_id
}

/// Insert a task at an explicit position
pub(crate) async fn seed_task(
    pool: &SqlitePool,
    time_provider: &Arc<dyn TimeProvider>,
    board_id: BoardId,
    status_key: &str,
    title: &str,
    position: i64,
) -> i64 {
    let store = SqliteStore::new(pool.clone(), Arc::clone(time_provider));
    let mut tx = store.begin_transaction().await.unwrap();
    let id = tx
        .insert_task(
            &NewTask {
                board_id,
                status_key: status_key.to_string(),
                title: title.to_string(),
                description: None,
                priority: Priority::Medium,
            },
            position,
        )
        .await
        .unwrap();
    tx.commit().await.unwrap();
    id
}
