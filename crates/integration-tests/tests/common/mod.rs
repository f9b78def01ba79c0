//! Service wiring over SQLite shared by the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use sqlx::SqlitePool;
use taskboard_core::application::{
    parse_body, BoardRequest, BoardService, CreateTaskRequest, StatusService, TaskService,
    STATUS_FIELD_ALIASES, TASK_FIELD_ALIASES,
};
use taskboard_core::domain::{BoardDetail, Status, TaskView};
use taskboard_core::port::time_provider::{SteppingTimeProvider, SystemTimeProvider};
use taskboard_core::port::TimeProvider;
use taskboard_infra_sqlite::{
    create_pool, run_migrations, SqliteBoardRepository, SqliteStatusRepository, SqliteStore,
    SqliteTaskRepository,
};

pub struct Services {
    pub pool: SqlitePool,
    pub boards: BoardService,
    pub statuses: StatusService,
    pub tasks: TaskService,
}

fn wire(pool: SqlitePool, time_provider: Arc<dyn TimeProvider>) -> Services {
    let board_repo = Arc::new(SqliteBoardRepository::new(pool.clone()));
    let status_repo = Arc::new(SqliteStatusRepository::new(
        pool.clone(),
        time_provider.clone(),
    ));
    let task_repo = Arc::new(SqliteTaskRepository::new(
        pool.clone(),
        time_provider.clone(),
    ));
    let store = Arc::new(SqliteStore::new(pool.clone(), time_provider));

    Services {
        boards: BoardService::new(board_repo, status_repo.clone(), store.clone()),
        statuses: StatusService::new(status_repo, store.clone()),
        tasks: TaskService::new(task_repo, store),
        pool,
    }
}

/// In-memory database with deterministic, strictly increasing timestamps
pub async fn in_memory() -> Services {
    let pool = create_pool("sqlite::memory:", 1).await.unwrap();
    run_migrations(&pool).await.unwrap();
    wire(pool, Arc::new(SteppingTimeProvider::new(1_000, 1_000)))
}

/// File-backed database, for tests that need several connections
pub async fn on_disk(path: &std::path::Path) -> Services {
    let _ = std::fs::remove_file(path);
    let url = format!("sqlite://{}", path.display());
    let pool = create_pool(&url, 8).await.unwrap();
    run_migrations(&pool).await.unwrap();
    wire(pool, Arc::new(SystemTimeProvider))
}

impl Services {
    pub async fn board(&self, title: &str) -> BoardDetail {
        self.boards
            .create(BoardRequest {
                title: Some(title.to_string()),
                description: None,
            })
            .await
            .unwrap()
    }

    pub async fn task(&self, body: Value) -> TaskView {
        let req: CreateTaskRequest = parse_body(body, TASK_FIELD_ALIASES).unwrap();
        self.tasks.create(req).await.unwrap()
    }

    pub async fn lane(&self, body: Value) -> taskboard_core::Result<Status> {
        let req = parse_body(body, STATUS_FIELD_ALIASES)?;
        self.statuses.create(req).await
    }

    pub async fn simple_task(&self, board_id: i64, title: &str) -> TaskView {
        self.task(json!({ "title": title, "boardId": board_id })).await
    }
}
