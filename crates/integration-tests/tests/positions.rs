//! Next-position rules for lanes (0-based) and tasks (1-based).

mod common;

use futures::future::join_all;
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;
use taskboard_core::application::{
    parse_body, UpdateStatusRequest, UpdateTaskRequest, STATUS_FIELD_ALIASES, TASK_FIELD_ALIASES,
};
use taskboard_core::domain::DomainError;
use taskboard_core::error::AppError;

#[tokio::test]
async fn test_lane_positions_follow_defaults() {
    let services = common::in_memory().await;
    let board = services.board("Lanes").await;

    let review = services
        .lane(json!({ "boardId": board.board.id, "statusKey": "review", "statusLabel": "Review" }))
        .await
        .unwrap();
    let qa = services
        .lane(json!({ "board_id": board.board.id, "status_key": "qa", "status_label": "QA" }))
        .await
        .unwrap();

    assert_eq!(review.position, 3);
    assert_eq!(qa.position, 4);
    assert_eq!(review.status_color, "#6b7280");
}

#[tokio::test]
async fn test_lane_on_empty_board_starts_at_zero() {
    let services = common::in_memory().await;
    let board = services.board("Empty").await;
    for lane in &board.statuses {
        services.statuses.delete(lane.id).await.unwrap();
    }

    let first = services
        .lane(json!({ "boardId": board.board.id, "statusKey": "new", "statusLabel": "New" }))
        .await
        .unwrap();
    assert_eq!(first.position, 0);
}

#[tokio::test]
async fn test_task_positions_start_at_one_per_board() {
    let services = common::in_memory().await;
    let a = services.board("A").await;
    let b = services.board("B").await;

    let a1 = services.simple_task(a.board.id, "a1").await;
    let a2 = services.simple_task(a.board.id, "a2").await;
    let b1 = services.simple_task(b.board.id, "b1").await;

    assert_eq!(a1.task.position, 1);
    assert_eq!(a2.task.position, 2);
    assert_eq!(b1.task.position, 1);
}

#[tokio::test]
async fn test_task_position_follows_max_not_count() {
    let services = common::in_memory().await;
    let board = services.board("Gaps").await;
    let first = services.simple_task(board.board.id, "first").await;
    services.simple_task(board.board.id, "second").await;
    services.tasks.delete(first.task.id).await.unwrap();

    let third = services.simple_task(board.board.id, "third").await;
    assert_eq!(third.task.position, 3);
}

#[tokio::test]
async fn test_task_create_after_maximum_position_is_rejected() {
    let services = common::in_memory().await;
    let board = services.board("Full").await;
    let last = services.simple_task(board.board.id, "last").await;

    let req: UpdateTaskRequest =
        parse_body(json!({ "position": i64::MAX }), TASK_FIELD_ALIASES).unwrap();
    services.tasks.update(last.task.id, req).await.unwrap();

    let req = parse_body(
        json!({ "title": "one more", "boardId": board.board.id }),
        TASK_FIELD_ALIASES,
    )
    .unwrap();
    let result = services.tasks.create(req).await;
    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::PositionsExhausted))
    ));

    // Nothing was written and the board stays usable
    let tasks = services.tasks.list_for_board(board.board.id).await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].task.position, i64::MAX);
}

#[tokio::test]
async fn test_lane_create_after_maximum_position_is_rejected() {
    let services = common::in_memory().await;
    let board = services.board("Wide").await;
    let done = board.statuses.last().unwrap().clone();

    let req: UpdateStatusRequest =
        parse_body(json!({ "position": i64::MAX }), STATUS_FIELD_ALIASES).unwrap();
    services.statuses.update(done.id, req).await.unwrap();

    let result = services
        .lane(json!({ "boardId": board.board.id, "statusKey": "late", "statusLabel": "Late" }))
        .await;
    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::PositionsExhausted))
    ));

    let lanes = services.statuses.list_for_board(board.board.id).await.unwrap();
    assert_eq!(lanes.len(), 3);
    assert!(lanes.iter().all(|lane| lane.position >= 0));
}

#[tokio::test]
async fn test_concurrent_task_creates_get_distinct_positions() {
    let path = std::env::temp_dir().join(format!(
        "taskboard_positions_{}.db",
        std::process::id()
    ));
    let services = Arc::new(common::on_disk(&path).await);
    let board = services.board("Concurrent").await;
    let board_id = board.board.id;

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let services = Arc::clone(&services);
            tokio::spawn(async move {
                services
                    .simple_task(board_id, &format!("task {}", i))
                    .await
                    .task
                    .position
            })
        })
        .collect();

    let positions: HashSet<i64> = join_all(handles)
        .await
        .into_iter()
        .map(|r| r.unwrap())
        .collect();

    assert_eq!(positions, (1..=20).collect::<HashSet<i64>>());

    services.pool.close().await;
    let _ = std::fs::remove_file(&path);
}
