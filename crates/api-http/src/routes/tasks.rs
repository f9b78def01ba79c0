//! Task endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use taskboard_core::application::{
    parse_body, CreateTaskRequest, UpdateTaskRequest, TASK_FIELD_ALIASES,
};
use taskboard_core::domain::TaskView;

use super::{board_id_param, deleted, entity_id, json_body};
use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/board/:board_id", get(list_board_tasks))
        .route(
            "/api/tasks/:id",
            get(get_task).put(update_task).delete(delete_task),
        )
}

/// `GET /api/tasks`
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<TaskView>>, ApiError> {
    let tasks = state
        .tasks
        .list_all()
        .await
        .map_err(ApiError::during("fetching tasks"))?;
    Ok(Json(tasks))
}

/// `GET /api/tasks/board/:boardId`
pub async fn list_board_tasks(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
) -> Result<Json<Vec<TaskView>>, ApiError> {
    let board_id = board_id_param(&board_id).map_err(ApiError::during("fetching tasks"))?;
    let tasks = state
        .tasks
        .list_for_board(board_id)
        .await
        .map_err(ApiError::during("fetching tasks"))?;
    Ok(Json(tasks))
}

/// `GET /api/tasks/:id`
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TaskView>, ApiError> {
    let id = entity_id(&id, "Task")?;
    let task = state
        .tasks
        .get(id)
        .await
        .map_err(ApiError::during("fetching task"))?;
    Ok(Json(task))
}

/// `POST /api/tasks`
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskView>), ApiError> {
    let req: CreateTaskRequest = json_body(payload)
        .and_then(|body| parse_body(body, TASK_FIELD_ALIASES))
        .map_err(ApiError::during("creating task"))?;
    let task = state
        .tasks
        .create(req)
        .await
        .map_err(ApiError::during("creating task"))?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `PUT /api/tasks/:id`
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TaskView>, ApiError> {
    let id = entity_id(&id, "Task")?;
    let req: UpdateTaskRequest = json_body(payload)
        .and_then(|body| parse_body(body, TASK_FIELD_ALIASES))
        .map_err(ApiError::during("updating task"))?;
    let task = state
        .tasks
        .update(id, req)
        .await
        .map_err(ApiError::during("updating task"))?;
    Ok(Json(task))
}

/// `DELETE /api/tasks/:id`
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = entity_id(&id, "Task")?;
    state
        .tasks
        .delete(id)
        .await
        .map_err(ApiError::during("deleting task"))?;
    Ok(deleted("Task"))
}
