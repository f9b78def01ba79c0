//! Lane endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::Value;
use taskboard_core::application::{
    parse_body, CreateStatusRequest, UpdateStatusRequest, STATUS_FIELD_ALIASES,
};
use taskboard_core::domain::Status;

use super::{board_id_param, deleted, entity_id, json_body};
use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/statuses/board/:board_id", get(list_statuses))
        .route("/api/statuses", post(create_status))
        .route("/api/statuses/:id", put(update_status).delete(delete_status))
}

/// `GET /api/statuses/board/:boardId`
pub async fn list_statuses(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
) -> Result<Json<Vec<Status>>, ApiError> {
    let board_id = board_id_param(&board_id).map_err(ApiError::during("fetching statuses"))?;
    let statuses = state
        .statuses
        .list_for_board(board_id)
        .await
        .map_err(ApiError::during("fetching statuses"))?;
    Ok(Json(statuses))
}

/// `POST /api/statuses`
pub async fn create_status(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Status>), ApiError> {
    let req: CreateStatusRequest = json_body(payload)
        .and_then(|body| parse_body(body, STATUS_FIELD_ALIASES))
        .map_err(ApiError::during("creating status"))?;
    let status = state
        .statuses
        .create(req)
        .await
        .map_err(ApiError::during("creating status"))?;
    Ok((StatusCode::CREATED, Json(status)))
}

/// `PUT /api/statuses/:id`
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Status>, ApiError> {
    let id = entity_id(&id, "Status")?;
    let req: UpdateStatusRequest = json_body(payload)
        .and_then(|body| parse_body(body, STATUS_FIELD_ALIASES))
        .map_err(ApiError::during("updating status"))?;
    let status = state
        .statuses
        .update(id, req)
        .await
        .map_err(ApiError::during("updating status"))?;
    Ok(Json(status))
}

/// `DELETE /api/statuses/:id`
pub async fn delete_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = entity_id(&id, "Status")?;
    state
        .statuses
        .delete(id)
        .await
        .map_err(ApiError::during("deleting status"))?;
    Ok(deleted("Status"))
}
