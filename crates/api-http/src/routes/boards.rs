//! Board endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use taskboard_core::application::{parse_body, BoardRequest};
use taskboard_core::domain::{BoardDetail, BoardSummary};

use super::{deleted, entity_id, json_body};
use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/boards", get(list_boards).post(create_board))
        .route(
            "/api/boards/:id",
            get(get_board).put(update_board).delete(delete_board),
        )
}

/// `GET /api/boards`
pub async fn list_boards(
    State(state): State<AppState>,
) -> Result<Json<Vec<BoardSummary>>, ApiError> {
    let boards = state
        .boards
        .list()
        .await
        .map_err(ApiError::during("fetching boards"))?;
    Ok(Json(boards))
}

/// `GET /api/boards/:id`
pub async fn get_board(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BoardDetail>, ApiError> {
    let id = entity_id(&id, "Board")?;
    let board = state
        .boards
        .get(id)
        .await
        .map_err(ApiError::during("fetching board"))?;
    Ok(Json(board))
}

/// `POST /api/boards`
pub async fn create_board(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<BoardDetail>), ApiError> {
    let req: BoardRequest = json_body(payload)
        .and_then(|body| parse_body(body, &[]))
        .map_err(ApiError::during("creating board"))?;
    let board = state
        .boards
        .create(req)
        .await
        .map_err(ApiError::during("creating board"))?;
    Ok((StatusCode::CREATED, Json(board)))
}

/// `PUT /api/boards/:id`
pub async fn update_board(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<BoardDetail>, ApiError> {
    let id = entity_id(&id, "Board")?;
    let req: BoardRequest = json_body(payload)
        .and_then(|body| parse_body(body, &[]))
        .map_err(ApiError::during("updating board"))?;
    let board = state
        .boards
        .update(id, req)
        .await
        .map_err(ApiError::during("updating board"))?;
    Ok(Json(board))
}

/// `DELETE /api/boards/:id`
pub async fn delete_board(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = entity_id(&id, "Board")?;
    state
        .boards
        .delete(id)
        .await
        .map_err(ApiError::during("deleting board"))?;
    Ok(deleted("Board"))
}
