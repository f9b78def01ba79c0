//! Route groups and the extraction helpers they share.

pub mod boards;
pub mod health;
pub mod statuses;
pub mod tasks;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::{json, Value};
use taskboard_core::error::AppError;

use crate::error::ApiError;

/// Unwrap a JSON body. A body sent without a JSON content type is treated
/// as empty, so it fails field validation instead of the parser.
pub(crate) fn json_body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(Value::Null),
        Err(rejection) => Err(AppError::invalid(
            "body",
            format!("Malformed request body: {}", rejection.body_text()),
        )),
    }
}

/// Id segment of a single-entity route; anything but an integer cannot name a row
pub(crate) fn entity_id(raw: &str, entity: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::not_found(format!("{} not found", entity)))
}

/// `:boardId` segment of a listing route
pub(crate) fn board_id_param(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::invalid("board_id", "Board ID must be an integer"))
}

pub(crate) fn deleted(entity: &str) -> Json<Value> {
    Json(json!({ "message": format!("{} deleted successfully", entity) }))
}
