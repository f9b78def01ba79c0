//! HTTP Error Mapping
//!
//! Maps application errors to status codes and JSON bodies.
//!
//! | AppError | Status | Body |
//! |---|---|---|
//! | Validation | 400 | `{"message": "Validation failed", "errors": [...]}` |
//! | Conflict / Domain | 400 | `{"error": "..."}` |
//! | NotFound | 404 | `{"message": "..."}` |
//! | Database / Config / Internal | 500 | `{"message": "Error <operation>"}` |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use taskboard_core::error::{AppError, ValidationErrors};
use tracing::error;

/// An application error tagged with the operation that produced it
#[derive(Debug)]
pub struct ApiError {
    operation: &'static str,
    source: AppError,
}

impl ApiError {
    pub fn new(operation: &'static str, source: AppError) -> Self {
        Self { operation, source }
    }

    /// Adapter for `map_err`, e.g. `.map_err(ApiError::during("fetching boards"))`
    pub fn during(operation: &'static str) -> impl Fn(AppError) -> ApiError {
        move |source| ApiError::new(operation, source)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("routing", AppError::NotFound(message.into()))
    }

    pub fn status(&self) -> StatusCode {
        match &self.source {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            e if e.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn source(&self) -> &AppError {
        &self.source
    }
}

fn validation_body(errors: &ValidationErrors) -> serde_json::Value {
    json!({ "message": "Validation failed", "errors": errors })
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self.source {
            AppError::Validation(errors) => validation_body(&errors),
            AppError::Conflict(message) => json!({ "error": message }),
            AppError::Domain(e) => json!({ "error": e.to_string() }),
            AppError::NotFound(message) => json!({ "message": message }),
            other => {
                error!(operation = self.operation, error = %other, "Request failed");
                json!({ "message": format!("Error {}", self.operation) })
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_core::domain::DomainError;

    async fn body_of(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_shape() {
        let err = ApiError::new(
            "creating board",
            AppError::invalid("title", "Title is required"),
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_of(response).await;
        assert_eq!(body["message"], "Validation failed");
        assert_eq!(body["errors"][0]["field"], "title");
        assert_eq!(body["errors"][0]["message"], "Title is required");
    }

    #[tokio::test]
    async fn test_conflict_uses_error_key() {
        let err = ApiError::new("creating board", AppError::Conflict("taken".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(response).await, json!({ "error": "taken" }));
    }

    #[tokio::test]
    async fn test_not_found() {
        let response = ApiError::not_found("Task not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(response).await, json!({ "message": "Task not found" }));
    }

    #[tokio::test]
    async fn test_internal_hides_detail() {
        let err = ApiError::new(
            "fetching boards",
            AppError::Database("disk I/O error".into()),
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_of(response).await,
            json!({ "message": "Error fetching boards" })
        );
    }

    #[tokio::test]
    async fn test_exhausted_positions_are_a_client_error() {
        let err = ApiError::new(
            "creating task",
            AppError::Domain(DomainError::PositionsExhausted),
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_of(response).await,
            json!({ "error": "Board has no free position" })
        );
    }
}
