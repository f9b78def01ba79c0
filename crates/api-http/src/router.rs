//! Router assembly.

use axum::error_handling::HandleErrorLayer;
use axum::http::StatusCode;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower::timeout::TimeoutLayer;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::routes;
use crate::state::AppState;

/// Build the `/api` router over the given state
pub fn api_router(state: AppState) -> Router {
    let request_timeout = state.config.request_timeout;

    let router = Router::new()
        .merge(routes::health::routes())
        .merge(routes::boards::routes())
        .merge(routes::statuses::routes())
        .merge(routes::tasks::routes())
        .method_not_allowed_fallback(route_not_found)
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http());

    let router = match request_timeout {
        Some(timeout) => router.layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout_error))
                .layer(TimeoutLayer::new(timeout)),
        ),
        None => router,
    };

    router.with_state(state)
}

async fn route_not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Route not found" })),
    )
}

async fn handle_timeout_error(_err: tower::BoxError) -> (StatusCode, Json<Value>) {
    (
        StatusCode::REQUEST_TIMEOUT,
        Json(json!({ "message": "Request timed out" })),
    )
}
