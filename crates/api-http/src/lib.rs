//! HTTP API Layer
//!
//! JSON REST surface for boards, lanes and tasks, served with axum.

pub mod error;
pub mod router;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use router::api_router;
pub use server::{HttpServer, HttpServerConfig};
pub use state::{ApiConfig, AppState};
