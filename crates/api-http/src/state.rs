//! Shared state handed to every handler.

use std::sync::Arc;
use std::time::Duration;

use taskboard_core::application::{BoardService, StatusService, TaskService};

/// Router-level configuration
#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    /// Optional per-request timeout
    pub request_timeout: Option<Duration>,
}

#[derive(Clone)]
pub struct AppState {
    pub boards: Arc<BoardService>,
    pub statuses: Arc<StatusService>,
    pub tasks: Arc<TaskService>,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(
        boards: Arc<BoardService>,
        statuses: Arc<StatusService>,
        tasks: Arc<TaskService>,
    ) -> Self {
        Self {
            boards,
            statuses,
            tasks,
            config: ApiConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ApiConfig) -> Self {
        self.config = config;
        self
    }
}
