//! Taskboard - Main Entry Point
//! HTTP API over SQLite

mod config;
mod telemetry;

use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

// Import workspace crates
use crate::config::{DaemonConfig, LogFormat};
use taskboard_api_http::{ApiConfig, AppState, HttpServer, HttpServerConfig};
use taskboard_core::application::{BoardService, StatusService, TaskService};
use taskboard_core::port::time_provider::SystemTimeProvider;
use taskboard_core::port::TimeProvider;
use taskboard_infra_sqlite::{
    create_pool, run_migrations, SqliteBoardRepository, SqliteStatusRepository, SqliteStore,
    SqliteTaskRepository,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_LOG_FILTER: &str = "taskboard=info,tower_http=info";

fn init_logging(format: LogFormat) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(telemetry::otel_layer::<Layered<EnvFilter, Registry>>()?);

    match format {
        // Production: JSON structured logging
        LogFormat::Json => registry.with(fmt::layer().json()).try_init()?,
        // Development: Pretty formatting with colors
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init()?,
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = ?e, "Failed to listen for Ctrl+C");
    }
    info!("Shutdown signal received. Exiting gracefully...");
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration (defaults -> taskboard.toml -> TASKBOARD_* env)
    let config =
        DaemonConfig::load().map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    // 2. Initialize logging
    init_logging(config.log_format)?;
    telemetry::report();

    info!("Taskboard v{} starting...", VERSION);

    // 3. Initialize database
    let database_url = config.expanded_database_url();
    info!(database_url = %database_url, "Initializing database...");

    let pool = create_pool(&database_url, config.max_connections)
        .await
        .map_err(|e| anyhow::anyhow!("DB pool creation failed: {}", e))?;
    run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;

    // 4. Setup dependencies (DI wiring)
    let time_provider: Arc<dyn TimeProvider> = Arc::new(SystemTimeProvider);
    let board_repo = Arc::new(SqliteBoardRepository::new(pool.clone()));
    let status_repo = Arc::new(SqliteStatusRepository::new(
        pool.clone(),
        time_provider.clone(),
    ));
    let task_repo = Arc::new(SqliteTaskRepository::new(
        pool.clone(),
        time_provider.clone(),
    ));
    let store = Arc::new(SqliteStore::new(pool.clone(), time_provider.clone()));

    let state = AppState::new(
        Arc::new(BoardService::new(
            board_repo,
            status_repo.clone(),
            store.clone(),
        )),
        Arc::new(StatusService::new(status_repo, store.clone())),
        Arc::new(TaskService::new(task_repo, store)),
    )
    .with_config(ApiConfig {
        request_timeout: config.request_timeout(),
    });

    // 5. Start HTTP server
    let server_config = HttpServerConfig {
        host: config.host.clone(),
        port: config.port,
    };
    let server = HttpServer::bind(&server_config, state)
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server bind failed: {}", e))?;

    info!("System ready. Press Ctrl+C to shutdown");

    // 6. Serve until Ctrl+C, then drain
    server
        .serve(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server failed: {}", e))?;

    // 7. Graceful shutdown
    pool.close().await;
    telemetry::shutdown();

    info!("Shutdown complete.");

    Ok(())
}
