//! Application builder: wires router, middleware, and state into an Axum app.

use axum::{Router, middleware as axum_middleware};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use jobportal_core::config::AppConfig;
use jobportal_core::error::AppError;
use jobportal_database::Database;

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Runs the job portal server on an opened, migrated storage provider.
pub async fn run_server(config: AppConfig, db: Database) -> Result<(), AppError> {
    // ── Step 1: Create upload directories ────────────────────────
    let resume_dir = format!("{}/resumes", config.uploads.root_dir);
    tokio::fs::create_dir_all(&resume_dir)
        .await
        .map_err(|e| AppError::internal(format!("Failed to create dir '{resume_dir}': {e}")))?;

    // ── Step 2: Build services and HTTP app ──────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = build_app(AppState::new(config, db.clone()));

    // ── Step 3: Serve until Ctrl+C ───────────────────────────────
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Job portal server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Server stopped, closing storage");
    db.close().await;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
