//! Job Portal Server
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use jobportal_core::config::AppConfig;
use jobportal_core::error::AppError;
use jobportal_database::Database;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `config/default.toml`, the environment overlay and
/// `JOBPORTAL__*` variables
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("JOBPORTAL_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Job Portal v{}", env!("CARGO_PKG_VERSION"));

    if config.auth.jwt_secret == "CHANGE_ME_IN_PRODUCTION" {
        tracing::warn!("auth.jwt_secret is the built-in default; set JOBPORTAL__AUTH__JWT_SECRET");
    }

    // ── Step 1: Storage backend ──────────────────────────────────
    tracing::info!(
        "Connecting to database (provider: {})...",
        config.database.provider
    );
    let db = Database::connect(&config.database).await?;

    // ── Step 2: Migrations ───────────────────────────────────────
    tracing::info!("Running database migrations...");
    db.run_migrations().await?;
    tracing::info!("Database migrations complete");

    // ── Step 3: HTTP server ──────────────────────────────────────
    jobportal_api::run_server(config, db).await
}
