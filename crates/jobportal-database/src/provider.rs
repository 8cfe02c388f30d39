//! Storage handle that dispatches to the configured provider.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::info;

use jobportal_core::config::DatabaseConfig;
use jobportal_core::error::{AppError, ErrorKind};
use jobportal_core::result::AppResult;

use crate::memory::MemoryStore;
use crate::repositories::{ApplicationRepository, JobRepository, UserRepository};
use crate::store::{ApplicationStore, JobStore, UserStore};

/// The three collection stores, backed by one provider.
///
/// The provider is selected at construction time from `database.provider`.
#[derive(Debug, Clone)]
pub struct Database {
    users: Arc<dyn UserStore>,
    jobs: Arc<dyn JobStore>,
    applications: Arc<dyn ApplicationStore>,
    /// Present only for the `postgres` provider.
    pool: Option<PgPool>,
}

impl Database {
    /// Open the provider named in `config`.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL storage provider");
                let pool = open_pool(config).await?;
                Ok(Self::postgres(pool))
            }
            "memory" => {
                info!("Initializing in-memory storage provider");
                Ok(Self::memory())
            }
            other => Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    /// Repositories over an open PostgreSQL pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            jobs: Arc::new(JobRepository::new(pool.clone())),
            applications: Arc::new(ApplicationRepository::new(pool.clone())),
            pool: Some(pool),
        }
    }

    /// A fresh, empty in-memory store.
    pub fn memory() -> Self {
        let store = MemoryStore::new();
        Self {
            users: Arc::new(store.clone()),
            jobs: Arc::new(store.clone()),
            applications: Arc::new(store),
            pool: None,
        }
    }

    /// User collection.
    pub fn users(&self) -> Arc<dyn UserStore> {
        Arc::clone(&self.users)
    }

    /// Job collection.
    pub fn jobs(&self) -> Arc<dyn JobStore> {
        Arc::clone(&self.jobs)
    }

    /// Application collection.
    pub fn applications(&self) -> Arc<dyn ApplicationStore> {
        Arc::clone(&self.applications)
    }

    /// Apply pending schema migrations. A no-op for the memory provider.
    pub async fn run_migrations(&self) -> AppResult<()> {
        match &self.pool {
            Some(pool) => crate::migration::run_migrations(pool).await,
            None => Ok(()),
        }
    }

    /// Verify the backend is reachable.
    pub async fn ping(&self) -> AppResult<()> {
        match &self.pool {
            Some(pool) => sqlx::query_scalar::<_, i32>("SELECT 1")
                .fetch_one(pool)
                .await
                .map(|_| ())
                .map_err(|e| AppError::with_source(ErrorKind::Database, "Database ping failed", e)),
            None => Ok(()),
        }
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
            info!("Database pool closed");
        }
    }
}

/// Pool for the `postgres` provider. Connections identify themselves as
/// `jobportal` in `pg_stat_activity`.
async fn open_pool(config: &DatabaseConfig) -> AppResult<PgPool> {
    info!(
        url = %redact_url(&config.url),
        max_connections = config.max_connections,
        "Connecting to PostgreSQL"
    );

    let options = PgConnectOptions::from_str(&config.url)
        .map_err(|e| AppError::configuration(format!("Invalid database.url: {e}")))?
        .application_name("jobportal");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
        .connect_with(options)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to connect to database: {e}"),
                e,
            )
        })?;

    info!("Connected to PostgreSQL");
    Ok(pool)
}

/// `database.url` with the password masked, for logs.
fn redact_url(url: &str) -> String {
    let Some(at) = url.rfind('@') else {
        return url.to_string();
    };
    let scheme_end = url.find("://").map_or(0, |p| p + 3);
    match url[..at].rfind(':') {
        Some(colon) if colon > scheme_end => format!("{}:****@{}", &url[..colon], &url[at + 1..]),
        _ => url.to_string(),
    }
}
