//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use jobportal_auth::{JwtDecoder, JwtEncoder, PasswordHasher, PasswordValidator};
use jobportal_core::config::AppConfig;
use jobportal_database::Database;
use jobportal_service::{
    AdminService, ApplicationService, AuthService, DashboardService, JobService, ResumeStorage,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Storage provider (PostgreSQL or in-memory)
    pub db: Database,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token verifier
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    /// Registration, login, profile
    pub auth_service: Arc<AuthService>,
    /// Job postings
    pub job_service: Arc<JobService>,
    /// Applications and status reviews
    pub application_service: Arc<ApplicationService>,
    /// Super-admin management
    pub admin_service: Arc<AdminService>,
    /// Aggregate counters
    pub dashboard_service: Arc<DashboardService>,
}

impl AppState {
    /// Wires every service on top of an opened storage provider.
    pub fn new(config: AppConfig, db: Database) -> Self {
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let password_hasher = Arc::new(PasswordHasher::new());
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));
        let resumes = Arc::new(ResumeStorage::new(&config.uploads));

        let auth_service = Arc::new(AuthService::new(
            db.users(),
            Arc::clone(&jwt_encoder),
            Arc::clone(&password_hasher),
            Arc::clone(&password_validator),
        ));
        let job_service = Arc::new(JobService::new(db.jobs(), db.users()));
        let application_service = Arc::new(ApplicationService::new(
            db.applications(),
            db.jobs(),
            db.users(),
            resumes,
        ));
        let admin_service = Arc::new(AdminService::new(
            db.users(),
            db.jobs(),
            password_hasher,
            password_validator,
        ));
        let dashboard_service = Arc::new(DashboardService::new(
            db.users(),
            db.jobs(),
            db.applications(),
        ));

        Self {
            config: Arc::new(config),
            db,
            jwt_decoder,
            auth_service,
            job_service,
            application_service,
            admin_service,
            dashboard_service,
        }
    }
}
