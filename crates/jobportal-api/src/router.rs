//! Route definitions for the job portal HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`; uploaded
//! resumes are served as static files under `/uploads`.
//!
//! Role requirements are attached here as guard layers rather than checked
//! inside handlers. `route_layer` is used throughout so that an unmatched
//! path or method still yields 404/405 instead of a guard rejection.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

use jobportal_core::error::AppError;

use crate::error::ApiError;
use crate::handlers;
use crate::middleware::auth::{employer_guard, jobseeker_guard, superadmin_guard};
use crate::state::AppState;

/// Room for multipart boundaries and headers on top of the resume itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Build the Axum router with all routes.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(job_routes(&state))
        .merge(application_routes(&state))
        .merge(admin_routes(&state))
        .merge(dashboard_routes(&state))
        .merge(health_routes())
        .fallback(route_not_found);

    let uploads = ServeDir::new(&state.config.uploads.root_dir);

    Router::new()
        .nest("/api", api_routes)
        .nest_service(&state.config.uploads.public_prefix, uploads)
        .with_state(state)
}

/// Auth endpoints: register, login, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// Job postings. Reads are public; writes are per-method guarded.
fn job_routes(state: &AppState) -> Router<AppState> {
    let employer = axum_middleware::from_fn_with_state(state.clone(), employer_guard);

    Router::new()
        .route(
            "/jobs",
            get(handlers::job::list_jobs)
                .merge(post(handlers::job::create_job).route_layer(employer.clone())),
        )
        .route(
            "/jobs/mine",
            get(handlers::job::my_jobs).route_layer(employer.clone()),
        )
        .route(
            "/jobs/{id}",
            get(handlers::job::get_job)
                .merge(put(handlers::job::update_job).route_layer(employer))
                .delete(handlers::job::delete_job),
        )
}

/// Applications: jobseeker submissions and employer review
fn application_routes(state: &AppState) -> Router<AppState> {
    let upload_limit = state.config.uploads.resume_max_bytes as usize + MULTIPART_OVERHEAD;

    let jobseeker = Router::new()
        .route(
            "/applications/apply/{job_id}",
            post(handlers::application::apply).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/applications/my",
            get(handlers::application::my_applications),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            jobseeker_guard,
        ));

    let employer = Router::new()
        .route(
            "/applications/job/{job_id}",
            get(handlers::application::job_applications),
        )
        .route(
            "/applications/employer-dashboard",
            get(handlers::application::employer_dashboard),
        )
        .route(
            "/applications/{id}/status",
            put(handlers::application::update_status),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            employer_guard,
        ));

    jobseeker.merge(employer)
}

/// Admin-only management endpoints
fn admin_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/admin/users",
            get(handlers::admin::users::list_users).post(handlers::admin::users::create_user),
        )
        .route(
            "/admin/users/{id}",
            put(handlers::admin::users::update_user).delete(handlers::admin::users::delete_user),
        )
        .route("/admin/jobs", get(handlers::admin::jobs::list_jobs))
        .route(
            "/admin/jobs/{id}",
            put(handlers::admin::jobs::update_job).delete(handlers::admin::jobs::delete_job),
        )
        .route(
            "/admin/applications",
            get(handlers::admin::applications::list_applications),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            superadmin_guard,
        ))
}

/// Per-role dashboards
fn dashboard_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/dashboard/admin",
            get(handlers::dashboard::admin).route_layer(axum_middleware::from_fn_with_state(
                state.clone(),
                superadmin_guard,
            )),
        )
        .route(
            "/dashboard/employer",
            get(handlers::dashboard::employer).route_layer(
                axum_middleware::from_fn_with_state(state.clone(), employer_guard),
            ),
        )
        .route(
            "/dashboard/jobseeker",
            get(handlers::dashboard::jobseeker).route_layer(
                axum_middleware::from_fn_with_state(state.clone(), jobseeker_guard),
            ),
        )
}

/// Health check endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

async fn route_not_found() -> ApiError {
    AppError::not_found("Route not found").into()
}
