//! Per-role dashboard counters.

use axum::Json;
use axum::extract::State;

use jobportal_service::dashboard::{AdminStats, EmployerStats, JobseekerStats};

use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/dashboard/admin [superadmin]
pub async fn admin(State(state): State<AppState>) -> ApiResult<Json<AdminStats>> {
    Ok(Json(state.dashboard_service.admin_stats().await?))
}

/// GET /api/dashboard/employer [employer]
pub async fn employer(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<EmployerStats>> {
    Ok(Json(state.dashboard_service.employer_stats(&auth).await?))
}

/// GET /api/dashboard/jobseeker [jobseeker]
pub async fn jobseeker(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<JobseekerStats>> {
    Ok(Json(state.dashboard_service.jobseeker_stats(&auth).await?))
}
