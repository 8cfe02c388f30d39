//! Admin job management handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde_json::Value;

use jobportal_entity::job::Job;

use crate::dto::request::{JobQuery, UpdateJobRequest};
use crate::dto::response::{MessageResponse, page_body};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, PaginationParams, ValidatedJson, parse_uuid};
use crate::state::AppState;

const INVALID_JOB_ID: &str = "Invalid job ID";

/// GET /api/admin/jobs
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
    Query(query): Query<JobQuery>,
) -> ApiResult<Json<Value>> {
    let filter = query.into_filter()?;
    let page = state
        .admin_service
        .list_jobs(&filter, &params.into_page_request())
        .await?;
    Ok(Json(page_body("jobs", page)?))
}

/// PUT /api/admin/jobs/{id}
pub async fn update_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateJobRequest>,
) -> ApiResult<Json<Job>> {
    let id = parse_uuid(&id, INVALID_JOB_ID)?;
    let job = state.admin_service.update_job(&auth, id, req.into()).await?;
    Ok(Json(job))
}

/// DELETE /api/admin/jobs/{id}
pub async fn delete_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_uuid(&id, INVALID_JOB_ID)?;
    state.admin_service.delete_job(&auth, id).await?;
    Ok(Json(MessageResponse::new("Job deleted by admin")))
}
