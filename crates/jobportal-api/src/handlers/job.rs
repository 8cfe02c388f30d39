//! Job posting handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::Value;

use jobportal_entity::job::Job;
use jobportal_entity::view::JobView;

use crate::dto::request::{CreateJobRequest, JobQuery, UpdateJobRequest};
use crate::dto::response::{MessageResponse, page_body};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, PaginationParams, ValidatedJson, parse_uuid};
use crate::state::AppState;

const INVALID_JOB_ID: &str = "Invalid job ID";

/// GET /api/jobs
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
    Query(query): Query<JobQuery>,
) -> ApiResult<Json<Value>> {
    let filter = query.into_filter()?;
    let page = state
        .job_service
        .list(&filter, &params.into_page_request())
        .await?;
    Ok(Json(page_body("jobs", page)?))
}

/// GET /api/jobs/mine [employer]
pub async fn my_jobs(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
    Query(query): Query<JobQuery>,
) -> ApiResult<Json<Value>> {
    let filter = query.into_filter()?;
    let page = state
        .job_service
        .list_mine(&auth, filter, &params.into_page_request())
        .await?;
    Ok(Json(page_body("jobs", page)?))
}

/// GET /api/jobs/{id}
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<JobView>> {
    let id = parse_uuid(&id, INVALID_JOB_ID)?;
    Ok(Json(state.job_service.get(id).await?))
}

/// POST /api/jobs [employer]
pub async fn create_job(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateJobRequest>,
) -> ApiResult<(StatusCode, Json<Job>)> {
    let job = state.job_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// PUT /api/jobs/{id} [employer, owner]
pub async fn update_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateJobRequest>,
) -> ApiResult<Json<Job>> {
    let id = parse_uuid(&id, INVALID_JOB_ID)?;
    let job = state.job_service.update(&auth, id, req.into()).await?;
    Ok(Json(job))
}

/// DELETE /api/jobs/{id}
///
/// Open to any authenticated caller; the ownership check admits the
/// owning employer and super-admins.
pub async fn delete_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_uuid(&id, INVALID_JOB_ID)?;
    state.job_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Job deleted successfully")))
}
