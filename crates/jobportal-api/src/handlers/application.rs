//! Application handlers: apply, listings, status review.

use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use serde_json::Value;

use jobportal_core::error::AppError;
use jobportal_entity::application::Application;
use jobportal_service::application::ResumeUpload;

use crate::dto::request::{ApplicationQuery, StatusUpdateRequest};
use crate::dto::response::page_body;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, PaginationParams, ValidatedJson, parse_uuid};
use crate::state::AppState;

/// Multipart field carrying the resume file.
pub const RESUME_FIELD: &str = "resume";

/// POST /api/applications/apply/{job_id} [jobseeker]
pub async fn apply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<String>,
    multipart: Multipart,
) -> ApiResult<(StatusCode, Json<Application>)> {
    let job_id = parse_uuid(&job_id, "Invalid job ID")?;
    let resume = read_resume(multipart).await?;
    let application = state
        .application_service
        .apply(&auth, job_id, resume)
        .await?;
    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/applications/my [jobseeker]
pub async fn my_applications(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
    Query(query): Query<ApplicationQuery>,
) -> ApiResult<Json<Value>> {
    let query = query.into_query()?;
    let page = state
        .application_service
        .list_mine(&auth, &query, &params.into_page_request())
        .await?;
    Ok(Json(page_body("applications", page)?))
}

/// GET /api/applications/job/{job_id} [employer, owner]
pub async fn job_applications(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<String>,
    Query(params): Query<PaginationParams>,
    Query(query): Query<ApplicationQuery>,
) -> ApiResult<Json<Value>> {
    let job_id = parse_uuid(&job_id, "Invalid job ID")?;
    let query = query.into_query()?;
    let page = state
        .application_service
        .list_for_job(&auth, job_id, &query, &params.into_page_request())
        .await?;
    Ok(Json(page_body("applications", page)?))
}

/// GET /api/applications/employer-dashboard [employer]
pub async fn employer_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
    Query(query): Query<ApplicationQuery>,
) -> ApiResult<Json<Value>> {
    let query = query.into_query()?;
    let page = state
        .application_service
        .employer_dashboard(&auth, &query, &params.into_page_request())
        .await?;
    Ok(Json(page_body("applications", page)?))
}

/// PUT /api/applications/{id}/status [employer, owner]
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<StatusUpdateRequest>,
) -> ApiResult<Json<Application>> {
    let id = parse_uuid(&id, "Invalid application ID")?;
    let application = state
        .application_service
        .update_status(&auth, id, &req.status)
        .await?;
    Ok(Json(application))
}

/// Pulls the `resume` part out of the form. Other parts are skipped.
async fn read_resume(mut multipart: Multipart) -> Result<Option<ResumeUpload>, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(String::from);
        let content_type = field.content_type().map(String::from);
        let data = field.bytes().await.map_err(multipart_error)?;
        return Ok(Some(ResumeUpload {
            file_name,
            content_type,
            data,
        }));
    }
    Ok(None)
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::payload_too_large("Resume exceeds the maximum upload size")
    } else {
        AppError::validation(err.body_text())
    }
}
