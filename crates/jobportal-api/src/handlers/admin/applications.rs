//! Admin view over every application.

use axum::Json;
use axum::extract::{Query, State};
use serde_json::Value;

use crate::dto::request::ApplicationQuery;
use crate::dto::response::page_body;
use crate::error::ApiResult;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/admin/applications
pub async fn list_applications(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
    Query(query): Query<ApplicationQuery>,
) -> ApiResult<Json<Value>> {
    let query = query.into_query()?;
    let page = state
        .application_service
        .list_all(&query, &params.into_page_request())
        .await?;
    Ok(Json(page_body("applications", page)?))
}
