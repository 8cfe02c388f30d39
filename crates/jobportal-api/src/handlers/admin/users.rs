//! Admin user management handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::Value;

use jobportal_entity::user::User;

use crate::dto::request::{CreateUserRequest, UpdateUserRequest, UserQuery};
use crate::dto::response::{MessageResponse, page_body};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, PaginationParams, ValidatedJson, parse_uuid};
use crate::state::AppState;

const INVALID_USER_ID: &str = "Invalid user ID";

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
    Query(query): Query<UserQuery>,
) -> ApiResult<Json<Value>> {
    let filter = query.into_filter()?;
    let page = state
        .admin_service
        .list_users(&filter, &params.into_page_request())
        .await?;
    Ok(Json(page_body("users", page)?))
}

/// POST /api/admin/users
pub async fn create_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let user = state
        .admin_service
        .create_user(&auth, req.into_account()?)
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /api/admin/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<User>> {
    let id = parse_uuid(&id, INVALID_USER_ID)?;
    let user = state
        .admin_service
        .update_user(&auth, id, req.into_update()?)
        .await?;
    Ok(Json(user))
}

/// DELETE /api/admin/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_uuid(&id, INVALID_USER_ID)?;
    state.admin_service.delete_user(&auth, id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
