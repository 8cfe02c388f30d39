//! Auth handlers: register, login, logout, me.

use axum::Json;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::IntoResponse;

use jobportal_core::config::AuthConfig;
use jobportal_core::error::AppError;
use jobportal_entity::user::User;
use jobportal_service::auth::AuthSession;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::MessageResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthSession>)> {
    let session = state
        .auth_service
        .register(req.into_registration()?)
        .await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// POST /api/auth/login
///
/// Returns the token in the body and also sets it as an httpOnly cookie.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let session = state
        .auth_service
        .login(req.email.trim(), &req.password)
        .await?;

    let max_age = state.auth_service.token_ttl().num_seconds();
    let cookie = session_cookie(&state.config.auth, &session.token, max_age)?;

    Ok(([(SET_COOKIE, cookie)], Json(session)))
}

/// POST /api/auth/logout
///
/// Tokens are not tracked server-side; logging out only clears the cookie.
pub async fn logout(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let cookie = session_cookie(&state.config.auth, "", 0)?;
    Ok((
        [(SET_COOKIE, cookie)],
        Json(MessageResponse::new("Logged out successfully")),
    ))
}

/// GET /api/auth/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<User>> {
    let user = state.auth_service.me(&auth).await?;
    Ok(Json(user))
}

/// Formats the `Set-Cookie` value carrying the session token.
fn session_cookie(config: &AuthConfig, token: &str, max_age: i64) -> Result<HeaderValue, AppError> {
    let secure = if config.cookie_secure { "; Secure" } else { "" };
    let value = format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax{}",
        config.cookie_name, token, max_age, secure
    );
    HeaderValue::from_str(&value).map_err(|e| AppError::internal(format!("Invalid cookie: {e}")))
}
