//! `AuthUser` extractor: pulls the JWT from the Authorization header or the
//! session cookie, validates it, resolves the account it names, and injects
//! the request context.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use jobportal_core::error::AppError;
use jobportal_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // A guard layer may already have verified this request
        if let Some(ctx) = parts.extensions.get::<RequestContext>() {
            return Ok(AuthUser(ctx.clone()));
        }

        let token = bearer_token(parts)
            .or_else(|| cookie_token(parts, &state.config.auth.cookie_name))
            .ok_or_else(|| AppError::unauthenticated("Not authorized, no token"))?;

        let claims = state.jwt_decoder.verify(&token)?;
        let ctx = state.auth_service.authenticate(&claims).await?;
        parts.extensions.insert(ctx.clone());

        Ok(AuthUser(ctx))
    }
}

/// Token from `Authorization: Bearer <token>`.
fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
}

/// Token from the session cookie.
fn cookie_token(parts: &Parts, cookie_name: &str) -> Option<String> {
    CookieJar::from_headers(&parts.headers)
        .get(cookie_name)
        .map(|c| c.value().to_string())
        .filter(|t| !t.is_empty())
}
