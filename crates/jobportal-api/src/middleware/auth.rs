//! Role guard middleware.
//!
//! Each guard authenticates the request through the `AuthUser` extractor and
//! then applies one [`RoleGate`]. Guards are attached per route (or per route
//! group) so a rejected request never reaches the handler, not even its body
//! extraction.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use jobportal_auth::RoleGate;

use crate::error::ApiError;
use crate::extractors::AuthUser;

/// Admits only authenticated employers.
pub async fn employer_guard(
    auth: AuthUser,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    admit(RoleGate::EMPLOYER, auth, request, next).await
}

/// Admits only authenticated jobseekers.
pub async fn jobseeker_guard(
    auth: AuthUser,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    admit(RoleGate::JOBSEEKER, auth, request, next).await
}

/// Admits only authenticated super-admins.
pub async fn superadmin_guard(
    auth: AuthUser,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    admit(RoleGate::SUPERADMIN, auth, request, next).await
}

/// Runs the gate, then forwards with the verified context in the request
/// extensions so the handler's own `AuthUser` does not decode the token again.
async fn admit(
    gate: RoleGate,
    auth: AuthUser,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    gate.require(auth.role)?;
    request.extensions_mut().insert(auth.0);
    Ok(next.run(request).await)
}
