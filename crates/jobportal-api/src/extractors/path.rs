//! Typed path parameter helpers.

use uuid::Uuid;

use jobportal_core::error::AppError;

/// Parses a UUID from a path segment, failing with `message` on bad input.
pub fn parse_uuid(s: &str, message: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(s).map_err(|_| AppError::validation(message))
}
