//! Convenience result type alias for the job portal.

use crate::error::AppError;

/// A specialized `Result` type for job portal operations.
pub type AppResult<T> = Result<T, AppError>;
