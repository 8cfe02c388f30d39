//! Application entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::ApplicationStatus;

/// A jobseeker's submission against one posting.
///
/// At most one application exists per `(job_id, applicant_id)` pair; the
/// storage layer enforces this with a uniqueness constraint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Unique application identifier.
    pub id: Uuid,
    /// The posting applied to.
    pub job_id: Uuid,
    /// The applying jobseeker.
    pub applicant_id: Uuid,
    /// Public path of the uploaded resume.
    pub resume: String,
    /// Review status.
    pub status: ApplicationStatus,
    /// When the application was submitted.
    pub created_at: DateTime<Utc>,
    /// When the application was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to record a new application. Status always starts `pending`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewApplication {
    /// The posting applied to.
    pub job_id: Uuid,
    /// The applying jobseeker.
    pub applicant_id: Uuid,
    /// Public path of the uploaded resume.
    pub resume: String,
}
