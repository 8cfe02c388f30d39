//! Per-resource ownership checks.
//!
//! Callers load the target first and report a missing target as
//! `NotFound` before consulting these checks, so existence is never
//! hidden behind a `Forbidden`.

use uuid::Uuid;

use jobportal_core::error::AppError;
use jobportal_entity::job::Job;
use jobportal_entity::user::UserRole;

/// What the caller intends to do with a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobAction {
    /// Edit fields.
    Update,
    /// Remove the posting.
    Delete,
}

/// Decides whether an identity may act on a posting or its applications.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnershipResolver;

impl OwnershipResolver {
    /// The owning employer may update or delete; a super-admin may delete.
    pub fn resolve_job_ownership(
        &self,
        actor_id: Uuid,
        actor_role: UserRole,
        job: &Job,
        action: JobAction,
    ) -> Result<(), AppError> {
        if job.is_owned_by(actor_id) {
            return Ok(());
        }
        if action == JobAction::Delete && actor_role == UserRole::Superadmin {
            return Ok(());
        }
        tracing::warn!(
            actor_id = %actor_id,
            job_id = %job.id,
            action = ?action,
            "Job ownership check failed"
        );
        Err(AppError::forbidden("Not authorized"))
    }

    /// Only the employer owning `job` may review its applications.
    pub fn resolve_application_access(&self, actor_id: Uuid, job: &Job) -> Result<(), AppError> {
        if job.is_owned_by(actor_id) {
            return Ok(());
        }
        tracing::warn!(
            actor_id = %actor_id,
            job_id = %job.id,
            "Application access check failed"
        );
        Err(AppError::forbidden("Not authorized"))
    }
}
