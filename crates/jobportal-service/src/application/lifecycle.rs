//! Review-status transitions.

use jobportal_core::error::AppError;
use jobportal_entity::application::ApplicationStatus;

/// Validates a requested status change.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusLifecycle;

impl StatusLifecycle {
    /// Parse `requested` and check it is reachable from `current`.
    ///
    /// Fails with `Validation("Invalid status")` for any value outside
    /// `pending`, `accepted`, `rejected`.
    pub fn transition(
        &self,
        current: ApplicationStatus,
        requested: &str,
    ) -> Result<ApplicationStatus, AppError> {
        let next: ApplicationStatus = requested.parse()?;
        if !current.can_transition_to(next) {
            return Err(AppError::validation(format!(
                "Cannot change status from {current} to {next}"
            )));
        }
        Ok(next)
    }

    /// Parse a requested status without a current state to compare against.
    pub fn parse(&self, requested: &str) -> Result<ApplicationStatus, AppError> {
        requested.parse()
    }
}
