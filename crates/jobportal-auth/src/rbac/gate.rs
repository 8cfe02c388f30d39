//! Exact-membership role gate.

use jobportal_core::error::AppError;
use jobportal_entity::user::UserRole;

/// Checks a caller's role against the set a route allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleGate {
    allowed: &'static [UserRole],
}

impl RoleGate {
    /// Routes reserved for employers.
    pub const EMPLOYER: RoleGate = RoleGate::new(&[UserRole::Employer]);
    /// Routes reserved for jobseekers.
    pub const JOBSEEKER: RoleGate = RoleGate::new(&[UserRole::Jobseeker]);
    /// Routes reserved for the super-admin.
    pub const SUPERADMIN: RoleGate = RoleGate::new(&[UserRole::Superadmin]);

    /// Gate that admits exactly `allowed`.
    pub const fn new(allowed: &'static [UserRole]) -> Self {
        Self { allowed }
    }

    /// Whether `role` is admitted.
    pub fn admits(&self, role: UserRole) -> bool {
        self.allowed.contains(&role)
    }

    /// Fails with `Forbidden` unless `role` is admitted.
    pub fn require(&self, role: UserRole) -> Result<(), AppError> {
        if self.admits(role) {
            Ok(())
        } else {
            tracing::warn!(role = %role, allowed = ?self.allowed, "Role denied");
            Err(AppError::forbidden("Access denied"))
        }
    }
}
