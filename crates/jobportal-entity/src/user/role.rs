//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available to accounts.
///
/// Roles are flat: no role implies the privileges of another. A
/// super-admin passes only checks that name `superadmin` explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Applies to postings.
    Jobseeker,
    /// Publishes postings and reviews applicants.
    Employer,
    /// Oversees all users, postings, and applications.
    Superadmin,
}

impl UserRole {
    /// All roles, in declaration order.
    pub const ALL: [UserRole; 3] = [Self::Jobseeker, Self::Employer, Self::Superadmin];

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jobseeker => "jobseeker",
            Self::Employer => "employer",
            Self::Superadmin => "superadmin",
        }
    }

    /// Whether this role may be chosen during self-registration.
    pub fn is_self_assignable(&self) -> bool {
        matches!(self, Self::Jobseeker | Self::Employer)
    }
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Jobseeker
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = jobportal_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jobseeker" => Ok(Self::Jobseeker),
            "employer" => Ok(Self::Employer),
            "superadmin" => Ok(Self::Superadmin),
            _ => Err(jobportal_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: jobseeker, employer, superadmin"
            ))),
        }
    }
}
