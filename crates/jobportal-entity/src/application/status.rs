//! Application review status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use jobportal_core::AppError;

/// Review status of an application.
///
/// ```text
/// pending ──► accepted
///    ▲  └───► rejected
///    └──────── (either may be reset to pending)
/// ```
///
/// No state is terminal; any of the three values is a valid target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "application_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Awaiting review. Initial state of every application.
    Pending,
    /// Accepted by the employer.
    Accepted,
    /// Rejected by the employer.
    Rejected,
}

impl ApplicationStatus {
    /// All statuses, in declaration order.
    pub const ALL: [ApplicationStatus; 3] = [Self::Pending, Self::Accepted, Self::Rejected];

    /// Whether the lifecycle permits moving from `self` to `next`.
    pub fn can_transition_to(&self, next: ApplicationStatus) -> bool {
        match (self, next) {
            (Self::Pending, _) => true,
            (Self::Accepted | Self::Rejected, _) => true,
        }
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl Default for ApplicationStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(AppError::validation("Invalid status")),
        }
    }
}
