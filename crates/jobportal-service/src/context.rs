//! Request context carrying the authenticated identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jobportal_entity::user::UserRole;

/// Immutable identity of the caller for one request.
///
/// Built once per request from the stored account that verified token
/// claims point at, and passed by reference into every service method
/// that acts on behalf of a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The user's current stored role.
    pub role: UserRole,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, role: UserRole) -> Self {
        Self {
            user_id,
            role,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the caller is the super-admin.
    pub fn is_superadmin(&self) -> bool {
        self.role == UserRole::Superadmin
    }
}
