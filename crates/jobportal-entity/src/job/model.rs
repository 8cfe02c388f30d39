//! Job posting entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A job listing owned by exactly one employer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique posting identifier.
    pub id: Uuid,
    /// Job title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Hiring company name.
    pub company: String,
    /// Work location.
    pub location: String,
    /// Offered salary, if published.
    pub salary: Option<f64>,
    /// The owning employer.
    pub employer_id: Uuid,
    /// When the posting was created.
    pub created_at: DateTime<Utc>,
    /// When the posting was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Check whether the given user owns this posting.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.employer_id == user_id
    }

    /// Apply a partial update in place.
    pub fn apply(&mut self, update: &UpdateJob) {
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
        if let Some(company) = &update.company {
            self.company = company.clone();
        }
        if let Some(location) = &update.location {
            self.location = location.clone();
        }
        if let Some(salary) = update.salary {
            self.salary = Some(salary);
        }
    }
}

/// Data required to create a new posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJob {
    /// Job title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Company.
    pub company: String,
    /// Location.
    pub location: String,
    /// Optional salary.
    pub salary: Option<f64>,
    /// The employer creating the posting.
    pub employer_id: Uuid,
}

/// Partial update of a posting; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateJob {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New company.
    pub company: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New salary.
    pub salary: Option<f64>,
}
