//! Read-only projections with related entities populated.
//!
//! Population never mutates the source record. A reference whose target
//! has been deleted is rendered as `null`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::Application;
use crate::job::Job;
use crate::user::User;

/// Public fields of a user, as embedded in other resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    /// User ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Public fields of a posting, as embedded in applications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    /// Posting ID.
    pub id: Uuid,
    /// Job title.
    pub title: String,
    /// Company.
    pub company: String,
    /// Location.
    pub location: String,
}

impl From<&Job> for JobSummary {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id,
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
        }
    }
}

/// A posting with its employer populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobView {
    /// The posting itself.
    #[serde(flatten)]
    pub job: Job,
    /// The owning employer.
    pub employer: Option<UserSummary>,
}

/// An application with its posting and applicant populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationView {
    /// The application itself.
    #[serde(flatten)]
    pub application: Application,
    /// The posting applied to.
    pub job: Option<JobSummary>,
    /// The applying jobseeker.
    pub applicant: Option<UserSummary>,
}

impl ApplicationView {
    /// Case-insensitive substring match of `keyword` against the posting's
    /// title or company.
    pub fn job_matches(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.job.as_ref().is_some_and(|job| {
            job.title.to_lowercase().contains(&needle)
                || job.company.to_lowercase().contains(&needle)
        })
    }

    /// Case-insensitive substring match of `keyword` against the
    /// applicant's name or email.
    pub fn applicant_matches(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.applicant.as_ref().is_some_and(|user| {
            user.name.to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle)
        })
    }
}
