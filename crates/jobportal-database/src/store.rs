//! Storage traits implemented by every provider.
//!
//! Every listing is ordered by `created_at` descending. Lookups of a
//! missing row return `Ok(None)`; only genuine storage failures are errors.

use async_trait::async_trait;
use uuid::Uuid;

use jobportal_core::result::AppResult;
use jobportal_core::types::{PageRequest, PageResponse};
use jobportal_entity::application::{Application, ApplicationStatus, NewApplication};
use jobportal_entity::job::{CreateJob, Job, UpdateJob};
use jobportal_entity::user::{CreateUser, UpdateUser, User};

use crate::filter::{ApplicationFilter, JobFilter, UserFilter};

/// Persistence for identities.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by email, ignoring case.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Fetch every user whose id is in `ids`. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<User>>;

    /// List users matching `filter`, one page at a time.
    async fn list(&self, filter: &UserFilter, page: &PageRequest)
    -> AppResult<PageResponse<User>>;

    /// Count users matching `filter`.
    async fn count(&self, filter: &UserFilter) -> AppResult<u64>;

    /// Insert a user. Fails with `Conflict` when the email is taken.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Apply a partial update. Fails with `NotFound` or `Conflict`.
    async fn update(&self, id: Uuid, data: &UpdateUser) -> AppResult<User>;

    /// Delete a user. Returns `false` when no such user existed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Persistence for job postings.
#[async_trait]
pub trait JobStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a posting by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Job>>;

    /// Fetch every posting whose id is in `ids`. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Job>>;

    /// List postings matching `filter`, one page at a time.
    async fn list(&self, filter: &JobFilter, page: &PageRequest) -> AppResult<PageResponse<Job>>;

    /// Count postings matching `filter`.
    async fn count(&self, filter: &JobFilter) -> AppResult<u64>;

    /// Insert a posting.
    async fn create(&self, data: &CreateJob) -> AppResult<Job>;

    /// Apply a partial update. Fails with `NotFound`.
    async fn update(&self, id: Uuid, data: &UpdateJob) -> AppResult<Job>;

    /// Delete a posting. Returns `false` when no such posting existed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Persistence for applications.
#[async_trait]
pub trait ApplicationStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find an application by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Application>>;

    /// Find the application a jobseeker submitted to a posting, if any.
    async fn find_by_job_and_applicant(
        &self,
        job_id: Uuid,
        applicant_id: Uuid,
    ) -> AppResult<Option<Application>>;

    /// List applications matching `filter`, one page at a time.
    async fn list(
        &self,
        filter: &ApplicationFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Application>>;

    /// Count applications matching `filter`.
    async fn count(&self, filter: &ApplicationFilter) -> AppResult<u64>;

    /// Insert a `pending` application. Fails with `Conflict` when the
    /// jobseeker already applied to the posting.
    async fn create(&self, data: &NewApplication) -> AppResult<Application>;

    /// Overwrite the review status. Fails with `NotFound`.
    async fn update_status(&self, id: Uuid, status: ApplicationStatus) -> AppResult<Application>;
}
