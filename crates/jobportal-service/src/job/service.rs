//! Job posting service: listing, lookup, and owner-checked mutation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use jobportal_auth::ownership::{JobAction, OwnershipResolver};
use jobportal_core::error::AppError;
use jobportal_core::types::{PageRequest, PageResponse};
use jobportal_database::{JobFilter, JobStore, UserStore};
use jobportal_entity::job::{CreateJob, Job, UpdateJob};
use jobportal_entity::view::JobView;

use crate::context::RequestContext;
use crate::populate;

/// Fields an employer supplies when publishing a posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPosting {
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
}

/// Manages job postings.
#[derive(Debug, Clone)]
pub struct JobService {
    jobs: Arc<dyn JobStore>,
    users: Arc<dyn UserStore>,
    ownership: OwnershipResolver,
}

impl JobService {
    /// Creates a new job service.
    pub fn new(jobs: Arc<dyn JobStore>, users: Arc<dyn UserStore>) -> Self {
        Self {
            jobs,
            users,
            ownership: OwnershipResolver,
        }
    }

    /// Lists postings matching `filter`, newest first, with employers attached.
    pub async fn list(
        &self,
        filter: &JobFilter,
        page: &PageRequest,
    ) -> Result<PageResponse<JobView>, AppError> {
        let mut result = self.jobs.list(filter, page).await?;
        let items = std::mem::take(&mut result.items);
        let views = populate::jobs_with_employer(self.users.as_ref(), items).await?;
        Ok(result.with_items(views))
    }

    /// Lists the caller's own postings. Any `employer_id` in `filter` is
    /// replaced by the caller's id.
    pub async fn list_mine(
        &self,
        ctx: &RequestContext,
        filter: JobFilter,
        page: &PageRequest,
    ) -> Result<PageResponse<JobView>, AppError> {
        let filter = JobFilter {
            employer_id: Some(ctx.user_id),
            ..filter
        };
        self.list(&filter, page).await
    }

    /// Fetches one posting with its employer attached.
    pub async fn get(&self, id: Uuid) -> Result<JobView, AppError> {
        let job = self.find(id).await?;
        let mut views = populate::jobs_with_employer(self.users.as_ref(), vec![job]).await?;
        views
            .pop()
            .ok_or_else(|| AppError::internal("Population dropped a posting"))
    }

    /// Publishes a posting owned by the caller.
    pub async fn create(&self, ctx: &RequestContext, input: NewPosting) -> Result<Job, AppError> {
        let job = self
            .jobs
            .create(&CreateJob {
                title: input.title,
                description: input.description,
                company: input.company,
                location: input.location,
                salary: input.salary,
                employer_id: ctx.user_id,
            })
            .await?;
        info!(job_id = %job.id, employer_id = %ctx.user_id, "Job created");
        Ok(job)
    }

    /// Updates a posting. Only its owning employer may do so.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        update: UpdateJob,
    ) -> Result<Job, AppError> {
        let job = self.find(id).await?;
        self.ownership
            .resolve_job_ownership(ctx.user_id, ctx.role, &job, JobAction::Update)?;
        let job = self.jobs.update(id, &update).await?;
        info!(job_id = %id, user_id = %ctx.user_id, "Job updated");
        Ok(job)
    }

    /// Deletes a posting. Allowed for its owner or the super-admin.
    /// Applications referencing it are left in place.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let job = self.find(id).await?;
        self.ownership
            .resolve_job_ownership(ctx.user_id, ctx.role, &job, JobAction::Delete)?;
        if !self.jobs.delete(id).await? {
            return Err(AppError::not_found("Job not found"));
        }
        info!(job_id = %id, user_id = %ctx.user_id, role = %ctx.role, "Job deleted");
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Job, AppError> {
        self.jobs
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Job not found"))
    }
}

#[cfg(test)]
mod tests {
    use jobportal_core::error::ErrorKind;
    use jobportal_database::Database;
    use jobportal_entity::user::{CreateUser, UserRole};

    use super::*;

    async fn employer(db: &Database, email: &str) -> RequestContext {
        let user = db
            .users()
            .create(&CreateUser {
                name: "Erin Employer".to_string(),
                email: email.to_string(),
                password_hash: "x".to_string(),
                role: UserRole::Employer,
            })
            .await
            .unwrap();
        RequestContext::new(user.id, user.role)
    }

    fn posting(title: &str, salary: Option<f64>) -> NewPosting {
        NewPosting {
            title: title.to_string(),
            description: "Build and operate backend services".to_string(),
            company: "Acme".to_string(),
            location: "Berlin".to_string(),
            salary,
        }
    }

    #[tokio::test]
    async fn test_get_populates_employer() {
        let db = Database::memory();
        let svc = JobService::new(db.jobs(), db.users());
        let owner = employer(&db, "e@x.io").await;
        let job = svc.create(&owner, posting("Backend Engineer", Some(90_000.0))).await.unwrap();

        let view = svc.get(job.id).await.unwrap();
        let employer = view.employer.unwrap();
        assert_eq!(employer.id, owner.user_id);
        assert_eq!(employer.email, "e@x.io");
    }

    #[tokio::test]
    async fn test_update_requires_ownership() {
        let db = Database::memory();
        let svc = JobService::new(db.jobs(), db.users());
        let owner = employer(&db, "owner@x.io").await;
        let other = employer(&db, "other@x.io").await;
        let job = svc.create(&owner, posting("Backend Engineer", None)).await.unwrap();

        let update = UpdateJob {
            title: Some("Senior Backend Engineer".to_string()),
            ..Default::default()
        };
        let err = svc.update(&other, job.id, update.clone()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);

        let updated = svc.update(&owner, job.id, update).await.unwrap();
        assert_eq!(updated.title, "Senior Backend Engineer");
    }

    #[tokio::test]
    async fn test_missing_job_is_not_found_for_everyone() {
        let db = Database::memory();
        let svc = JobService::new(db.jobs(), db.users());
        let stranger = employer(&db, "s@x.io").await;
        let err = svc
            .update(&stranger, Uuid::new_v4(), UpdateJob::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_superadmin_may_delete_but_not_update() {
        let db = Database::memory();
        let svc = JobService::new(db.jobs(), db.users());
        let owner = employer(&db, "o@x.io").await;
        let admin = RequestContext::new(Uuid::new_v4(), UserRole::Superadmin);
        let job = svc.create(&owner, posting("Backend Engineer", None)).await.unwrap();

        assert!(svc.update(&admin, job.id, UpdateJob::default()).await.is_err());
        svc.delete(&admin, job.id).await.unwrap();
        assert_eq!(
            svc.get(job.id).await.unwrap_err().kind,
            ErrorKind::NotFound
        );
    }

    #[tokio::test]
    async fn test_list_mine_scopes_to_caller() {
        let db = Database::memory();
        let svc = JobService::new(db.jobs(), db.users());
        let a = employer(&db, "a@x.io").await;
        let b = employer(&db, "b@x.io").await;
        svc.create(&a, posting("Engineer A", None)).await.unwrap();
        svc.create(&b, posting("Engineer B", None)).await.unwrap();

        let filter = JobFilter {
            employer_id: Some(b.user_id),
            ..Default::default()
        };
        let mine = svc
            .list_mine(&a, filter, &PageRequest::default())
            .await
            .unwrap();
        assert_eq!(mine.total, 1);
        assert_eq!(mine.items[0].job.title, "Engineer A");
    }
}
