//! Application service: apply, list, review.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use jobportal_auth::ownership::OwnershipResolver;
use jobportal_core::error::{AppError, ErrorKind};
use jobportal_core::types::{PageRequest, PageResponse};
use jobportal_database::{ApplicationFilter, ApplicationStore, JobStore, UserStore};
use jobportal_entity::application::{Application, ApplicationStatus, NewApplication};
use jobportal_entity::job::Job;
use jobportal_entity::view::ApplicationView;

use super::lifecycle::StatusLifecycle;
use super::resume::{ResumeStorage, ResumeUpload};
use crate::context::RequestContext;
use crate::populate;

/// Criteria shared by the application listings.
///
/// `keyword` is matched after population against the joined posting (for
/// the jobseeker's own list) or the joined applicant (for employer views).
/// Items failing it are dropped from the page without adjusting `total`.
#[derive(Debug, Clone, Default)]
pub struct ApplicationListQuery {
    /// Exact status.
    pub status: Option<ApplicationStatus>,
    /// Exact posting.
    pub job_id: Option<Uuid>,
    /// Exact applicant.
    pub applicant_id: Option<Uuid>,
    /// Post-join substring match.
    pub keyword: Option<String>,
}

impl ApplicationListQuery {
    fn filter(&self) -> ApplicationFilter {
        ApplicationFilter {
            status: self.status,
            job_id: self.job_id,
            applicant_id: self.applicant_id,
            employer_id: None,
        }
    }
}

/// Manages job applications and their review status.
#[derive(Debug, Clone)]
pub struct ApplicationService {
    applications: Arc<dyn ApplicationStore>,
    jobs: Arc<dyn JobStore>,
    users: Arc<dyn UserStore>,
    resumes: Arc<ResumeStorage>,
    ownership: OwnershipResolver,
    lifecycle: StatusLifecycle,
}

impl ApplicationService {
    /// Creates a new application service.
    pub fn new(
        applications: Arc<dyn ApplicationStore>,
        jobs: Arc<dyn JobStore>,
        users: Arc<dyn UserStore>,
        resumes: Arc<ResumeStorage>,
    ) -> Self {
        Self {
            applications,
            jobs,
            users,
            resumes,
            ownership: OwnershipResolver,
            lifecycle: StatusLifecycle,
        }
    }

    /// Submits the caller's application to a posting.
    ///
    /// Checks run in a fixed order: posting exists, no prior application,
    /// resume present, resume is a PDF, resume within the size limit. The
    /// file is written only after every check passes, and removed again if
    /// the insert loses a race against a concurrent duplicate.
    pub async fn apply(
        &self,
        ctx: &RequestContext,
        job_id: Uuid,
        resume: Option<ResumeUpload>,
    ) -> Result<Application, AppError> {
        self.find_job(job_id).await?;

        if self
            .applications
            .find_by_job_and_applicant(job_id, ctx.user_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Already applied for this job"));
        }

        let resume = resume.ok_or_else(|| AppError::validation("Resume is required"))?;
        self.resumes.validate(&resume)?;
        let stored = self.resumes.save(ctx.user_id, &resume).await?;

        let created = self
            .applications
            .create(&NewApplication {
                job_id,
                applicant_id: ctx.user_id,
                resume: stored.public_path.clone(),
            })
            .await;

        match created {
            Ok(application) => {
                info!(
                    application_id = %application.id,
                    job_id = %job_id,
                    applicant_id = %ctx.user_id,
                    "Application submitted"
                );
                Ok(application)
            }
            Err(e) => {
                self.resumes.remove(&stored).await;
                if e.is(ErrorKind::Conflict) {
                    warn!(job_id = %job_id, applicant_id = %ctx.user_id, "Duplicate application rejected");
                }
                Err(e)
            }
        }
    }

    /// The caller's own applications with postings attached. `keyword`
    /// matches posting title or company.
    pub async fn list_mine(
        &self,
        ctx: &RequestContext,
        query: &ApplicationListQuery,
        page: &PageRequest,
    ) -> Result<PageResponse<ApplicationView>, AppError> {
        let filter = ApplicationFilter {
            applicant_id: Some(ctx.user_id),
            ..query.filter()
        };
        let result = self.list_populated(&filter, page).await?;
        Ok(match &query.keyword {
            Some(keyword) => result.retain(|v| v.job_matches(keyword)),
            None => result,
        })
    }

    /// Applicants for one of the caller's postings. `keyword` matches
    /// applicant name or email.
    pub async fn list_for_job(
        &self,
        ctx: &RequestContext,
        job_id: Uuid,
        query: &ApplicationListQuery,
        page: &PageRequest,
    ) -> Result<PageResponse<ApplicationView>, AppError> {
        let job = self.find_job(job_id).await?;
        self.ownership.resolve_application_access(ctx.user_id, &job)?;

        let filter = ApplicationFilter {
            job_id: Some(job_id),
            ..query.filter()
        };
        self.list_for_employer(&filter, query, page).await
    }

    /// Applications across every posting the caller owns.
    pub async fn employer_dashboard(
        &self,
        ctx: &RequestContext,
        query: &ApplicationListQuery,
        page: &PageRequest,
    ) -> Result<PageResponse<ApplicationView>, AppError> {
        let filter = ApplicationFilter {
            employer_id: Some(ctx.user_id),
            applicant_id: None,
            ..query.filter()
        };
        self.list_for_employer(&filter, query, page).await
    }

    /// Every application, for the super-admin.
    pub async fn list_all(
        &self,
        query: &ApplicationListQuery,
        page: &PageRequest,
    ) -> Result<PageResponse<ApplicationView>, AppError> {
        self.list_populated(&query.filter(), page).await
    }

    /// Changes an application's review status.
    ///
    /// Order of checks: the requested value is a valid status, the
    /// application exists, its posting exists, the caller owns the posting.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        requested: &str,
    ) -> Result<Application, AppError> {
        self.lifecycle.parse(requested)?;

        let application = self
            .applications
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Application not found"))?;
        let job = self.find_job(application.job_id).await?;
        self.ownership.resolve_application_access(ctx.user_id, &job)?;

        let next = self.lifecycle.transition(application.status, requested)?;
        let updated = self.applications.update_status(id, next).await?;

        info!(
            application_id = %id,
            from = %application.status,
            to = %next,
            employer_id = %ctx.user_id,
            "Application status changed"
        );
        Ok(updated)
    }

    async fn list_for_employer(
        &self,
        filter: &ApplicationFilter,
        query: &ApplicationListQuery,
        page: &PageRequest,
    ) -> Result<PageResponse<ApplicationView>, AppError> {
        let result = self.list_populated(filter, page).await?;
        Ok(match &query.keyword {
            Some(keyword) => result.retain(|v| v.applicant_matches(keyword)),
            None => result,
        })
    }

    async fn list_populated(
        &self,
        filter: &ApplicationFilter,
        page: &PageRequest,
    ) -> Result<PageResponse<ApplicationView>, AppError> {
        let mut result = self.applications.list(filter, page).await?;
        let items = std::mem::take(&mut result.items);
        let views = populate::applications_with_relations(
            self.jobs.as_ref(),
            self.users.as_ref(),
            items,
        )
        .await?;
        Ok(result.with_items(views))
    }

    async fn find_job(&self, id: Uuid) -> Result<Job, AppError> {
        self.jobs
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Job not found"))
    }
}
