//! Dashboard counters for each role.

use std::sync::Arc;

use serde::Serialize;

use jobportal_core::error::AppError;
use jobportal_database::{
    ApplicationFilter, ApplicationStore, JobFilter, JobStore, UserFilter, UserStore,
};
use jobportal_entity::application::ApplicationStatus;
use jobportal_entity::user::UserRole;

use crate::context::RequestContext;

/// Platform-wide totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: u64,
    pub total_employers: u64,
    pub total_jobseekers: u64,
    pub total_jobs: u64,
    pub total_applications: u64,
}

/// Totals across an employer's postings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerStats {
    pub total_jobs: u64,
    pub total_applications: u64,
}

/// A jobseeker's applications by status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobseekerStats {
    pub total_applications: u64,
    pub accepted: u64,
    pub rejected: u64,
    pub pending: u64,
}

#[derive(Debug, Clone)]
pub struct DashboardService {
    users: Arc<dyn UserStore>,
    jobs: Arc<dyn JobStore>,
    applications: Arc<dyn ApplicationStore>,
}

impl DashboardService {
    pub fn new(
        users: Arc<dyn UserStore>,
        jobs: Arc<dyn JobStore>,
        applications: Arc<dyn ApplicationStore>,
    ) -> Self {
        Self {
            users,
            jobs,
            applications,
        }
    }

    pub async fn admin_stats(&self) -> Result<AdminStats, AppError> {
        Ok(AdminStats {
            total_users: self.users.count(&UserFilter::default()).await?,
            total_employers: self
                .users
                .count(&UserFilter::by_role(UserRole::Employer))
                .await?,
            total_jobseekers: self
                .users
                .count(&UserFilter::by_role(UserRole::Jobseeker))
                .await?,
            total_jobs: self.jobs.count(&JobFilter::default()).await?,
            total_applications: self
                .applications
                .count(&ApplicationFilter::default())
                .await?,
        })
    }

    pub async fn employer_stats(&self, ctx: &RequestContext) -> Result<EmployerStats, AppError> {
        Ok(EmployerStats {
            total_jobs: self.jobs.count(&JobFilter::by_employer(ctx.user_id)).await?,
            total_applications: self
                .applications
                .count(&ApplicationFilter::by_employer(ctx.user_id))
                .await?,
        })
    }

    pub async fn jobseeker_stats(&self, ctx: &RequestContext) -> Result<JobseekerStats, AppError> {
        let mine = ApplicationFilter::by_applicant(ctx.user_id);
        Ok(JobseekerStats {
            total_applications: self.applications.count(&mine).await?,
            accepted: self
                .applications
                .count(&mine.clone().with_status(ApplicationStatus::Accepted))
                .await?,
            rejected: self
                .applications
                .count(&mine.clone().with_status(ApplicationStatus::Rejected))
                .await?,
            pending: self
                .applications
                .count(&mine.with_status(ApplicationStatus::Pending))
                .await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use jobportal_database::Database;
    use jobportal_entity::application::NewApplication;
    use jobportal_entity::job::CreateJob;
    use jobportal_entity::user::CreateUser;

    use super::*;

    #[tokio::test]
    async fn test_counters() {
        let db = Database::memory();
        let svc = DashboardService::new(db.users(), db.jobs(), db.applications());

        let employer = db
            .users()
            .create(&CreateUser {
                name: "Erin".to_string(),
                email: "erin@x.io".to_string(),
                password_hash: "x".to_string(),
                role: UserRole::Employer,
            })
            .await
            .unwrap();
        let seeker = db
            .users()
            .create(&CreateUser {
                name: "Jay".to_string(),
                email: "jay@x.io".to_string(),
                password_hash: "x".to_string(),
                role: UserRole::Jobseeker,
            })
            .await
            .unwrap();
        let job = db
            .jobs()
            .create(&CreateJob {
                title: "Backend Engineer".to_string(),
                description: "Build and run services".to_string(),
                company: "Acme".to_string(),
                location: "Remote".to_string(),
                salary: None,
                employer_id: employer.id,
            })
            .await
            .unwrap();
        let application = db
            .applications()
            .create(&NewApplication {
                job_id: job.id,
                applicant_id: seeker.id,
                resume: "/uploads/resumes/x.pdf".to_string(),
            })
            .await
            .unwrap();
        db.applications()
            .update_status(application.id, ApplicationStatus::Accepted)
            .await
            .unwrap();

        assert_eq!(
            svc.admin_stats().await.unwrap(),
            AdminStats {
                total_users: 2,
                total_employers: 1,
                total_jobseekers: 1,
                total_jobs: 1,
                total_applications: 1,
            }
        );
        assert_eq!(
            svc.employer_stats(&RequestContext::new(employer.id, employer.role))
                .await
                .unwrap(),
            EmployerStats {
                total_jobs: 1,
                total_applications: 1,
            }
        );
        assert_eq!(
            svc.jobseeker_stats(&RequestContext::new(seeker.id, seeker.role))
                .await
                .unwrap(),
            JobseekerStats {
                total_applications: 1,
                accepted: 1,
                rejected: 0,
                pending: 0,
            }
        );

        let stranger = RequestContext::new(Uuid::new_v4(), UserRole::Employer);
        assert_eq!(svc.employer_stats(&stranger).await.unwrap().total_jobs, 0);
    }
}
