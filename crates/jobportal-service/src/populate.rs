//! Read-only population of related entities.
//!
//! Each helper loads the referenced rows in one batch and attaches a
//! summary to every record. References whose target no longer exists are
//! attached as `None`.

use std::collections::HashMap;

use uuid::Uuid;

use jobportal_core::result::AppResult;
use jobportal_database::{JobStore, UserStore};
use jobportal_entity::application::Application;
use jobportal_entity::job::Job;
use jobportal_entity::view::{ApplicationView, JobSummary, JobView, UserSummary};

fn unique_ids(ids: impl Iterator<Item = Uuid>) -> Vec<Uuid> {
    let mut ids: Vec<Uuid> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

async fn user_summaries(
    users: &dyn UserStore,
    ids: impl Iterator<Item = Uuid>,
) -> AppResult<HashMap<Uuid, UserSummary>> {
    let found = users.find_by_ids(&unique_ids(ids)).await?;
    Ok(found.iter().map(|u| (u.id, UserSummary::from(u))).collect())
}

/// Attach each posting's employer.
pub async fn jobs_with_employer(users: &dyn UserStore, jobs: Vec<Job>) -> AppResult<Vec<JobView>> {
    let employers = user_summaries(users, jobs.iter().map(|j| j.employer_id)).await?;
    Ok(jobs
        .into_iter()
        .map(|job| JobView {
            employer: employers.get(&job.employer_id).cloned(),
            job,
        })
        .collect())
}

/// Attach each application's posting and applicant.
pub async fn applications_with_relations(
    jobs: &dyn JobStore,
    users: &dyn UserStore,
    applications: Vec<Application>,
) -> AppResult<Vec<ApplicationView>> {
    let job_ids = unique_ids(applications.iter().map(|a| a.job_id));
    let postings: HashMap<Uuid, JobSummary> = jobs
        .find_by_ids(&job_ids)
        .await?
        .iter()
        .map(|j| (j.id, JobSummary::from(j)))
        .collect();
    let applicants = user_summaries(users, applications.iter().map(|a| a.applicant_id)).await?;

    Ok(applications
        .into_iter()
        .map(|application| ApplicationView {
            job: postings.get(&application.job_id).cloned(),
            applicant: applicants.get(&application.applicant_id).cloned(),
            application,
        })
        .collect())
}
