//! In-process storage provider.
//!
//! All three collections live behind one [`RwLock`], so uniqueness checks
//! and the insert that follows them happen atomically. Used by the
//! integration tests and by `database.provider = "memory"`.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use jobportal_core::error::AppError;
use jobportal_core::result::AppResult;
use jobportal_core::types::{PageRequest, PageResponse};
use jobportal_entity::application::{Application, ApplicationStatus, NewApplication};
use jobportal_entity::job::{CreateJob, Job, UpdateJob};
use jobportal_entity::user::{CreateUser, UpdateUser, User};

use crate::filter::{ApplicationFilter, JobFilter, UserFilter};
use crate::store::{ApplicationStore, JobStore, UserStore};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    jobs: Vec<Job>,
    applications: Vec<Application>,
}

impl Tables {
    fn job(&self, id: Uuid) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    fn email_taken(&self, email: &str, except: Option<Uuid>) -> bool {
        self.users
            .iter()
            .any(|u| Some(u.id) != except && u.email.eq_ignore_ascii_case(email))
    }
}

/// Memory-backed implementation of every storage trait.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Newest first. Rows are stored in insertion order, so reversing before the
/// stable sort breaks timestamp ties in favour of the later insert.
fn newest_first<T: Clone>(rows: Vec<&T>, created_at: impl Fn(&T) -> DateTime<Utc>) -> Vec<T> {
    let mut rows: Vec<T> = rows.into_iter().rev().cloned().collect();
    rows.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    rows
}

fn paginate<T>(rows: Vec<T>, page: &PageRequest) -> PageResponse<T> {
    let total = rows.len() as u64;
    let items = rows
        .into_iter()
        .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
        .take(page.limit as usize)
        .collect();
    PageResponse::new(items, page, total)
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }

    async fn list(
        &self,
        filter: &UserFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<User>> {
        let tables = self.tables.read().await;
        let rows = tables.users.iter().filter(|u| filter.matches(u)).collect();
        Ok(paginate(newest_first(rows, |u: &User| u.created_at), page))
    }

    async fn count(&self, filter: &UserFilter) -> AppResult<u64> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().filter(|u| filter.matches(u)).count() as u64)
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut tables = self.tables.write().await;
        if tables.email_taken(&data.email, None) {
            return Err(AppError::conflict("Email already in use"));
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            role: data.role,
            created_at: now,
            updated_at: now,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: Uuid, data: &UpdateUser) -> AppResult<User> {
        let mut tables = self.tables.write().await;
        if let Some(email) = &data.email {
            if tables.email_taken(email, Some(id)) {
                return Err(AppError::conflict("Email already in use"));
            }
        }
        let user = tables
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::not_found("User not found"))?;
        if let Some(name) = &data.name {
            user.name = name.clone();
        }
        if let Some(email) = &data.email {
            user.email = email.clone();
        }
        if let Some(role) = data.role {
            user.role = role;
        }
        if let Some(hash) = &data.password_hash {
            user.password_hash = hash.clone();
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.users.len();
        tables.users.retain(|u| u.id != id);
        Ok(tables.users.len() < before)
    }
}

#[async_trait]
impl JobStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Job>> {
        let tables = self.tables.read().await;
        Ok(tables.job(id).cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Job>> {
        let tables = self.tables.read().await;
        Ok(tables
            .jobs
            .iter()
            .filter(|j| ids.contains(&j.id))
            .cloned()
            .collect())
    }

    async fn list(&self, filter: &JobFilter, page: &PageRequest) -> AppResult<PageResponse<Job>> {
        let tables = self.tables.read().await;
        let rows = tables.jobs.iter().filter(|j| filter.matches(j)).collect();
        Ok(paginate(newest_first(rows, |j: &Job| j.created_at), page))
    }

    async fn count(&self, filter: &JobFilter) -> AppResult<u64> {
        let tables = self.tables.read().await;
        Ok(tables.jobs.iter().filter(|j| filter.matches(j)).count() as u64)
    }

    async fn create(&self, data: &CreateJob) -> AppResult<Job> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let job = Job {
            id: Uuid::new_v4(),
            title: data.title.clone(),
            description: data.description.clone(),
            company: data.company.clone(),
            location: data.location.clone(),
            salary: data.salary,
            employer_id: data.employer_id,
            created_at: now,
            updated_at: now,
        };
        tables.jobs.push(job.clone());
        Ok(job)
    }

    async fn update(&self, id: Uuid, data: &UpdateJob) -> AppResult<Job> {
        let mut tables = self.tables.write().await;
        let job = tables
            .jobs
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or_else(|| AppError::not_found("Job not found"))?;
        job.apply(data);
        job.updated_at = Utc::now();
        Ok(job.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.jobs.len();
        tables.jobs.retain(|j| j.id != id);
        Ok(tables.jobs.len() < before)
    }
}

#[async_trait]
impl ApplicationStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Application>> {
        let tables = self.tables.read().await;
        Ok(tables.applications.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_job_and_applicant(
        &self,
        job_id: Uuid,
        applicant_id: Uuid,
    ) -> AppResult<Option<Application>> {
        let tables = self.tables.read().await;
        Ok(tables
            .applications
            .iter()
            .find(|a| a.job_id == job_id && a.applicant_id == applicant_id)
            .cloned())
    }

    async fn list(
        &self,
        filter: &ApplicationFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Application>> {
        let tables = self.tables.read().await;
        let rows = tables
            .applications
            .iter()
            .filter(|a| filter.matches(a, tables.job(a.job_id)))
            .collect();
        Ok(paginate(
            newest_first(rows, |a: &Application| a.created_at),
            page,
        ))
    }

    async fn count(&self, filter: &ApplicationFilter) -> AppResult<u64> {
        let tables = self.tables.read().await;
        Ok(tables
            .applications
            .iter()
            .filter(|a| filter.matches(a, tables.job(a.job_id)))
            .count() as u64)
    }

    async fn create(&self, data: &NewApplication) -> AppResult<Application> {
        let mut tables = self.tables.write().await;
        if tables
            .applications
            .iter()
            .any(|a| a.job_id == data.job_id && a.applicant_id == data.applicant_id)
        {
            return Err(AppError::conflict("Already applied for this job"));
        }
        let now = Utc::now();
        let application = Application {
            id: Uuid::new_v4(),
            job_id: data.job_id,
            applicant_id: data.applicant_id,
            resume: data.resume.clone(),
            status: ApplicationStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        tables.applications.push(application.clone());
        Ok(application)
    }

    async fn update_status(&self, id: Uuid, status: ApplicationStatus) -> AppResult<Application> {
        let mut tables = self.tables.write().await;
        let application = tables
            .applications
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::not_found("Application not found"))?;
        application.status = status;
        application.updated_at = Utc::now();
        Ok(application.clone())
    }
}

#[cfg(test)]
mod tests {
    use jobportal_core::error::ErrorKind;
    use jobportal_entity::user::UserRole;

    use super::*;

    fn new_user(email: &str, role: UserRole) -> CreateUser {
        CreateUser {
            name: "Someone".to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            role,
        }
    }

    fn new_job(title: &str, employer_id: Uuid) -> CreateJob {
        CreateJob {
            title: title.to_string(),
            description: "A long enough description".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            salary: None,
            employer_id,
        }
    }

    #[tokio::test]
    async fn test_email_is_unique_ignoring_case() {
        let store = MemoryStore::new();
        UserStore::create(&store, &new_user("a@x.io", UserRole::Jobseeker))
            .await
            .unwrap();
        let err = UserStore::create(&store, &new_user("A@X.IO", UserRole::Employer))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert!(store.find_by_email("A@x.io").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_duplicate_application_conflicts() {
        let store = MemoryStore::new();
        let data = NewApplication {
            job_id: Uuid::new_v4(),
            applicant_id: Uuid::new_v4(),
            resume: "/uploads/resumes/x.pdf".to_string(),
        };
        let first = ApplicationStore::create(&store, &data).await.unwrap();
        assert_eq!(first.status, ApplicationStatus::Pending);
        let err = ApplicationStore::create(&store, &data).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_list_is_newest_first_and_paginated() {
        let store = MemoryStore::new();
        let employer = Uuid::new_v4();
        for i in 0..5 {
            JobStore::create(&store, &new_job(&format!("Job {i}"), employer))
                .await
                .unwrap();
        }

        let page = JobStore::list(&store, &JobFilter::default(), &PageRequest::new(1, 2))
            .await
            .unwrap();
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 3);
        let titles: Vec<_> = page.items.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["Job 4", "Job 3"]);

        let beyond = JobStore::list(&store, &JobFilter::default(), &PageRequest::new(9, 2))
            .await
            .unwrap();
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, 5);
    }

    #[tokio::test]
    async fn test_employer_filter_follows_job_ownership() {
        let store = MemoryStore::new();
        let employer = Uuid::new_v4();
        let mine = JobStore::create(&store, &new_job("Mine", employer))
            .await
            .unwrap();
        let other = JobStore::create(&store, &new_job("Other", Uuid::new_v4()))
            .await
            .unwrap();
        for job_id in [mine.id, other.id] {
            ApplicationStore::create(
                &store,
                &NewApplication {
                    job_id,
                    applicant_id: Uuid::new_v4(),
                    resume: "/uploads/resumes/x.pdf".to_string(),
                },
            )
            .await
            .unwrap();
        }

        let count = ApplicationStore::count(&store, &ApplicationFilter::by_employer(employer))
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_delete_reports_absence() {
        let store = MemoryStore::new();
        let job = JobStore::create(&store, &new_job("Gone", Uuid::new_v4()))
            .await
            .unwrap();
        assert!(JobStore::delete(&store, job.id).await.unwrap());
        assert!(!JobStore::delete(&store, job.id).await.unwrap());
    }
}
