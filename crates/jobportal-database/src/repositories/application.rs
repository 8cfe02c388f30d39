//! Application repository implementation.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use jobportal_core::error::{AppError, ErrorKind};
use jobportal_core::result::AppResult;
use jobportal_core::types::{PageRequest, PageResponse};
use jobportal_entity::application::{Application, ApplicationStatus, NewApplication};

use crate::filter::ApplicationFilter;
use crate::store::ApplicationStore;

/// Unique constraint on `(job_id, applicant_id)`.
const JOB_APPLICANT_UNIQUE: &str = "applications_job_applicant_key";

/// PostgreSQL-backed [`ApplicationStore`].
#[derive(Debug, Clone)]
pub struct ApplicationRepository {
    pool: PgPool,
}

impl ApplicationRepository {
    /// Create a new application repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationStore for ApplicationRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Application>> {
        sqlx::query_as::<_, Application>("SELECT * FROM applications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find application", e)
            })
    }

    async fn find_by_job_and_applicant(
        &self,
        job_id: Uuid,
        applicant_id: Uuid,
    ) -> AppResult<Option<Application>> {
        sqlx::query_as::<_, Application>(
            "SELECT * FROM applications WHERE job_id = $1 AND applicant_id = $2",
        )
        .bind(job_id)
        .bind(applicant_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find application", e))
    }

    async fn list(
        &self,
        filter: &ApplicationFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Application>> {
        let total = self.count(filter).await?;

        let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM applications");
        filter.push_where(&mut qb);
        qb.push(" ORDER BY created_at DESC LIMIT ")
            .push_bind(page.sql_limit())
            .push(" OFFSET ")
            .push_bind(page.sql_offset());

        let applications = qb
            .build_query_as::<Application>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list applications", e)
            })?;

        Ok(PageResponse::new(applications, page, total))
    }

    async fn count(&self, filter: &ApplicationFilter) -> AppResult<u64> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM applications");
        filter.push_where(&mut qb);
        let total = qb
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count applications", e)
            })?;
        Ok(total as u64)
    }

    async fn create(&self, data: &NewApplication) -> AppResult<Application> {
        sqlx::query_as::<_, Application>(
            "INSERT INTO applications (id, job_id, applicant_id, resume, status) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.job_id)
        .bind(data.applicant_id)
        .bind(&data.resume)
        .bind(ApplicationStatus::Pending)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some(JOB_APPLICANT_UNIQUE) =>
            {
                AppError::conflict("Already applied for this job")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create application", e),
        })
    }

    async fn update_status(&self, id: Uuid, status: ApplicationStatus) -> AppResult<Application> {
        sqlx::query_as::<_, Application>(
            "UPDATE applications SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update application status", e)
        })?
        .ok_or_else(|| AppError::not_found("Application not found"))
    }
}
