//! Job posting repository implementation.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use jobportal_core::error::{AppError, ErrorKind};
use jobportal_core::result::AppResult;
use jobportal_core::types::{PageRequest, PageResponse};
use jobportal_entity::job::{CreateJob, Job, UpdateJob};

use crate::filter::JobFilter;
use crate::store::JobStore;

/// PostgreSQL-backed [`JobStore`].
#[derive(Debug, Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    /// Create a new job repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for JobRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Job>> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find job", e))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Job>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load jobs", e))
    }

    async fn list(&self, filter: &JobFilter, page: &PageRequest) -> AppResult<PageResponse<Job>> {
        let total = self.count(filter).await?;

        let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM jobs");
        filter.push_where(&mut qb);
        qb.push(" ORDER BY created_at DESC LIMIT ")
            .push_bind(page.sql_limit())
            .push(" OFFSET ")
            .push_bind(page.sql_offset());

        let jobs = qb
            .build_query_as::<Job>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list jobs", e))?;

        Ok(PageResponse::new(jobs, page, total))
    }

    async fn count(&self, filter: &JobFilter) -> AppResult<u64> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM jobs");
        filter.push_where(&mut qb);
        let total = qb
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count jobs", e))?;
        Ok(total as u64)
    }

    async fn create(&self, data: &CreateJob) -> AppResult<Job> {
        sqlx::query_as::<_, Job>(
            "INSERT INTO jobs (id, title, description, company, location, salary, employer_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.company)
        .bind(&data.location)
        .bind(data.salary)
        .bind(data.employer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create job", e))
    }

    async fn update(&self, id: Uuid, data: &UpdateJob) -> AppResult<Job> {
        sqlx::query_as::<_, Job>(
            "UPDATE jobs SET title = COALESCE($2, title), \
                             description = COALESCE($3, description), \
                             company = COALESCE($4, company), \
                             location = COALESCE($5, location), \
                             salary = COALESCE($6, salary), \
                             updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.company)
        .bind(&data.location)
        .bind(data.salary)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update job", e))?
        .ok_or_else(|| AppError::not_found("Job not found"))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete job", e))?;
        Ok(result.rows_affected() > 0)
    }
}
