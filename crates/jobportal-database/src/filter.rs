//! Typed listing filters.
//!
//! Each filter renders itself twice: as a `WHERE` clause appended to a sqlx
//! [`QueryBuilder`] for the PostgreSQL provider, and as an in-process
//! predicate for the memory provider. The two renderings must agree.
//!
//! Text criteria are case-insensitive substring matches. In SQL they become
//! `ILIKE '%…%'` with `%`, `_` and `\` escaped so user input is matched
//! literally.

use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use jobportal_entity::application::{Application, ApplicationStatus};
use jobportal_entity::job::Job;
use jobportal_entity::user::{User, UserRole};

/// Criteria for the user listing.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    /// Exact role.
    pub role: Option<UserRole>,
    /// Substring of name or email.
    pub keyword: Option<String>,
}

impl UserFilter {
    /// Only users with the given role.
    pub fn by_role(role: UserRole) -> Self {
        Self {
            role: Some(role),
            ..Default::default()
        }
    }

    /// In-process rendering.
    pub fn matches(&self, user: &User) -> bool {
        if self.role.is_some_and(|role| user.role != role) {
            return false;
        }
        if let Some(keyword) = &self.keyword {
            let needle = keyword.to_lowercase();
            if !contains_ci(&user.name, &needle) && !contains_ci(&user.email, &needle) {
                return false;
            }
        }
        true
    }

    /// SQL rendering.
    pub fn push_where(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        let mut clause = WhereClause::new(qb);
        if let Some(role) = self.role {
            clause.and().push("role = ").push_bind(role);
        }
        if let Some(keyword) = &self.keyword {
            let pattern = like_pattern(keyword);
            clause
                .and()
                .push("(name ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR email ILIKE ")
                .push_bind(pattern)
                .push(")");
        }
    }
}

/// Criteria for the job listing.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    /// Substring of location.
    pub location: Option<String>,
    /// Substring of company.
    pub company: Option<String>,
    /// Substring of title or description.
    pub keyword: Option<String>,
    /// Exact owning employer.
    pub employer_id: Option<Uuid>,
    /// Inclusive lower salary bound.
    pub min_salary: Option<f64>,
    /// Inclusive upper salary bound.
    pub max_salary: Option<f64>,
}

impl JobFilter {
    /// Only postings owned by `employer_id`.
    pub fn by_employer(employer_id: Uuid) -> Self {
        Self {
            employer_id: Some(employer_id),
            ..Default::default()
        }
    }

    /// In-process rendering. A posting without a salary never satisfies a
    /// salary bound, matching SQL `NULL` comparison semantics.
    pub fn matches(&self, job: &Job) -> bool {
        if self.employer_id.is_some_and(|id| job.employer_id != id) {
            return false;
        }
        if let Some(location) = &self.location {
            if !contains_ci(&job.location, &location.to_lowercase()) {
                return false;
            }
        }
        if let Some(company) = &self.company {
            if !contains_ci(&job.company, &company.to_lowercase()) {
                return false;
            }
        }
        if let Some(keyword) = &self.keyword {
            let needle = keyword.to_lowercase();
            if !contains_ci(&job.title, &needle) && !contains_ci(&job.description, &needle) {
                return false;
            }
        }
        if let Some(min) = self.min_salary {
            if !job.salary.is_some_and(|s| s >= min) {
                return false;
            }
        }
        if let Some(max) = self.max_salary {
            if !job.salary.is_some_and(|s| s <= max) {
                return false;
            }
        }
        true
    }

    /// SQL rendering.
    pub fn push_where(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        let mut clause = WhereClause::new(qb);
        if let Some(employer_id) = self.employer_id {
            clause.and().push("employer_id = ").push_bind(employer_id);
        }
        if let Some(location) = &self.location {
            clause
                .and()
                .push("location ILIKE ")
                .push_bind(like_pattern(location));
        }
        if let Some(company) = &self.company {
            clause
                .and()
                .push("company ILIKE ")
                .push_bind(like_pattern(company));
        }
        if let Some(keyword) = &self.keyword {
            let pattern = like_pattern(keyword);
            clause
                .and()
                .push("(title ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR description ILIKE ")
                .push_bind(pattern)
                .push(")");
        }
        if let Some(min) = self.min_salary {
            clause.and().push("salary >= ").push_bind(min);
        }
        if let Some(max) = self.max_salary {
            clause.and().push("salary <= ").push_bind(max);
        }
    }
}

/// Criteria for application listings.
///
/// Keyword matching against the joined posting or applicant is not part of
/// this filter; it runs on the populated page afterwards.
#[derive(Debug, Clone, Default)]
pub struct ApplicationFilter {
    /// Exact status.
    pub status: Option<ApplicationStatus>,
    /// Exact posting.
    pub job_id: Option<Uuid>,
    /// Exact applicant.
    pub applicant_id: Option<Uuid>,
    /// Only applications to postings owned by this employer.
    pub employer_id: Option<Uuid>,
}

impl ApplicationFilter {
    /// Only applications submitted by `applicant_id`.
    pub fn by_applicant(applicant_id: Uuid) -> Self {
        Self {
            applicant_id: Some(applicant_id),
            ..Default::default()
        }
    }

    /// Only applications to postings owned by `employer_id`.
    pub fn by_employer(employer_id: Uuid) -> Self {
        Self {
            employer_id: Some(employer_id),
            ..Default::default()
        }
    }

    /// Narrow to one status.
    pub fn with_status(mut self, status: ApplicationStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// In-process rendering. `job` is the posting the application refers
    /// to, if it still exists; it is only consulted for `employer_id`.
    pub fn matches(&self, application: &Application, job: Option<&Job>) -> bool {
        if self.status.is_some_and(|s| application.status != s) {
            return false;
        }
        if self.job_id.is_some_and(|id| application.job_id != id) {
            return false;
        }
        if self
            .applicant_id
            .is_some_and(|id| application.applicant_id != id)
        {
            return false;
        }
        if let Some(employer_id) = self.employer_id {
            if !job.is_some_and(|j| j.employer_id == employer_id) {
                return false;
            }
        }
        true
    }

    /// SQL rendering.
    pub fn push_where(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        let mut clause = WhereClause::new(qb);
        if let Some(status) = self.status {
            clause.and().push("status = ").push_bind(status);
        }
        if let Some(job_id) = self.job_id {
            clause.and().push("job_id = ").push_bind(job_id);
        }
        if let Some(applicant_id) = self.applicant_id {
            clause.and().push("applicant_id = ").push_bind(applicant_id);
        }
        if let Some(employer_id) = self.employer_id {
            clause
                .and()
                .push("job_id IN (SELECT id FROM jobs WHERE employer_id = ")
                .push_bind(employer_id)
                .push(")");
        }
    }
}

/// Emits `WHERE` before the first condition and `AND` before the rest.
struct WhereClause<'q, 'args> {
    qb: &'q mut QueryBuilder<'args, Postgres>,
    started: bool,
}

impl<'q, 'args> WhereClause<'q, 'args> {
    fn new(qb: &'q mut QueryBuilder<'args, Postgres>) -> Self {
        Self { qb, started: false }
    }

    fn and(&mut self) -> &mut QueryBuilder<'args, Postgres> {
        self.qb.push(if self.started { " AND " } else { " WHERE " });
        self.started = true;
        self.qb
    }
}

/// Wrap `term` in `%…%` after escaping LIKE metacharacters.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// `haystack` contains `needle_lower`, ignoring case. The needle must
/// already be lowercase.
fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
