//! Request DTOs with validation.

use std::borrow::Cow;
use std::str::FromStr;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use jobportal_core::error::AppError;
use jobportal_database::{JobFilter, UserFilter};
use jobportal_entity::application::ApplicationStatus;
use jobportal_entity::job::UpdateJob;
use jobportal_entity::user::UserRole;
use jobportal_service::admin::{AdminUserUpdate, NewAccount};
use jobportal_service::application::ApplicationListQuery;
use jobportal_service::auth::Registration;
use jobportal_service::job::NewPosting;

use crate::extractors::parse_uuid;

/// Registration request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
    /// Login email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Plain-text password; strength is checked by the service.
    pub password: String,
    /// `jobseeker` (default) or `employer`.
    pub role: Option<String>,
}

impl RegisterRequest {
    /// Converts to the service input, parsing the optional role.
    pub fn into_registration(self) -> Result<Registration, AppError> {
        Ok(Registration {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
            role: parse_role(self.role.as_deref())?,
        })
    }
}

/// Login request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create-posting request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateJobRequest {
    #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
    pub title: String,
    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: String,
    #[validate(length(min = 2, message = "Company must be at least 2 characters"))]
    pub company: String,
    #[validate(length(min = 2, message = "Location must be at least 2 characters"))]
    pub location: String,
    #[validate(range(min = 0.0, message = "Salary must be a non-negative number"))]
    pub salary: Option<f64>,
}

impl From<CreateJobRequest> for NewPosting {
    fn from(req: CreateJobRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            company: req.company,
            location: req.location,
            salary: req.salary,
        }
    }
}

/// Partial posting update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateJobRequest {
    #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: Option<String>,
    #[validate(length(min = 2, message = "Company must be at least 2 characters"))]
    pub company: Option<String>,
    #[validate(length(min = 2, message = "Location must be at least 2 characters"))]
    pub location: Option<String>,
    #[validate(range(min = 0.0, message = "Salary must be a non-negative number"))]
    pub salary: Option<f64>,
}

impl From<UpdateJobRequest> for UpdateJob {
    fn from(req: UpdateJobRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            company: req.company,
            location: req.location,
            salary: req.salary,
        }
    }
}

/// Body of `PUT /applications/{id}/status`.
///
/// The value is parsed by the status lifecycle, not here, so an unknown
/// status reaches it and fails with its own message.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StatusUpdateRequest {
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

/// Admin create-user body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub password: String,
    /// Any role, including `superadmin`.
    pub role: Option<String>,
}

impl CreateUserRequest {
    /// Converts to the service input.
    pub fn into_account(self) -> Result<NewAccount, AppError> {
        Ok(NewAccount {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
            role: parse_role(self.role.as_deref())?,
        })
    }
}

/// Admin update-user body.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(custom(function = "not_blank", message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub role: Option<String>,
    pub password: Option<String>,
}

impl UpdateUserRequest {
    /// Converts to the service input.
    pub fn into_update(self) -> Result<AdminUserUpdate, AppError> {
        Ok(AdminUserUpdate {
            name: self.name.map(|n| n.trim().to_string()),
            email: self.email.map(|e| e.trim().to_string()),
            role: parse_role(self.role.as_deref())?,
            password: self.password,
        })
    }
}

// ── Query strings ────────────────────────────────────────────────

/// `GET /admin/users` filters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserQuery {
    pub role: Option<String>,
    pub keyword: Option<String>,
}

impl UserQuery {
    pub fn into_filter(self) -> Result<UserFilter, AppError> {
        Ok(UserFilter {
            role: parse_role(non_empty(self.role).as_deref())?,
            keyword: non_empty(self.keyword),
        })
    }
}

/// Job listing filters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobQuery {
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub employer_id: Option<String>,
    pub min_salary: Option<String>,
    pub max_salary: Option<String>,
}

impl JobQuery {
    pub fn into_filter(self) -> Result<JobFilter, AppError> {
        let employer_id = match non_empty(self.employer_id) {
            Some(raw) => Some(parse_uuid(&raw, "Invalid employer ID")?),
            None => None,
        };
        Ok(JobFilter {
            location: non_empty(self.location),
            company: non_empty(self.company),
            keyword: non_empty(self.keyword),
            employer_id,
            min_salary: parse_number(self.min_salary, "minSalary")?,
            max_salary: parse_number(self.max_salary, "maxSalary")?,
        })
    }
}

/// Application listing filters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationQuery {
    pub status: Option<String>,
    pub job_id: Option<String>,
    pub applicant_id: Option<String>,
    pub keyword: Option<String>,
}

impl ApplicationQuery {
    pub fn into_query(self) -> Result<ApplicationListQuery, AppError> {
        let status = match non_empty(self.status) {
            Some(raw) => Some(ApplicationStatus::from_str(&raw)?),
            None => None,
        };
        let job_id = match non_empty(self.job_id) {
            Some(raw) => Some(parse_uuid(&raw, "Invalid job ID")?),
            None => None,
        };
        let applicant_id = match non_empty(self.applicant_id) {
            Some(raw) => Some(parse_uuid(&raw, "Invalid applicant ID")?),
            None => None,
        };
        Ok(ApplicationListQuery {
            status,
            job_id,
            applicant_id,
            keyword: non_empty(self.keyword),
        })
    }
}

/// Rejects values that are empty once surrounding whitespace is removed.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(
            ValidationError::new("blank").with_message(Cow::Borrowed("Value cannot be blank"))
        );
    }
    Ok(())
}

/// Blank query values count as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_number(value: Option<String>, name: &str) -> Result<Option<f64>, AppError> {
    match non_empty(value) {
        Some(raw) => raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Some)
            .ok_or_else(|| AppError::validation(format!("{name} must be a number"))),
        None => Ok(None),
    }
}

fn parse_role(value: Option<&str>) -> Result<Option<UserRole>, AppError> {
    value
        .map(|r| UserRole::from_str(r).map_err(|_| AppError::validation("Invalid role")))
        .transpose()
}
