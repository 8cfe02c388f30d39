//! Admin service: user CRUD and unrestricted posting management.
//!
//! Callers must already have passed the super-admin gate.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use jobportal_auth::password::{PasswordHasher, PasswordValidator};
use jobportal_core::error::AppError;
use jobportal_core::types::{PageRequest, PageResponse};
use jobportal_database::{JobFilter, JobStore, UserFilter, UserStore};
use jobportal_entity::job::{Job, UpdateJob};
use jobportal_entity::user::{CreateUser, UpdateUser, User, UserRole};
use jobportal_entity::view::JobView;

use crate::context::RequestContext;
use crate::populate;

/// An account created by the admin. Any role may be assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Role; `None` means jobseeker.
    pub role: Option<UserRole>,
}

/// Admin edit of an account. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminUserUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New role.
    pub role: Option<UserRole>,
    /// New plaintext password.
    pub password: Option<String>,
}

/// Handles administrative operations.
#[derive(Debug, Clone)]
pub struct AdminService {
    users: Arc<dyn UserStore>,
    jobs: Arc<dyn JobStore>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(
        users: Arc<dyn UserStore>,
        jobs: Arc<dyn JobStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            users,
            jobs,
            hasher,
            validator,
        }
    }

    /// Lists users with optional role and keyword filters.
    pub async fn list_users(
        &self,
        filter: &UserFilter,
        page: &PageRequest,
    ) -> Result<PageResponse<User>, AppError> {
        self.users.list(filter, page).await
    }

    /// Creates an account with any role.
    pub async fn create_user(
        &self,
        ctx: &RequestContext,
        input: NewAccount,
    ) -> Result<User, AppError> {
        self.validator.validate(&input.password)?;
        let user = self
            .users
            .create(&CreateUser {
                name: input.name,
                email: input.email,
                password_hash: self.hasher.hash_password(&input.password)?,
                role: input.role.unwrap_or_default(),
            })
            .await?;

        info!(admin_id = %ctx.user_id, user_id = %user.id, role = %user.role, "Admin created user");
        Ok(user)
    }

    /// Edits an account. An admin cannot demote themself.
    pub async fn update_user(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: AdminUserUpdate,
    ) -> Result<User, AppError> {
        if id == ctx.user_id && input.role.is_some_and(|r| r != ctx.role) {
            return Err(AppError::validation("You cannot change your own role"));
        }

        let password_hash = match &input.password {
            Some(password) => {
                self.validator.validate(password)?;
                Some(self.hasher.hash_password(password)?)
            }
            None => None,
        };

        let update = UpdateUser {
            name: input.name,
            email: input.email,
            role: input.role,
            password_hash,
        };
        if update.is_empty() {
            return self
                .users
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::not_found("User not found"));
        }

        let user = self.users.update(id, &update).await?;
        info!(admin_id = %ctx.user_id, user_id = %id, "Admin updated user");
        Ok(user)
    }

    /// Deletes an account. Postings and applications it owns are kept.
    pub async fn delete_user(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        if id == ctx.user_id {
            return Err(AppError::validation("You cannot delete your own account"));
        }
        if !self.users.delete(id).await? {
            return Err(AppError::not_found("User not found"));
        }
        info!(admin_id = %ctx.user_id, user_id = %id, "Admin deleted user");
        Ok(())
    }

    /// Lists every posting with employers attached.
    pub async fn list_jobs(
        &self,
        filter: &JobFilter,
        page: &PageRequest,
    ) -> Result<PageResponse<JobView>, AppError> {
        let mut result = self.jobs.list(filter, page).await?;
        let items = std::mem::take(&mut result.items);
        let views = populate::jobs_with_employer(self.users.as_ref(), items).await?;
        Ok(result.with_items(views))
    }

    /// Edits any posting.
    pub async fn update_job(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        update: UpdateJob,
    ) -> Result<Job, AppError> {
        let job = self.jobs.update(id, &update).await?;
        info!(admin_id = %ctx.user_id, job_id = %id, "Admin updated job");
        Ok(job)
    }

    /// Deletes any posting.
    pub async fn delete_job(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        if !self.jobs.delete(id).await? {
            return Err(AppError::not_found("Job not found"));
        }
        info!(admin_id = %ctx.user_id, job_id = %id, "Admin deleted job");
        Ok(())
    }
}
