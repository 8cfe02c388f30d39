//! Authentication service: registration, login, current profile.

use std::sync::Arc;

use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use jobportal_auth::jwt::{Claims, JwtEncoder};
use jobportal_auth::password::{PasswordHasher, PasswordValidator};
use jobportal_core::error::AppError;
use jobportal_database::UserStore;
use jobportal_entity::user::{CreateUser, User, UserRole};

use crate::context::RequestContext;

/// Self-registration input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Requested role; `None` means jobseeker.
    pub role: Option<UserRole>,
}

/// A freshly issued token and the user it identifies.
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    /// Signed identity token.
    pub token: String,
    /// The authenticated user.
    pub user: User,
}

/// Issues identity tokens in exchange for valid credentials.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    encoder: Arc<JwtEncoder>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        encoder: Arc<JwtEncoder>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            users,
            encoder,
            hasher,
            validator,
        }
    }

    /// Lifetime of issued tokens; also the cookie `Max-Age`.
    pub fn token_ttl(&self) -> Duration {
        self.encoder.ttl()
    }

    /// Creates a jobseeker or employer account and signs it in.
    pub async fn register(&self, input: Registration) -> Result<AuthSession, AppError> {
        let role = input.role.unwrap_or_default();
        if !role.is_self_assignable() {
            return Err(AppError::validation("Invalid role"));
        }
        self.validator.validate(&input.password)?;

        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::conflict("User already exists"));
        }

        let user = self
            .users
            .create(&CreateUser {
                name: input.name,
                email: input.email,
                password_hash: self.hasher.hash_password(&input.password)?,
                role,
            })
            .await?;

        info!(user_id = %user.id, role = %user.role, "User registered");

        let token = self.encoder.issue(&user)?;
        Ok(AuthSession { token, user })
    }

    /// Verifies email and password and issues a token.
    ///
    /// Unknown email and wrong password fail identically.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let user = match self.users.find_by_email(email).await? {
            Some(user) if self.hasher.verify_password(password, &user.password_hash) => user,
            _ => {
                warn!("Login failed: invalid credentials");
                return Err(AppError::unauthenticated("Invalid credentials"));
            }
        };

        info!(user_id = %user.id, "User logged in");

        let token = self.encoder.issue(&user)?;
        Ok(AuthSession { token, user })
    }

    /// Resolves verified claims to the account they name.
    ///
    /// Role comes from the stored record, so demotions and deletions take
    /// effect on the next request rather than when the token expires.
    pub async fn authenticate(&self, claims: &Claims) -> Result<RequestContext, AppError> {
        let user = self.users.find_by_id(claims.sub).await?.ok_or_else(|| {
            warn!(user_id = %claims.sub, "Token names a deleted account");
            AppError::unauthenticated("Not authorized, user not found")
        })?;

        if user.role != claims.role {
            info!(
                user_id = %user.id,
                token_role = %claims.role,
                role = %user.role,
                "Role changed since token was issued"
            );
        }

        Ok(RequestContext::new(user.id, user.role))
    }

    /// Loads the caller's profile.
    pub async fn me(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::unauthenticated("User no longer exists"))
    }
}

#[cfg(test)]
mod tests {
    use jobportal_auth::jwt::JwtDecoder;
    use jobportal_core::config::AuthConfig;
    use jobportal_core::error::ErrorKind;
    use jobportal_database::Database;
    use jobportal_entity::user::UpdateUser;

    use super::*;

    fn service() -> (AuthService, JwtDecoder) {
        let config = AuthConfig::default();
        let db = Database::memory();
        let svc = AuthService::new(
            db.users(),
            Arc::new(JwtEncoder::new(&config)),
            Arc::new(PasswordHasher::new()),
            Arc::new(PasswordValidator::new(&config)),
        );
        (svc, JwtDecoder::new(&config))
    }

    fn registration(email: &str, role: Option<UserRole>) -> Registration {
        Registration {
            name: "Jamie".to_string(),
            email: email.to_string(),
            password: "secret123".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn test_register_defaults_to_jobseeker() {
        let (svc, decoder) = service();
        let session = svc.register(registration("j@x.io", None)).await.unwrap();
        assert_eq!(session.user.role, UserRole::Jobseeker);
        let claims = decoder.verify(&session.token).unwrap();
        assert_eq!(claims.sub, session.user.id);
    }

    #[tokio::test]
    async fn test_register_rejects_superadmin() {
        let (svc, _) = service();
        let err = svc
            .register(registration("a@x.io", Some(UserRole::Superadmin)))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let (svc, _) = service();
        svc.register(registration("dup@x.io", None)).await.unwrap();
        let err = svc
            .register(registration("DUP@x.io", Some(UserRole::Employer)))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_login() {
        let (svc, _) = service();
        svc.register(registration("e@x.io", Some(UserRole::Employer)))
            .await
            .unwrap();

        let session = svc.login("e@x.io", "secret123").await.unwrap();
        assert_eq!(session.user.role, UserRole::Employer);

        let wrong = svc.login("e@x.io", "nope").await.unwrap_err();
        let unknown = svc.login("ghost@x.io", "secret123").await.unwrap_err();
        assert_eq!(wrong.kind, ErrorKind::Unauthenticated);
        assert_eq!(wrong.message, unknown.message);
    }

    #[tokio::test]
    async fn test_authenticate_uses_stored_role() {
        let (svc, decoder) = service();
        let session = svc
            .register(registration("boss@x.io", Some(UserRole::Employer)))
            .await
            .unwrap();
        let claims = decoder.verify(&session.token).unwrap();

        let ctx = svc.authenticate(&claims).await.unwrap();
        assert_eq!(ctx.role, UserRole::Employer);

        svc.users
            .update(
                session.user.id,
                &UpdateUser {
                    role: Some(UserRole::Jobseeker),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let ctx = svc.authenticate(&claims).await.unwrap();
        assert_eq!(ctx.role, UserRole::Jobseeker);
    }

    #[tokio::test]
    async fn test_authenticate_rejects_deleted_account() {
        let (svc, decoder) = service();
        let session = svc.register(registration("gone@x.io", None)).await.unwrap();
        let claims = decoder.verify(&session.token).unwrap();
        svc.users.delete(session.user.id).await.unwrap();

        let err = svc.authenticate(&claims).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }
}
