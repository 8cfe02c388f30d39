//! # jobportal-service
//!
//! Business logic for the job portal. Each service orchestrates the storage
//! traits and the auth checks to implement one group of use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod admin;
pub mod application;
pub mod auth;
pub mod context;
pub mod dashboard;
pub mod job;
pub mod populate;

pub use admin::AdminService;
pub use application::{ApplicationService, ResumeStorage, StatusLifecycle};
pub use auth::AuthService;
pub use context::RequestContext;
pub use dashboard::DashboardService;
pub use job::JobService;
