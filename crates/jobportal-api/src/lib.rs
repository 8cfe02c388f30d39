//! # jobportal-api
//!
//! HTTP API layer for the job portal built on Axum.
//!
//! Provides the REST endpoints, the authentication extractor and guard
//! middleware, CORS and request logging, request DTOs, and the mapping
//! from [`AppError`](jobportal_core::AppError) to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
