//! # jobportal-core
//!
//! Core crate for the job portal backend. Contains the configuration
//! schema, pagination types shared by every listing endpoint, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other job portal crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
