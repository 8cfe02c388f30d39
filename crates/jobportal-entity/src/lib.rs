//! # jobportal-entity
//!
//! Domain entity models for the job portal. Every struct in this crate
//! represents a database table row or a read-only projection of one. All
//! entities derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and table
//! rows additionally derive `sqlx::FromRow`.
//!
//! Wire names are camelCase (`employerId`, `createdAt`) to match what the
//! web client consumes.

pub mod application;
pub mod job;
pub mod user;
pub mod view;
