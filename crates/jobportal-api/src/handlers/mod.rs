//! Route handlers organized by domain.

pub mod admin;
pub mod application;
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod job;
