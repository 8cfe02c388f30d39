//! Super-admin management of users and postings.

pub mod service;

pub use service::{AdminService, AdminUserUpdate, NewAccount};
