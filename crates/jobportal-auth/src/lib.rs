//! # jobportal-auth
//!
//! Credential handling and authorization checks for the job portal.
//!
//! ## Modules
//!
//! - `jwt` — signed identity tokens: issue and verify
//! - `rbac` — exact-membership role gate
//! - `ownership` — per-resource ownership checks for postings and applications
//! - `password` — Argon2id hashing and minimum-length policy

pub mod jwt;
pub mod ownership;
pub mod password;
pub mod rbac;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use ownership::{JobAction, OwnershipResolver};
pub use password::{PasswordHasher, PasswordValidator};
pub use rbac::RoleGate;
