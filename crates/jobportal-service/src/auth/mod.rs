//! Registration, login, and profile lookup.

pub mod service;

pub use service::{AuthService, AuthSession, Registration};
