//! # jobportal-database
//!
//! Storage layer for the job portal. Services talk to the [`store`] traits;
//! the [`Database`] handle picks a concrete backend at startup:
//!
//! - `postgres`: [`repositories`] over a sqlx connection pool
//! - `memory`: [`memory::MemoryStore`], used by tests and local demos
//!
//! Both backends share the typed filters in [`filter`], so a listing
//! returns the same rows regardless of the provider.

pub mod filter;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod store;

pub use filter::{ApplicationFilter, JobFilter, UserFilter};
pub use provider::Database;
pub use store::{ApplicationStore, JobStore, UserStore};
