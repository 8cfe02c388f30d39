//! Per-role aggregate counters.

pub mod service;

pub use service::{AdminStats, DashboardService, EmployerStats, JobseekerStats};
