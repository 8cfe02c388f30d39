//! Application use cases: apply, review listings, status changes.

pub mod lifecycle;
pub mod resume;
pub mod service;

pub use lifecycle::StatusLifecycle;
pub use resume::{ResumeStorage, ResumeUpload, StoredResume};
pub use service::{ApplicationListQuery, ApplicationService};
