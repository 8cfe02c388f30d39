//! Job posting use cases.

pub mod service;

pub use service::{JobService, NewPosting};
