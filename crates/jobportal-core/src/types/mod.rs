//! Core type definitions used across the job portal workspace.

pub mod pagination;

pub use pagination::{PageRequest, PageResponse};
