//! Job application domain entities.

pub mod model;
pub mod status;

pub use model::{Application, NewApplication};
pub use status::ApplicationStatus;
