//! Super-admin handlers. Every route here sits behind `superadmin_guard`.

pub mod applications;
pub mod jobs;
pub mod users;
