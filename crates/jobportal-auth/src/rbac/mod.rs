//! Role-based access control.
//!
//! Roles are flat: a role satisfies a gate only if it is listed. There is
//! no hierarchy, so `superadmin` does not pass an employer-only or
//! jobseeker-only gate.

pub mod gate;

pub use gate::RoleGate;
