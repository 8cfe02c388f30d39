//! PostgreSQL implementations of the storage traits.

pub mod application;
pub mod job;
pub mod user;

pub use application::ApplicationRepository;
pub use job::JobRepository;
pub use user::UserRepository;
