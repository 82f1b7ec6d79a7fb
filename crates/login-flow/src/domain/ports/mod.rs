//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod activity_log;
mod renderer;
mod user_repository;

#[cfg(test)]
pub use activity_log::MockActivityLog;
pub use activity_log::ActivityLog;
#[cfg(test)]
pub use renderer::MockRenderer;
pub use renderer::Renderer;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
