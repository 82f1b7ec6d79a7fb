//! Outbound adapters implementing the domain ports.

mod static_user_repository;
mod tracing_activity_log;

pub use static_user_repository::{StaticUserRepository, fixture_account};
pub use tracing_activity_log::{NoopActivityLog, TracingActivityLog};
