//! Port abstraction for the account store and its errors.

use crate::domain::UserRecord;

use super::define_port_error;

define_port_error! {
    /// Errors raised by account store adapters.
    pub enum UserRepositoryError {
        /// The store could not produce the account.
        Unavailable {
            /// Adapter-specific description of the failure.
            message: String,
        } => "user repository unavailable: {message}",
    }
}

/// Source of the account the login screen authenticates against.
///
/// The demo has exactly one account; a real store can replace the static
/// adapter without touching the navigation controller.
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// Load the account record.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::Unavailable`] when the store cannot
    /// produce the account.
    fn fetch_account(&self) -> Result<UserRecord, UserRepositoryError>;
}
