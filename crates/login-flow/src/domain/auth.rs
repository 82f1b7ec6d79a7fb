//! Credential validation.
//!
//! Submitted values are compared verbatim against the stored account: no
//! trimming, no case folding. An empty login or password is simply a
//! mismatch, not a separate failure.

use thiserror::Error;

use crate::domain::UserRecord;

/// Domain error returned when submitted credentials are rejected.
///
/// The variant never says which field was wrong; the login screen shows a
/// single combined message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Login or password did not match the stored account.
    #[error("invalid login or password")]
    InvalidCredentials,
}

/// Compare submitted credentials with `record`.
///
/// Succeeds iff both the login and the password equal the record's values
/// exactly. On success the matched record is returned so callers can carry
/// it forward.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidCredentials`] when either value differs.
///
/// # Examples
/// ```
/// use login_flow::domain::{Department, JobInfo, JobTitle, PersonInfo, UserId, UserRecord};
/// use login_flow::{ValidationError, validate};
///
/// let job = JobInfo::new("Apple", Department::Development, JobTitle::TeamLead);
/// let person = PersonInfo::new("Ada", "Lovelace", "", job);
/// let record = UserRecord::new(UserId::new(1), "ada", "engine", person);
///
/// assert!(validate("ada", "engine", &record).is_ok());
/// assert_eq!(
///     validate("Ada", "engine", &record),
///     Err(ValidationError::InvalidCredentials)
/// );
/// ```
pub fn validate(
    submitted_login: &str,
    submitted_password: &str,
    record: &UserRecord,
) -> Result<UserRecord, ValidationError> {
    let login_matches = submitted_login == record.login();
    let password_matches = submitted_password == record.password();
    if login_matches && password_matches {
        Ok(record.clone())
    } else {
        Err(ValidationError::InvalidCredentials)
    }
}
