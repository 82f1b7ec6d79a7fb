//! Account store backed by a single built-in record.

use std::sync::OnceLock;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{Department, JobInfo, JobTitle, PersonInfo, UserId, UserRecord};

const FIXTURE_BIO: &str = "Matvei is an iOS developer from Moscow. He started \
programming with small command line tools, moved on to UIKit and now spends \
most of his time building clean, accessible interfaces. Outside of work he \
enjoys long walks, strong coffee and reading about the history of computing.";

static FIXTURE_ACCOUNT: OnceLock<UserRecord> = OnceLock::new();

/// The built-in account, created on first use and shared for the rest of
/// the process.
///
/// # Examples
/// ```
/// use login_flow::outbound::fixture_account;
///
/// let account = fixture_account();
/// assert_eq!(account.login(), "Matvei");
/// assert_eq!(account.person().full_name(), "Matvei Khlestov");
/// ```
pub fn fixture_account() -> &'static UserRecord {
    FIXTURE_ACCOUNT.get_or_init(|| {
        let job = JobInfo::new("Apple", Department::Development, JobTitle::JuniorIosDeveloper);
        let person = PersonInfo::new("Matvei", "Khlestov", FIXTURE_BIO, job);
        UserRecord::new(UserId::new(1), "Matvei", "password", person)
    })
}

/// In-memory account store serving [`fixture_account`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticUserRepository;

impl UserRepository for StaticUserRepository {
    fn fetch_account(&self) -> Result<UserRecord, UserRepositoryError> {
        Ok(fixture_account().clone())
    }
}
