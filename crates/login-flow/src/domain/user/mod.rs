//! Account record model.

use std::fmt;

/// Stable numeric account identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(u32);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for UserId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Department the account holder works in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    /// Product engineering.
    Development,
    /// Product and visual design.
    Design,
    /// Marketing and communications.
    Marketing,
    /// People and project management.
    Management,
}

impl Department {
    /// Label shown on the profile screen.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "Development",
            Self::Design => "Design",
            Self::Marketing => "Marketing",
            Self::Management => "Management",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position the account holder holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobTitle {
    /// Entry-level iOS engineer.
    JuniorIosDeveloper,
    /// iOS engineer.
    IosDeveloper,
    /// Senior iOS engineer.
    SeniorIosDeveloper,
    /// Leads an engineering team.
    TeamLead,
}

impl JobTitle {
    /// Label shown on the profile screen.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::JuniorIosDeveloper => "Junior iOS Developer",
            Self::IosDeveloper => "iOS Developer",
            Self::SeniorIosDeveloper => "Senior iOS Developer",
            Self::TeamLead => "Team Lead",
        }
    }
}

impl fmt::Display for JobTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employment details attached to a person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobInfo {
    title: String,
    department: Department,
    job_title: JobTitle,
}

impl JobInfo {
    /// Build job details from their parts.
    pub fn new(title: impl Into<String>, department: Department, job_title: JobTitle) -> Self {
        Self {
            title: title.into(),
            department,
            job_title,
        }
    }

    /// Company the person works for.
    #[must_use]
    pub const fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Department within the company.
    #[must_use]
    pub const fn department(&self) -> Department {
        self.department
    }

    /// Position within the department.
    #[must_use]
    pub const fn job_title(&self) -> JobTitle {
        self.job_title
    }
}

/// Personal details of the account holder.
///
/// ## Invariants
/// - `full_name` is always derived from `name` and `surname`; it is never
///   stored, so the two cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonInfo {
    name: String,
    surname: String,
    bio: String,
    job: JobInfo,
}

impl PersonInfo {
    /// Build personal details from their parts.
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        bio: impl Into<String>,
        job: JobInfo,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            bio: bio.into(),
            job,
        }
    }

    /// Given name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Family name.
    #[must_use]
    pub const fn surname(&self) -> &str {
        self.surname.as_str()
    }

    /// Given name followed by family name, separated by a single space.
    ///
    /// # Examples
    /// ```
    /// use login_flow::domain::{Department, JobInfo, JobTitle, PersonInfo};
    ///
    /// let job = JobInfo::new("Apple", Department::Design, JobTitle::TeamLead);
    /// let person = PersonInfo::new("Ada", "Lovelace", "", job);
    /// assert_eq!(person.full_name(), "Ada Lovelace");
    /// ```
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }

    /// Free-form biography text.
    #[must_use]
    pub const fn bio(&self) -> &str {
        self.bio.as_str()
    }

    /// Employment details.
    #[must_use]
    pub const fn job(&self) -> &JobInfo {
        &self.job
    }
}

/// The account the login screen authenticates against.
///
/// ## Invariants
/// - Records are immutable once built; screens only ever read them.
/// - `password` is stored and compared in plaintext, but `Debug` output
///   redacts it.
#[derive(Clone, PartialEq, Eq)]
pub struct UserRecord {
    id: UserId,
    login: String,
    password: String,
    person: PersonInfo,
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .field("person", &self.person)
            .finish()
    }
}

impl UserRecord {
    /// Build a record from validated components.
    pub fn new(
        id: UserId,
        login: impl Into<String>,
        password: impl Into<String>,
        person: PersonInfo,
    ) -> Self {
        Self {
            id,
            login: login.into(),
            password: password.into(),
            person,
        }
    }

    /// Stable account identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Login name expected on the credential screen.
    #[must_use]
    pub const fn login(&self) -> &str {
        self.login.as_str()
    }

    /// Password expected on the credential screen.
    #[must_use]
    pub const fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Personal details shown on the profile screens.
    #[must_use]
    pub const fn person(&self) -> &PersonInfo {
        &self.person
    }
}
