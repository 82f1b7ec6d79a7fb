//! Per-screen view models.
//!
//! Each function copies the subset of the account a screen needs. They never
//! validate or mutate, so calling them repeatedly for the same record yields
//! equal values.

use serde::Serialize;

use crate::domain::UserRecord;

/// Label of the first profile row.
pub const NAME_LABEL: &str = "Name";
/// Label of the second profile row.
pub const SURNAME_LABEL: &str = "Surname";
/// Label of the third profile row.
pub const COMPANY_LABEL: &str = "Company";
/// Label of the fourth profile row.
pub const DEPARTMENT_LABEL: &str = "Department";
/// Label of the fifth profile row.
pub const JOB_TITLE_LABEL: &str = "Job Title";

/// Data for the welcome tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeViewModel {
    /// Greeting line shown in the middle of the screen.
    pub greeting: String,
}

/// One labelled row on the profile tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileField {
    /// Row label.
    pub label: &'static str,
    /// Value copied from the account.
    pub value: String,
}

/// Data for the profile tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileViewModel {
    /// Navigation bar title (the account's full name).
    pub title: String,
    /// Rows in display order: name, surname, company, department, job title.
    pub fields: Vec<ProfileField>,
}

/// Data for the bio detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BioViewModel {
    /// Navigation bar title.
    pub title: String,
    /// Biography text, unmodified.
    pub body: String,
}

/// Build the welcome tab model.
///
/// # Examples
/// ```
/// use login_flow::domain::binder;
/// use login_flow::outbound::fixture_account;
///
/// let model = binder::welcome(fixture_account());
/// assert_eq!(model.greeting, "Welcome, Matvei! My name is Matvei Khlestov.");
/// ```
#[must_use]
pub fn welcome(user: &UserRecord) -> WelcomeViewModel {
    WelcomeViewModel {
        greeting: format!(
            "Welcome, {}! My name is {}.",
            user.login(),
            user.person().full_name()
        ),
    }
}

/// Build the profile tab model.
#[must_use]
pub fn profile(user: &UserRecord) -> ProfileViewModel {
    let person = user.person();
    let job = person.job();
    let row = |label, value: &str| ProfileField {
        label,
        value: value.to_owned(),
    };
    ProfileViewModel {
        title: person.full_name(),
        fields: vec![
            row(NAME_LABEL, person.name()),
            row(SURNAME_LABEL, person.surname()),
            row(COMPANY_LABEL, job.title()),
            row(DEPARTMENT_LABEL, job.department().as_str()),
            row(JOB_TITLE_LABEL, job.job_title().as_str()),
        ],
    }
}

/// Build the bio screen model.
#[must_use]
pub fn bio(user: &UserRecord) -> BioViewModel {
    let person = user.person();
    BioViewModel {
        title: format!("{} Bio", person.full_name()),
        body: person.bio().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{Department, JobInfo, JobTitle, PersonInfo, UserId};
    use rstest::{fixture, rstest};

    #[fixture]
    fn user() -> UserRecord {
        let job = JobInfo::new("Apple", Department::Design, JobTitle::SeniorIosDeveloper);
        let person = PersonInfo::new(
            "Ada",
            "Lovelace",
            "  Wrote the first program.\nLiked engines.  ",
            job,
        );
        UserRecord::new(UserId::new(3), "ada", "engine", person)
    }

    #[rstest]
    fn welcome_greets_login_and_full_name(user: UserRecord) {
        assert_eq!(
            welcome(&user).greeting,
            "Welcome, ada! My name is Ada Lovelace."
        );
    }

    #[rstest]
    fn profile_rows_keep_their_order(user: UserRecord) {
        let model = profile(&user);
        assert_eq!(model.title, "Ada Lovelace");
        let rows: Vec<(&str, &str)> = model
            .fields
            .iter()
            .map(|field| (field.label, field.value.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Name", "Ada"),
                ("Surname", "Lovelace"),
                ("Company", "Apple"),
                ("Department", "Design"),
                ("Job Title", "Senior iOS Developer"),
            ]
        );
    }

    #[rstest]
    fn bio_body_is_verbatim(user: UserRecord) {
        let model = bio(&user);
        assert_eq!(model.title, "Ada Lovelace Bio");
        assert_eq!(model.body, "  Wrote the first program.\nLiked engines.  ");
    }

    #[rstest]
    fn binders_are_idempotent(user: UserRecord) {
        assert_eq!(welcome(&user), welcome(&user));
        assert_eq!(profile(&user), profile(&user));
        assert_eq!(bio(&user), bio(&user));
    }

    #[rstest]
    fn bio_serialises_in_camel_case(user: UserRecord) {
        insta::assert_json_snapshot!(bio(&user), @r#"
        {
          "title": "Ada Lovelace Bio",
          "body": "  Wrote the first program.\nLiked engines.  "
        }
        "#);
    }
}
