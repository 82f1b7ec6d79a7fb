//! Modal alerts raised by the login screen.

use serde::Serialize;

use crate::domain::UserRecord;
use crate::domain::navigation::Field;

/// Title shown when credentials are rejected.
pub const INVALID_CREDENTIALS_TITLE: &str = "Invalid login or password";
/// Body shown when credentials are rejected.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Please, enter correct login and password";
/// Title shown for credential reminders.
pub const REMINDER_TITLE: &str = "Oops!";

/// A modal message plus the input to clear once it is dismissed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    title: String,
    message: String,
    clears: Option<Field>,
}

impl Alert {
    /// The alert raised for a rejected submission; dismissing it clears the
    /// password input.
    #[must_use]
    pub fn invalid_credentials() -> Self {
        Self {
            title: INVALID_CREDENTIALS_TITLE.to_owned(),
            message: INVALID_CREDENTIALS_MESSAGE.to_owned(),
            clears: Some(Field::Password),
        }
    }

    /// The alert that reveals the expected value of `field`.
    #[must_use]
    pub fn reminder(field: Field, account: &UserRecord) -> Self {
        let message = match field {
            Field::Login => format!("Your name is {} 😉", account.login()),
            Field::Password => format!("Your password is {} 😉", account.password()),
        };
        Self {
            title: REMINDER_TITLE.to_owned(),
            message,
            clears: None,
        }
    }

    /// Alert title.
    #[must_use]
    pub const fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Alert body.
    #[must_use]
    pub const fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Input cleared when the alert is dismissed, if any.
    #[must_use]
    pub const fn clears(&self) -> Option<Field> {
        self.clears
    }
}
