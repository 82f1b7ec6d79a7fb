//! Input events relayed by the host.

use serde::Serialize;

/// Text input on the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// The user name input.
    #[default]
    Login,
    /// The secure password input.
    Password,
}

/// Peer screens hosted by the home shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Tab {
    /// Greeting and log-out button.
    #[default]
    Welcome,
    /// Account details, with a drill-down to the bio.
    Profile,
}

impl Tab {
    /// Tabs in the order the shell shows them.
    pub const ALL: [Self; 2] = [Self::Welcome, Self::Profile];
}

/// A discrete user input, already decoupled from the widget that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    /// Replace the text of one login input.
    EditField {
        /// Input being edited.
        field: Field,
        /// Full new contents of the input.
        text: String,
    },
    /// Press "Log in" with the given input contents.
    SubmitCredentials {
        /// Contents of the user name input.
        login: String,
        /// Contents of the password input.
        password: String,
    },
    /// Press return while `Field` has focus.
    FieldReturn(Field),
    /// Acknowledge the alert on screen.
    DismissAlert,
    /// Press "Forgot User Name?" or "Forgot Password?".
    RequestReminder(Field),
    /// Tap a tab bar item.
    SelectTab(Tab),
    /// Tap the profile screen's bio button.
    OpenBio,
    /// Tap the navigation bar back button.
    Back,
    /// Tap "Log Out".
    Logout,
}
