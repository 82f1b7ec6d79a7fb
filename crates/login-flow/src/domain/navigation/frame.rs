//! Render input produced by the controller.

use serde::Serialize;

use crate::domain::binder::{BioViewModel, ProfileViewModel, WelcomeViewModel};
use crate::domain::navigation::{Alert, Field, Tab};

/// Data for the login screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginView {
    /// Contents of the user name input.
    pub login: String,
    /// One mask glyph per password character.
    pub masked_password: String,
    /// Input that has focus.
    pub focus: Field,
    /// Whether the "Forgot ...?" buttons are offered.
    pub reminders_enabled: bool,
}

/// The screen-specific part of a frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum ScreenView {
    /// Credential entry.
    Login(LoginView),
    /// Welcome tab.
    Welcome(WelcomeViewModel),
    /// Profile tab root.
    Profile(ProfileViewModel),
    /// Bio detail.
    Bio(BioViewModel),
}

/// Tab bar shown while the home shell is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabBar {
    /// Tabs in display order.
    pub tabs: [Tab; 2],
    /// Highlighted tab.
    pub selected: Tab,
}

impl TabBar {
    /// Tab bar with `selected` highlighted.
    #[must_use]
    pub const fn new(selected: Tab) -> Self {
        Self {
            tabs: Tab::ALL,
            selected,
        }
    }
}

/// Everything a renderer needs to draw one moment of the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// The visible screen.
    pub screen: ScreenView,
    /// Present only inside the home shell.
    pub tab_bar: Option<TabBar>,
    /// Modal alert drawn over the screen.
    pub alert: Option<Alert>,
}
