//! Session state and the home shell's navigation stacks.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::UserRecord;
use crate::domain::navigation::Tab;

/// Screen the user is currently looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ActiveScreen {
    /// Credential entry.
    Login,
    /// Welcome tab of the home shell.
    Welcome,
    /// Profile tab of the home shell, at the root of its stack.
    Profile,
    /// Bio detail pushed on top of the profile tab.
    Bio,
}

impl ActiveScreen {
    /// Stable lowercase name used in logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Welcome => "welcome",
            Self::Profile => "profile",
            Self::Bio => "bio",
        }
    }
}

impl fmt::Display for ActiveScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screens that can sit on the profile tab's stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileRoute {
    /// Account details; always the root.
    Info,
    /// Biography detail.
    Bio,
}

/// Last-in-first-out screen stack with a root that cannot be popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStack<T> {
    root: T,
    pushed: Vec<T>,
}

impl<T> NavigationStack<T> {
    /// Start a stack containing only `root`.
    #[must_use]
    pub const fn new(root: T) -> Self {
        Self {
            root,
            pushed: Vec::new(),
        }
    }

    /// Screen on top of the stack.
    #[must_use]
    pub fn top(&self) -> &T {
        self.pushed.last().unwrap_or(&self.root)
    }

    /// Number of screens on the stack, root included.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.pushed.len() + 1
    }

    /// Push `route` on top.
    pub fn push(&mut self, route: T) {
        self.pushed.push(route);
    }

    /// Remove and return the top screen; the root is never removed.
    pub fn pop(&mut self) -> Option<T> {
        self.pushed.pop()
    }
}

/// Post-login container hosting the welcome and profile tabs.
///
/// ## Invariants
/// - Switching tabs never rebuilds either child: the profile stack survives
///   a round trip through the welcome tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeShell {
    user: Arc<UserRecord>,
    active_tab: Tab,
    profile_stack: NavigationStack<ProfileRoute>,
}

impl HomeShell {
    /// Open the shell for `user` with the welcome tab selected.
    #[must_use]
    pub const fn new(user: Arc<UserRecord>) -> Self {
        Self {
            user,
            active_tab: Tab::Welcome,
            profile_stack: NavigationStack::new(ProfileRoute::Info),
        }
    }

    /// Authenticated account shown by every child screen.
    #[must_use]
    pub fn user(&self) -> &UserRecord {
        &self.user
    }

    /// Selected tab.
    #[must_use]
    pub const fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Stack of the profile tab.
    #[must_use]
    pub const fn profile_stack(&self) -> &NavigationStack<ProfileRoute> {
        &self.profile_stack
    }

    /// Screen currently visible inside the shell.
    #[must_use]
    pub fn active_screen(&self) -> ActiveScreen {
        match self.active_tab {
            Tab::Welcome => ActiveScreen::Welcome,
            Tab::Profile => match self.profile_stack.top() {
                ProfileRoute::Info => ActiveScreen::Profile,
                ProfileRoute::Bio => ActiveScreen::Bio,
            },
        }
    }

    /// Select `tab`; returns `false` when it was already selected.
    pub fn select(&mut self, tab: Tab) -> bool {
        if self.active_tab == tab {
            return false;
        }
        self.active_tab = tab;
        true
    }

    /// Push the bio onto the profile tab; only valid from the profile root.
    pub fn open_bio(&mut self) -> bool {
        if self.active_screen() != ActiveScreen::Profile {
            return false;
        }
        self.profile_stack.push(ProfileRoute::Bio);
        true
    }

    /// Pop the profile tab's top screen; a no-op on the welcome tab or at
    /// the stack root.
    pub fn back(&mut self) -> bool {
        if self.active_tab != Tab::Profile {
            return false;
        }
        self.profile_stack.pop().is_some()
    }
}

/// Whether anyone is logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionStatus {
    /// The login screen is showing.
    LoggedOut,
    /// The home shell is showing.
    LoggedIn,
}

/// The controller's only long-lived mutable state.
///
/// ## Invariants
/// - An authenticated user exists iff the status is
///   [`SessionStatus::LoggedIn`]; the enum shape makes any other combination
///   unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Nobody is authenticated.
    #[default]
    LoggedOut,
    /// A user passed validation and the home shell is open.
    LoggedIn(HomeShell),
}

impl SessionState {
    /// Coarse session status.
    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        match self {
            Self::LoggedOut => SessionStatus::LoggedOut,
            Self::LoggedIn(_) => SessionStatus::LoggedIn,
        }
    }

    /// The authenticated account, if any.
    #[must_use]
    pub fn authenticated_user(&self) -> Option<&UserRecord> {
        self.shell().map(HomeShell::user)
    }

    /// The open home shell, if any.
    #[must_use]
    pub const fn shell(&self) -> Option<&HomeShell> {
        match self {
            Self::LoggedOut => None,
            Self::LoggedIn(shell) => Some(shell),
        }
    }

    /// Screen currently visible.
    #[must_use]
    pub fn active_screen(&self) -> ActiveScreen {
        self.shell()
            .map_or(ActiveScreen::Login, HomeShell::active_screen)
    }
}
