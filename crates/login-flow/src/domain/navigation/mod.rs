//! Navigation state machine.
//!
//! The controller is the single owner of [`SessionState`]. Hosts feed it
//! [`FlowEvent`]s one at a time; each dispatch completes synchronously and
//! reports what happened as an [`Outcome`]. [`NavigationController::render`]
//! is a pure function of the resulting state.
//!
//! ```text
//! Login --submit ok--> Welcome <--tab--> Profile --open bio--> Bio
//!   ^                     |                 |   <----back----   |
//!   +------ logout -------+-----------------+-------------------+
//! ```

mod alert;
mod event;
mod form;
mod frame;
mod session;

use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::{ActivityLog, Renderer, UserRepository, UserRepositoryError};
use crate::domain::{UserRecord, binder, validate};

pub use self::alert::{
    Alert, INVALID_CREDENTIALS_MESSAGE, INVALID_CREDENTIALS_TITLE, REMINDER_TITLE,
};
pub use self::event::{Field, FlowEvent, Tab};
pub use self::form::{LoginForm, PASSWORD_MASK};
pub use self::frame::{Frame, LoginView, ScreenView, TabBar};
pub use self::session::{
    ActiveScreen, HomeShell, NavigationStack, ProfileRoute, SessionState, SessionStatus,
};

/// What a single dispatch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A different screen became active.
    Activated(ActiveScreen),
    /// A modal alert is now showing.
    Alerted(Alert),
    /// State changed but the same screen is still active.
    Updated,
    /// The event does not apply to the current state.
    Unchanged,
}

/// Owns the session and decides every screen transition.
///
/// ## Invariants
/// - The account is loaded once at construction and never modified.
/// - While an alert is pending, only [`FlowEvent::DismissAlert`] has an
///   effect.
/// - The activity log is told about every authenticated screen that becomes
///   active, and about nothing else.
#[derive(Debug)]
pub struct NavigationController<L> {
    account: Arc<UserRecord>,
    session: SessionState,
    form: LoginForm,
    alert: Option<Alert>,
    reminders_enabled: bool,
    activity_log: L,
}

impl<L: ActivityLog> NavigationController<L> {
    /// Start on the login screen, authenticating against `account`.
    pub fn new(account: UserRecord, activity_log: L) -> Self {
        Self {
            account: Arc::new(account),
            session: SessionState::LoggedOut,
            form: LoginForm::default(),
            alert: None,
            reminders_enabled: true,
            activity_log,
        }
    }

    /// Load the account from `repository` and start on the login screen.
    ///
    /// # Errors
    ///
    /// Returns the repository's error when the account cannot be loaded.
    pub fn from_repository<R>(repository: &R, activity_log: L) -> Result<Self, UserRepositoryError>
    where
        R: UserRepository + ?Sized,
    {
        let account = repository.fetch_account()?;
        Ok(Self::new(account, activity_log))
    }

    /// Offer or hide the credential reminder buttons.
    #[must_use]
    pub const fn with_reminders(mut self, enabled: bool) -> Self {
        self.reminders_enabled = enabled;
        self
    }

    /// Current session.
    #[must_use]
    pub const fn session(&self) -> &SessionState {
        &self.session
    }

    /// Screen currently visible.
    #[must_use]
    pub fn active_screen(&self) -> ActiveScreen {
        self.session.active_screen()
    }

    /// Contents of the login inputs.
    #[must_use]
    pub const fn login_form(&self) -> &LoginForm {
        &self.form
    }

    /// Alert waiting to be dismissed, if any.
    #[must_use]
    pub const fn pending_alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Whether the reminder buttons are offered.
    #[must_use]
    pub const fn reminders_enabled(&self) -> bool {
        self.reminders_enabled
    }

    /// Apply one input event.
    pub fn dispatch(&mut self, event: FlowEvent) -> Outcome {
        if self.alert.is_some() {
            return match event {
                FlowEvent::DismissAlert => self.dismiss_alert(),
                _ => Outcome::Unchanged,
            };
        }
        match self.session {
            SessionState::LoggedOut => self.on_login_screen(event),
            SessionState::LoggedIn(_) => self.in_home_shell(&event),
        }
    }

    /// Apply `event`, then draw the resulting frame once.
    pub fn dispatch_and_render<R>(&mut self, event: FlowEvent, renderer: &mut R) -> Outcome
    where
        R: Renderer + ?Sized,
    {
        let outcome = self.dispatch(event);
        renderer.render(&self.render());
        outcome
    }

    /// Assemble the frame for the current state.
    #[must_use]
    pub fn render(&self) -> Frame {
        let screen = self
            .session
            .shell()
            .map_or_else(|| self.login_view(), |shell| self.shell_view(shell));
        Frame {
            screen,
            tab_bar: self
                .session
                .shell()
                .map(|shell| TabBar::new(shell.active_tab())),
            alert: self.alert.clone(),
        }
    }

    fn login_view(&self) -> ScreenView {
        ScreenView::Login(LoginView {
            login: self.form.login().to_owned(),
            masked_password: self.form.masked_password(),
            focus: self.form.focus(),
            reminders_enabled: self.reminders_enabled,
        })
    }

    fn shell_view(&self, shell: &HomeShell) -> ScreenView {
        let user = shell.user();
        match shell.active_screen() {
            ActiveScreen::Login => self.login_view(),
            ActiveScreen::Welcome => ScreenView::Welcome(binder::welcome(user)),
            ActiveScreen::Profile => ScreenView::Profile(binder::profile(user)),
            ActiveScreen::Bio => ScreenView::Bio(binder::bio(user)),
        }
    }

    fn on_login_screen(&mut self, event: FlowEvent) -> Outcome {
        match event {
            FlowEvent::EditField { field, text } => {
                self.form.set(field, text);
                Outcome::Updated
            }
            FlowEvent::SubmitCredentials { login, password } => {
                self.form.set(Field::Login, login);
                self.form.set(Field::Password, password);
                self.submit()
            }
            FlowEvent::FieldReturn(Field::Login) => {
                if self.form.focus() == Field::Password {
                    return Outcome::Unchanged;
                }
                self.form.focus_on(Field::Password);
                Outcome::Updated
            }
            FlowEvent::FieldReturn(Field::Password) => self.submit(),
            FlowEvent::RequestReminder(field) => self.remind(field),
            FlowEvent::DismissAlert
            | FlowEvent::SelectTab(_)
            | FlowEvent::OpenBio
            | FlowEvent::Back
            | FlowEvent::Logout => Outcome::Unchanged,
        }
    }

    fn in_home_shell(&mut self, event: &FlowEvent) -> Outcome {
        if *event == FlowEvent::Logout {
            return self.logout();
        }
        let changed = match &mut self.session {
            SessionState::LoggedOut => false,
            SessionState::LoggedIn(shell) => match event {
                FlowEvent::SelectTab(tab) => shell.select(*tab),
                FlowEvent::OpenBio => shell.open_bio(),
                FlowEvent::Back => shell.back(),
                _ => false,
            },
        };
        if changed {
            self.activate()
        } else {
            Outcome::Unchanged
        }
    }

    fn submit(&mut self) -> Outcome {
        match validate(self.form.login(), self.form.password(), &self.account) {
            Ok(user) => {
                // The login screen is torn down, so its inputs go with it.
                self.form.reset();
                self.session = SessionState::LoggedIn(HomeShell::new(Arc::new(user)));
                self.activate()
            }
            Err(error) => {
                debug!(error = %error, "credentials rejected");
                self.form.clear(Field::Password);
                self.raise(Alert::invalid_credentials())
            }
        }
    }

    fn remind(&mut self, field: Field) -> Outcome {
        if !self.reminders_enabled {
            return Outcome::Unchanged;
        }
        let alert = Alert::reminder(field, &self.account);
        self.raise(alert)
    }

    fn raise(&mut self, alert: Alert) -> Outcome {
        self.alert = Some(alert.clone());
        Outcome::Alerted(alert)
    }

    fn dismiss_alert(&mut self) -> Outcome {
        let Some(alert) = self.alert.take() else {
            return Outcome::Unchanged;
        };
        if let Some(field) = alert.clears() {
            self.form.clear(field);
        }
        Outcome::Updated
    }

    fn logout(&mut self) -> Outcome {
        if let Some(user) = self.session.authenticated_user() {
            debug!(user_id = %user.id(), "logging out");
        }
        self.session = SessionState::LoggedOut;
        self.form.reset();
        self.activate()
    }

    fn activate(&self) -> Outcome {
        let screen = self.active_screen();
        match self.session.authenticated_user() {
            Some(user) => self.activity_log.log_active_user(user.id(), screen),
            None => debug!(screen = %screen, "screen activated without a session"),
        }
        Outcome::Activated(screen)
    }
}
