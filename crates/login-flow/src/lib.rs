//! Credential validation and screen navigation core for the login demo app.
//!
//! The crate owns the only decision logic the demo has: checking submitted
//! credentials against the single known account, moving between the login
//! screen, the tabbed home shell and the profile bio, and packaging the
//! authenticated user's data for each screen. Drawing is left to a host that
//! implements [`domain::ports::Renderer`].
//!
//! # Overview
//!
//! - [`domain`] holds the user record, the credential validator, the ports
//!   the core talks through, the navigation state machine driven by
//!   [`FlowEvent`]s, and the binder that assembles per-screen view models.
//! - [`outbound`] provides the static account store and the tracing-backed
//!   activity log.
//! - [`settings`] and [`telemetry`] cover configuration and log bootstrap.
//!
//! # Example
//!
//! ```
//! use login_flow::{ActiveScreen, FlowEvent, NavigationController, Outcome};
//! use login_flow::outbound::{NoopActivityLog, StaticUserRepository};
//!
//! let mut flow = NavigationController::from_repository(&StaticUserRepository, NoopActivityLog)
//!     .expect("static account loads");
//!
//! let outcome = flow.dispatch(FlowEvent::SubmitCredentials {
//!     login: "Matvei".to_owned(),
//!     password: "password".to_owned(),
//! });
//!
//! assert_eq!(outcome, Outcome::Activated(ActiveScreen::Welcome));
//! ```

pub mod domain;
pub mod outbound;
pub mod settings;
pub mod telemetry;

pub use domain::navigation::{
    ActiveScreen, Field, FlowEvent, Frame, NavigationController, Outcome, Tab,
};
pub use domain::{UserId, UserRecord, ValidationError, validate};
pub use settings::LoginFlowSettings;
