//! Domain primitives, services and ports.
//!
//! Purpose: define the immutable account record the demo authenticates
//! against, the credential check, the navigation state machine and the view
//! models it hands to the renderer. Everything here is synchronous and free
//! of I/O; adapters live in [`crate::outbound`].
//!
//! Public surface:
//! - `UserRecord` (alias to `user::UserRecord`): the single known account.
//! - `validate` (alias to `auth::validate`): exact credential comparison.
//! - `ValidationError` (alias to `auth::ValidationError`): the only
//!   user-facing failure.
//! - `NavigationController` (in `navigation`): owns the session and decides
//!   every screen transition.

pub mod auth;
pub mod binder;
pub mod navigation;
pub mod ports;
pub mod user;

pub use self::auth::{ValidationError, validate};
pub use self::user::{Department, JobInfo, JobTitle, PersonInfo, UserId, UserRecord};
