//! Port for the screen-activation observability hook.

use crate::domain::UserId;
use crate::domain::navigation::ActiveScreen;

/// Records which account is looking at which screen.
///
/// Called once each time an authenticated screen becomes active. The hook
/// has no return value and must not influence navigation.
#[cfg_attr(test, mockall::automock)]
pub trait ActivityLog: Send + Sync {
    /// Note that `user_id` is now looking at `screen`.
    fn log_active_user(&self, user_id: UserId, screen: ActiveScreen);
}
