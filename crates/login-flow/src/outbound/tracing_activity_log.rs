//! Activity log adapters.

use tracing::info;

use crate::domain::UserId;
use crate::domain::navigation::ActiveScreen;
use crate::domain::ports::ActivityLog;

/// Emits one `info` event per screen activation.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingActivityLog;

impl ActivityLog for TracingActivityLog {
    fn log_active_user(&self, user_id: UserId, screen: ActiveScreen) {
        info!(user_id = %user_id, screen = %screen, "screen activated");
    }
}

/// Discards every activation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopActivityLog;

impl ActivityLog for NoopActivityLog {
    fn log_active_user(&self, _user_id: UserId, _screen: ActiveScreen) {}
}
