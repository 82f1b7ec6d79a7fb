//! Login flow configuration loaded via `OrthoConfig`.

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::navigation::NavigationController;
use crate::domain::ports::ActivityLog;

const DEFAULT_REMINDERS_ENABLED: bool = true;
const DEFAULT_JSON_LOGS: bool = false;

/// Errors raised while loading [`LoginFlowSettings`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Arguments, environment or configuration files could not be merged.
    #[error("failed to load login flow settings: {message}")]
    Load {
        /// Description of the loader failure.
        message: String,
    },
}

/// Configuration values for the login flow and its logging.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LOGIN_FLOW")]
pub struct LoginFlowSettings {
    /// Offer the "Forgot User Name?" and "Forgot Password?" reminders.
    pub reminders_enabled: Option<bool>,
    /// Emit JSON log lines instead of human-readable ones.
    pub json_logs: Option<bool>,
    /// `tracing` filter directive; `RUST_LOG` applies when unset.
    pub log_filter: Option<String>,
}

impl LoginFlowSettings {
    /// Return whether reminders are offered, falling back to the default.
    #[must_use]
    pub fn reminders_enabled(&self) -> bool {
        self.reminders_enabled.unwrap_or(DEFAULT_REMINDERS_ENABLED)
    }

    /// Return whether logs are written as JSON, falling back to the default.
    #[must_use]
    pub fn json_logs(&self) -> bool {
        self.json_logs.unwrap_or(DEFAULT_JSON_LOGS)
    }

    /// Load settings from `args` (program name first), the environment and
    /// any configuration file, in `OrthoConfig` precedence order.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] when a source cannot be parsed.
    pub fn from_args<I>(args: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = OsString>,
    {
        Self::load_from_iter(args).map_err(|err| SettingsError::Load {
            message: err.to_string(),
        })
    }

    /// Apply the navigation-related settings to `controller`.
    #[must_use]
    pub fn configure<L: ActivityLog>(
        &self,
        controller: NavigationController<L>,
    ) -> NavigationController<L> {
        controller.with_reminders(self.reminders_enabled())
    }
}
