//! Tracing subscriber setup for hosts embedding the login flow.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt};

use crate::settings::LoginFlowSettings;

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured filter directive could not be parsed.
    #[error("invalid log filter `{directive}`: {message}")]
    InvalidFilter {
        /// Directive as configured.
        directive: String,
        /// Parser diagnostic.
        message: String,
    },
    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {message}")]
    Install {
        /// Subscriber diagnostic.
        message: String,
    },
}

fn build_filter(settings: &LoginFlowSettings) -> Result<EnvFilter, TelemetryError> {
    settings.log_filter.as_deref().map_or_else(
        || Ok(EnvFilter::from_default_env()),
        |directive| {
            EnvFilter::try_new(directive).map_err(|err| TelemetryError::InvalidFilter {
                directive: directive.to_owned(),
                message: err.to_string(),
            })
        },
    )
}

/// Install a `tracing` subscriber honouring `settings`.
///
/// `log_filter` takes precedence over `RUST_LOG`. JSON output mirrors what
/// the service deployments ingest; plain output suits local runs.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] for a malformed directive and
/// [`TelemetryError::Install`] when a subscriber is already set.
pub fn init_tracing(settings: &LoginFlowSettings) -> Result<(), TelemetryError> {
    let filter = build_filter(settings)?;
    let builder = fmt().with_env_filter(filter);
    let installed = if settings.json_logs() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|err| TelemetryError::Install {
        message: err.to_string(),
    })
}
