//! Logging bootstrap.
//!
//! Sets up a `tracing` subscriber with an `EnvFilter` and either
//! human-readable or JSON output.

#[cfg(feature = "telemetry")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::RosterResult;
use serde::{Deserialize, Serialize};

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Default filter directives, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit one JSON object per event instead of pretty lines.
    #[serde(default)]
    pub json_logs: bool,
}

fn default_log_filter() -> String {
    "info,roster=debug,tower_http=debug".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            json_logs: false,
        }
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.log_filter`.
#[cfg(feature = "telemetry")]
pub fn init_tracing(config: &TelemetryConfig) -> RosterResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .map_err(|e| crate::RosterError::Configuration(format!("Invalid log filter: {}", e)))?;

    let json_layer = config
        .json_logs
        .then(|| tracing_subscriber::fmt::layer().json().with_target(true));
    let pretty_layer = (!config.json_logs).then(|| tracing_subscriber::fmt::layer().with_target(true));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(pretty_layer)
        .try_init()
        .map_err(|e| crate::RosterError::internal(format!("Failed to install subscriber: {}", e)))?;

    tracing::debug!(
        log_filter = %config.log_filter,
        json_logs = config.json_logs,
        "Tracing initialized"
    );

    Ok(())
}

/// Placeholder for when the telemetry feature is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn init_tracing(_config: &TelemetryConfig) -> RosterResult<()> {
    Ok(())
}
