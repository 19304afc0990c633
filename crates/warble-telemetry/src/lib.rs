//! # Warble Telemetry
//!
//! Structured logging bootstrap for Warble server processes.
//!
//! Every binary (and the test suite) initializes logging through this crate
//! so that filter configuration and output format stay uniform: an
//! `EnvFilter` driven by `WARBLE_LOG_LEVEL`/`RUST_LOG`, with either a pretty
//! console format for development or JSON lines for container deployments.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use warble_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     init_telemetry(&config).expect("failed to init telemetry");
//!     // tracing macros are now live
//! }
//! ```

mod config;

pub use config::TelemetryConfig;

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("invalid log filter: {0}")]
    Filter(String),

    #[error("failed to install subscriber: {0}")]
    SubscriberInit(String),
}

/// Install the global tracing subscriber.
///
/// Fails if a subscriber is already installed for this process; tests that
/// may race on initialization should call [`init_for_tests`] instead.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| TelemetryError::Filter(e.to_string()))?;

    if config.json_logs {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(config.with_target)
            .with_current_span(false);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()
            .map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(config.with_target)
            .with_ansi(true);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;
    }

    tracing::debug!(service = %config.service_name, "telemetry initialized");
    Ok(())
}

/// Best-effort initialization for test binaries.
///
/// Tests run in one process and several may try to install the subscriber;
/// only the first succeeds and the rest are no-ops.
pub fn init_for_tests() {
    let config = TelemetryConfig {
        log_level: "debug".to_string(),
        ..TelemetryConfig::default()
    };
    let _ = init_telemetry(&config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_initialization_is_rejected_once() {
        init_for_tests();
        // Second explicit init must surface the subscriber conflict
        let err = init_telemetry(&TelemetryConfig::default());
        assert!(matches!(err, Err(TelemetryError::SubscriberInit(_))));
    }
}
