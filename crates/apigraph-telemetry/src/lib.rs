//! Logging infrastructure for the apigraph toolchain.
//!
//! Library crates only emit `tracing` events; binaries call [`init`] once
//! at startup to install a subscriber.
//!
//! # Usage
//!
//! ```ignore
//! use apigraph_telemetry::{LogFormat, TelemetryConfig};
//!
//! let config = TelemetryConfig::new()
//!     .with_log_level("debug")
//!     .with_log_format(LogFormat::Json);
//!
//! apigraph_telemetry::init(&config)?;
//! ```

pub mod config;
pub mod logging;

pub use config::{LogFormat, TelemetryConfig};
pub use logging::events;

use thiserror::Error;

/// Telemetry errors.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Failed to initialize logging.
    #[error("failed to initialize logging: {0}")]
    LoggingInit(String),
}

/// Install the global subscriber described by `config`.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    logging::init_logging(config)?;
    tracing::debug!(service = %config.service_name, level = %config.log_level, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TelemetryConfig::default();
        assert_eq!(config.service_name, "apigraph");
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_config_builder() {
        let config = TelemetryConfig::new()
            .with_service_name("inspector")
            .with_log_level("debug")
            .with_log_format(LogFormat::Json);

        assert_eq!(config.service_name, "inspector");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Json);
    }
}
