//! Structured logging setup and standard event names.
//!
//! Log lines go to stderr so that command output on stdout stays parseable.

use crate::{LogFormat, TelemetryConfig, TelemetryError};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the logging subsystem.
///
/// Sets up tracing-subscriber with the configured format, respecting the
/// configured log level unless `RUST_LOG` is set.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    // Build the env filter from RUST_LOG or the config
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    match config.log_format {
        LogFormat::Json => init_json_logging(filter),
        LogFormat::Pretty => init_pretty_logging(filter),
        LogFormat::Compact => init_compact_logging(filter),
    }
}

fn init_json_logging(filter: EnvFilter) -> Result<(), TelemetryError> {
    let json_layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_current_span(true)
        .with_span_list(false)
        .with_file(false)
        .with_line_number(false)
        .flatten_event(true)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(json_layer)
        .try_init()
        .map_err(|e: tracing_subscriber::util::TryInitError| {
            TelemetryError::LoggingInit(e.to_string())
        })
}

fn init_pretty_logging(filter: EnvFilter) -> Result<(), TelemetryError> {
    let pretty_layer = fmt::layer()
        .pretty()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(pretty_layer)
        .try_init()
        .map_err(|e: tracing_subscriber::util::TryInitError| {
            TelemetryError::LoggingInit(e.to_string())
        })
}

fn init_compact_logging(filter: EnvFilter) -> Result<(), TelemetryError> {
    let compact_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(compact_layer)
        .try_init()
        .map_err(|e: tracing_subscriber::util::TryInitError| {
            TelemetryError::LoggingInit(e.to_string())
        })
}

/// Standard log event names.
pub mod events {
    /// A graph model has been loaded.
    pub const MODEL_LOADED: &str = "model_loaded";

    /// A flattened model has been expanded before loading.
    pub const MODEL_EXPANDED: &str = "model_expanded";

    /// The loaded model has been cleared.
    pub const MODEL_CLEARED: &str = "model_cleared";

    /// A link or reference target could not be found in the document.
    pub const LINK_UNRESOLVED: &str = "link_unresolved";

    /// A shape links to itself.
    pub const SELF_LINK: &str = "self_link";

    /// Resolution stopped at a node already being resolved.
    pub const CYCLE_CUT: &str = "cycle_cut";

    /// A node was projected with the generic fallback.
    pub const PROJECTION_FALLBACK: &str = "projection_fallback";
}

/// Helper macros for structured logging with standard fields.
///
/// These wrap the tracing macros to ensure consistent field naming.
#[macro_export]
macro_rules! log_model_loaded {
    ($($field:tt)*) => {
        tracing::info!(
            event = $crate::logging::events::MODEL_LOADED,
            $($field)*
        )
    };
}

#[macro_export]
macro_rules! log_model_expanded {
    ($($field:tt)*) => {
        tracing::debug!(
            event = $crate::logging::events::MODEL_EXPANDED,
            $($field)*
        )
    };
}

#[macro_export]
macro_rules! log_model_cleared {
    ($($field:tt)*) => {
        tracing::info!(
            event = $crate::logging::events::MODEL_CLEARED,
            $($field)*
        )
    };
}

#[macro_export]
macro_rules! log_link_unresolved {
    ($($field:tt)*) => {
        tracing::debug!(
            event = $crate::logging::events::LINK_UNRESOLVED,
            $($field)*
        )
    };
}

#[macro_export]
macro_rules! log_self_link {
    ($($field:tt)*) => {
        tracing::trace!(
            event = $crate::logging::events::SELF_LINK,
            $($field)*
        )
    };
}

#[macro_export]
macro_rules! log_cycle_cut {
    ($($field:tt)*) => {
        tracing::debug!(
            event = $crate::logging::events::CYCLE_CUT,
            $($field)*
        )
    };
}

#[macro_export]
macro_rules! log_projection_fallback {
    ($($field:tt)*) => {
        tracing::debug!(
            event = $crate::logging::events::PROJECTION_FALLBACK,
            $($field)*
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    // Logging initialization touches global subscriber state, so these
    // tests only cover the configuration logic.

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse("JSON"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse("pretty"), Some(LogFormat::Pretty));
        assert_eq!(LogFormat::parse("Compact"), Some(LogFormat::Compact));
        assert_eq!(LogFormat::parse("invalid"), None);
    }

    #[test]
    fn test_event_names_are_snake_case() {
        for name in [
            events::MODEL_LOADED,
            events::MODEL_EXPANDED,
            events::LINK_UNRESOLVED,
            events::CYCLE_CUT,
        ] {
            assert!(name.chars().all(|c| c.is_ascii_lowercase() || c == '_'));
        }
    }
}
