//! Structured logging for geoform hosts
//!
//! Installs a `tracing` subscriber with an env filter and a compact
//! formatter, and tags the process with a session id so the log lines of one
//! run can be correlated.

use geoform_core::config::LoggingConfig;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

/// Global session ID for correlating logs
static SESSION_ID: Lazy<String> = Lazy::new(|| Uuid::new_v4().to_string());

/// Initialize with custom configuration
///
/// `RUST_LOG` takes precedence over `config.log_level`.
pub fn init_with_config(config: TelemetryConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| anyhow::anyhow!("Invalid log filter {:?}: {}", config.log_level, e))?;

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(config.show_target)
            .with_file(config.show_file)
            .with_line_number(config.show_line_number)
            .compact());

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    tracing::debug!(
        session_id = %session_id(),
        version = env!("CARGO_PKG_VERSION"),
        "Telemetry initialized"
    );

    Ok(())
}

/// Get the current session ID
pub fn session_id() -> &'static str {
    &SESSION_ID
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub show_target: bool,
    pub show_file: bool,
    pub show_line_number: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_target: false,
            show_file: false,
            show_line_number: false,
        }
    }
}

impl TelemetryConfig {
    /// Raise the configured level by `-v` count: 1 is debug, 2 or more is trace.
    #[must_use]
    pub fn with_verbosity(mut self, verbose: u8) -> Self {
        match verbose {
            0 => {}
            1 => self.log_level = "debug".to_string(),
            _ => {
                self.log_level = "trace".to_string();
                self.show_target = true;
                self.show_line_number = true;
            }
        }
        self
    }

    /// Silence everything below errors.
    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.log_level = "error".to_string();
        self
    }
}

impl From<&LoggingConfig> for TelemetryConfig {
    fn from(logging: &LoggingConfig) -> Self {
        Self {
            log_level: logging.level.clone(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_is_stable() {
        assert_eq!(session_id(), session_id());
        assert!(Uuid::parse_str(session_id()).is_ok());
    }

    #[test]
    fn test_from_logging_config() {
        let logging = LoggingConfig { level: "geoform_form=debug".to_string() };
        let config = TelemetryConfig::from(&logging);
        assert_eq!(config.log_level, "geoform_form=debug");
        assert!(!config.show_target);
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(TelemetryConfig::default().with_verbosity(0).log_level, "info");
        assert_eq!(TelemetryConfig::default().with_verbosity(1).log_level, "debug");
        let trace = TelemetryConfig::default().with_verbosity(3);
        assert_eq!(trace.log_level, "trace");
        assert!(trace.show_target);
    }

    #[test]
    fn test_quiet() {
        assert_eq!(TelemetryConfig::default().with_verbosity(2).quiet().log_level, "error");
    }
}
