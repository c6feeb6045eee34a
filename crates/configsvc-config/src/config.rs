//! Top-level configuration.

use configsvc_telemetry::{create_env_filter, LogConfig};
use serde::{Deserialize, Serialize};

use crate::{ConfigError, LogFormat, LoggingConfig, ServiceConfig};

/// Complete configuration service settings.
///
/// Use [`ConfigLoader`](crate::ConfigLoader) to load it from files and
/// environment variables.
///
/// # Example
///
/// ```
/// use configsvc_config::ConfigsvcConfig;
///
/// let config = ConfigsvcConfig::default();
/// assert_eq!(config.service.name, "configuration-service");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigsvcConfig {
    /// Service identity.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConfigsvcConfig {
    /// Development preset: pretty, colored debug logs with source locations.
    #[must_use]
    pub fn development() -> Self {
        Self {
            service: ServiceConfig {
                environment: "development".to_string(),
                ..Default::default()
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
                format: LogFormat::Pretty,
                ansi_enabled: true,
                include_location: true,
                ..Default::default()
            },
        }
    }

    /// Production preset: JSON logs at info level.
    #[must_use]
    pub fn production() -> Self {
        Self {
            service: ServiceConfig {
                environment: "production".to_string(),
                ..Default::default()
            },
            logging: LoggingConfig::default(),
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the service name is empty or
    /// the log level is not a valid filter directive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service.name.trim().is_empty() {
            return Err(ConfigError::invalid_value(
                "service.name",
                "must not be empty",
            ));
        }

        if let Err(e) = create_env_filter(&self.logging.level) {
            return Err(ConfigError::invalid_value("logging.level", e.to_string()));
        }

        Ok(())
    }

    /// Returns the telemetry logging configuration.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        self.logging.to_log_config(&self.service.name)
    }

    /// Installs the global log subscriber described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Telemetry` if a subscriber is already installed
    /// or the logging settings are rejected.
    pub fn init_logging(&self) -> Result<(), ConfigError> {
        configsvc_telemetry::init_logging(&self.log_config())?;
        Ok(())
    }
}
