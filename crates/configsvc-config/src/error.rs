//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load, parse or validate service configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required file does not exist.
    #[error("no configuration file at {path}")]
    FileNotFound {
        /// Missing path.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("cannot read configuration file {path}")]
    ReadError {
        /// Unreadable path.
        path: PathBuf,
        /// I/O cause.
        #[source]
        source: std::io::Error,
    },

    /// Malformed TOML, or TOML with unknown fields.
    #[error("invalid TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Malformed JSON, or JSON with unknown fields.
    #[error("invalid JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A field holds a value the service cannot use.
    #[error("invalid configuration value for {field}: {reason}")]
    InvalidValue {
        /// Dotted field path, e.g. `logging.level`.
        field: String,
        /// What is wrong with it.
        reason: String,
    },

    /// An override variable could not be parsed.
    #[error("invalid environment override {var}: {reason}")]
    EnvParseError {
        /// Variable name, or the dotenv file path.
        var: String,
        /// Expected form.
        reason: String,
    },

    /// Unsupported input format or a rejected configuration.
    #[error("configuration rejected: {0}")]
    ValidationError(String),

    /// Applying the configuration to telemetry failed.
    #[error(transparent)]
    Telemetry(#[from] configsvc_telemetry::TelemetryError),
}

impl ConfigError {
    /// File-not-found error for `path`.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Read error for `path` caused by `source`.
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Invalid-value error for a dotted field path.
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Override parse error for `var`.
    pub fn env_parse_error(var: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::EnvParseError {
            var: var.into(),
            reason: reason.into(),
        }
    }

    /// Rejection with a free-form message.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}
