//! Structured logging for the configuration service.
//!
//! Library crates log through `tracing` macros only. A binary embedding them
//! calls [`init_logging`] once at startup to install a `tracing-subscriber`
//! registry writing JSON (production) or pretty (development) output.
//!
//! # Example
//!
//! ```rust,no_run
//! use configsvc_telemetry::{init_logging, LogConfig};
//!
//! let config = LogConfig {
//!     level: "info,configsvc_params=debug".to_string(),
//!     ..LogConfig::production()
//! };
//! init_logging(&config)?;
//!
//! tracing::info!(operation_id = "getService", "Serving");
//! # Ok::<(), configsvc_telemetry::TelemetryError>(())
//! ```

#![doc(html_root_url = "https://docs.rs/configsvc-telemetry/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod logging;

pub use error::TelemetryError;
pub use logging::{create_env_filter, init_logging, LogConfig};

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
