//! Typed configuration for the configuration service.
//!
//! - TOML and JSON configuration files
//! - Environment variable overrides (`PREFIX__SECTION__KEY`)
//! - Strict validation (fails on unknown fields)
//! - Layered loading (defaults → file → env)
//!
//! # Example
//!
//! ```no_run
//! use configsvc_config::ConfigLoader;
//!
//! # fn main() -> Result<(), configsvc_config::ConfigError> {
//! let config = ConfigLoader::new()
//!     .with_defaults()
//!     .with_optional_file("configsvc.toml")?
//!     .with_env_prefix("CONFIGSVC")
//!     .load()?;
//!
//! config.init_logging()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! ```toml
//! [service]
//! name = "configuration-service"
//! version = "1.4.0"
//! environment = "production"
//!
//! [logging]
//! enabled = true
//! level = "info,configsvc_params=debug"
//! format = "json"
//! ```

#![doc(html_root_url = "https://docs.rs/configsvc-config/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod loader;
mod schema;

pub use config::ConfigsvcConfig;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::{LogFormat, LoggingConfig, ServiceConfig};
