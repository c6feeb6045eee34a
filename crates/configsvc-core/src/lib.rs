//! # Configsvc Core
//!
//! Core types shared by the configuration service's request-handling crates.
//!
//! - [`Request`] - The inbound HTTP request handle retained by parameter objects
//! - [`ParamLocation`] - Where a declared parameter is read from
//! - [`ParamError`] - A single parameter that failed binding or validation
//! - [`CompositeValidationError`] - Every parameter failure of one request, in
//!   declaration order
//! - [`ErrorEnvelope`] - Serializable client rejection body

#![doc(html_root_url = "https://docs.rs/configsvc-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod location;

pub use error::{
    CompositeValidationError, ErrorDetail, ErrorEnvelope, FieldViolation, ParamError,
    ParamErrorKind,
};
pub use location::ParamLocation;

/// Inbound HTTP request as seen by parameter binding.
///
/// Parameter objects keep it behind an `Arc` so handlers can reach headers or
/// tracing context without the binder copying anything.
pub type Request = http::Request<bytes::Bytes>;
