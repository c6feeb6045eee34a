//! # Configsvc Params
//!
//! Declarative request parameter binding for configuration service operations.
//!
//! Each operation declares a static table of parameters ([`OperationSpec`]):
//! name, location, type, required flag, default and constraints. One generic
//! binder ([`bind_operation`]) walks that table against an inbound request and
//! its route match, so per-operation code shrinks to the table plus a small
//! [`OperationParams`] impl.
//!
//! ## Binding rules
//!
//! | Rule | Behavior |
//! |------|----------|
//! | Multiple values | The last value wins |
//! | Absent path value | Binds as `""` |
//! | Absent required query/header | `required` error |
//! | Absent optional query/header | Default, else zero value |
//! | Failures | Every parameter is attempted; errors kept in declaration order |
//! | Request handle | Always attached to the parameter object |
//!
//! ## Example
//!
//! ```rust
//! use configsvc_params::{GetServiceParams, OperationParams};
//! use configsvc_router::{Params, RouteMatch};
//! use std::sync::Arc;
//!
//! let mut params = Params::new();
//! params.push("projectName", "sockshop");
//! params.push("serviceName", "carts");
//! let route = RouteMatch::new("getService", params);
//! let request = Arc::new(http::Request::new(Default::default()));
//!
//! let bound = GetServiceParams::bind(Arc::clone(&request), &route);
//! assert!(bound.is_valid());
//! assert!(Arc::ptr_eq(bound.params().http_request(), &request));
//! assert_eq!(bound.params().service_name(), "carts");
//! ```
//!
//! ## Error Handling
//!
//! A failed binding yields a [`CompositeValidationError`] holding one
//! [`ParamError`] per failed parameter. Its
//! [`to_envelope`](CompositeValidationError::to_envelope) builds the JSON
//! body sent back to the client.

#![doc(html_root_url = "https://docs.rs/configsvc-params/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod binder;
mod operation;
pub mod operations;
mod spec;
mod value;

pub use binder::{bind_operation, BoundValues};
pub use operation::{Bound, OperationParams};
pub use operations::services::GetServiceParams;
pub use spec::{Constraints, OperationSpec, OperationSpecBuilder, ParamSpec, ParamType};
pub use value::{FromParamValue, ParamValue};

pub use configsvc_core::{CompositeValidationError, ParamError, ParamLocation, Request};
pub use configsvc_router::{Params, RouteMatch};
