//! Route match types for the configuration service.
//!
//! Route matching itself happens upstream; this crate models what a router
//! hands to parameter binding once a request path has matched a route
//! pattern such as `/project/{projectName}/service/{serviceName}`:
//!
//! - **[`Params`]**: raw captured values per parameter name, in order
//! - **[`ParamLookup`]**: values for one name plus whether the name was present
//! - **[`FormatRegistry`]**: named string formats used by format-constrained parameters
//!
//! # Example
//!
//! ```rust
//! use configsvc_router::{Params, RouteMatch};
//!
//! let mut params = Params::new();
//! params.push("projectName", "sockshop");
//! params.push("serviceName", "carts");
//!
//! let route_match = RouteMatch::new("getService", params);
//! assert_eq!(route_match.operation_id, "getService");
//!
//! let lookup = route_match.params.lookup("projectName");
//! assert!(lookup.has_key());
//! assert_eq!(lookup.last(), Some("sockshop"));
//! ```

mod formats;
mod params;

use std::sync::Arc;

pub use formats::{FormatRegistry, FormatValidator};
pub use params::{ParamLookup, Params};

/// A matched route with its operation ID, captured parameters and formats.
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
    /// The operation ID for the matched route
    pub operation_id: &'a str,
    /// Captured path parameters
    pub params: Params,
    /// Format registry for format-constrained parameters
    pub formats: Arc<FormatRegistry>,
}

impl<'a> RouteMatch<'a> {
    /// Creates a new route match using the shared built-in format registry.
    #[must_use]
    pub fn new(operation_id: &'a str, params: Params) -> Self {
        Self {
            operation_id,
            params,
            formats: FormatRegistry::shared(),
        }
    }

    /// Replaces the format registry.
    #[must_use]
    pub fn with_formats(mut self, formats: Arc<FormatRegistry>) -> Self {
        self.formats = formats;
        self
    }
}
