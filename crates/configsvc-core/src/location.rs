//! Parameter locations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Part of the request a declared parameter is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    /// Path segment captured by the route pattern (e.g. `/project/{projectName}`).
    Path,
    /// Query string parameter.
    Query,
    /// HTTP header.
    Header,
}

impl ParamLocation {
    /// Returns the lowercase name used in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Query => "query",
            Self::Header => "header",
        }
    }
}

impl fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
