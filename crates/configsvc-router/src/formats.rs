//! Named string formats.
//!
//! A [`FormatRegistry`] maps format names (as declared on a parameter, e.g.
//! `format: uuid`) to validator functions. Routers hand the registry to binding
//! alongside the matched parameters.

use std::collections::HashMap;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::{Arc, OnceLock};

/// Validator for one named format.
pub type FormatValidator = fn(&str) -> bool;

/// Registry of named string formats.
///
/// # Example
///
/// ```rust
/// use configsvc_router::FormatRegistry;
///
/// let mut formats = FormatRegistry::new();
/// formats.register("semver-major", |v| v.parse::<u32>().is_ok());
///
/// assert_eq!(formats.validate("uuid", "0190b3c4-7d2e-7c3a-9f51-2b8e4d6a1c00"), Some(true));
/// assert_eq!(formats.validate("semver-major", "x"), Some(false));
/// assert_eq!(formats.validate("unknown", "x"), None);
/// ```
#[derive(Clone)]
pub struct FormatRegistry {
    validators: HashMap<String, FormatValidator>,
}

impl FormatRegistry {
    /// Creates a registry with the built-in formats.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register("uuid", is_uuid);
        registry.register("date", is_date);
        registry.register("date-time", is_date_time);
        registry.register("ipv4", is_ipv4);
        registry.register("ipv6", is_ipv6);
        registry.register("hostname", is_hostname);
        registry
    }

    /// Creates a registry with no formats at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            validators: HashMap::new(),
        }
    }

    /// Returns the process-wide registry with the built-in formats.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        static SHARED: OnceLock<Arc<FormatRegistry>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(Self::new())))
    }

    /// Registers (or replaces) a format.
    pub fn register(&mut self, name: impl Into<String>, validator: FormatValidator) {
        self.validators.insert(name.into(), validator);
    }

    /// Returns true if `name` is a known format.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    /// Validates `value` against the named format.
    ///
    /// Returns `None` if the format is unknown.
    #[must_use]
    pub fn validate(&self, name: &str, value: &str) -> Option<bool> {
        self.validators.get(name).map(|validator| validator(value))
    }

    /// Returns the registered format names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.validators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("formats", &self.names())
            .finish()
    }
}

fn is_uuid(value: &str) -> bool {
    uuid::Uuid::parse_str(value).is_ok()
}

fn is_date(value: &str) -> bool {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

fn is_date_time(value: &str) -> bool {
    chrono::DateTime::parse_from_rfc3339(value).is_ok()
}

fn is_ipv4(value: &str) -> bool {
    value.parse::<Ipv4Addr>().is_ok()
}

fn is_ipv6(value: &str) -> bool {
    value.parse::<Ipv6Addr>().is_ok()
}

// RFC 1123: dot-separated labels of 1-63 alphanumerics or hyphens, no leading
// or trailing hyphen, 253 characters overall.
fn is_hostname(value: &str) -> bool {
    let value = value.strip_suffix('.').unwrap_or(value);
    if value.is_empty() || value.len() > 253 {
        return false;
    }
    value.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
    })
}
