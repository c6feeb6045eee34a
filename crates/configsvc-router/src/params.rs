//! Path parameter storage for a matched route.
//!
//! Each name maps to an ordered list of raw values. Routers normally capture
//! exactly one value per name, but the storage keeps every value it is given
//! so that consumers can apply their own policy (binding takes the last one).
//! Small-vector storage avoids heap allocation for the common case of a few
//! parameters with one value each.

use smallvec::SmallVec;

/// Maximum number of parameter names stored inline (stack allocated).
const INLINE_PARAMS: usize = 4;

type Values = SmallVec<[String; 1]>;

/// Raw path parameters from a route match.
///
/// # Example
///
/// ```rust
/// use configsvc_router::Params;
///
/// let mut params = Params::new();
/// params.push("projectName", "sockshop");
/// params.push("serviceName", "carts");
///
/// assert_eq!(params.get("projectName"), Some("sockshop"));
/// assert_eq!(params.get("serviceName"), Some("carts"));
/// assert_eq!(params.get("stageName"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Params {
    inner: SmallVec<[(String, Values); INLINE_PARAMS]>,
}

impl Params {
    /// Creates a new empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value for `name`, creating the name on first use.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.inner.iter_mut().find(|(n, _)| *n == name) {
            Some((_, values)) => values.push(value),
            None => self.inner.push((name, smallvec::smallvec![value])),
        }
    }

    /// Sets every value for `name`, replacing any previous ones.
    ///
    /// An empty `values` leaves the name present with no values.
    pub fn insert<I, V>(&mut self, name: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let name = name.into();
        let values: Values = values.into_iter().map(Into::into).collect();
        match self.inner.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = values,
            None => self.inner.push((name, values)),
        }
    }

    /// Looks up every value recorded for `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> ParamLookup<'_> {
        match self.inner.iter().find(|(n, _)| n == name) {
            Some((_, values)) => ParamLookup {
                values,
                has_key: true,
            },
            None => ParamLookup {
                values: &[],
                has_key: false,
            },
        }
    }

    /// Returns the last value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.lookup(name).last()
    }

    /// Returns true if `name` was recorded, even with no values.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.inner.iter().any(|(n, _)| n == name)
    }

    /// Returns true if there are no parameter names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of parameter names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Iterates over names and their values, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.inner.iter().map(|(n, v)| (n.as_str(), v.as_slice()))
    }

    /// Clears all parameters, retaining allocated capacity.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl FromIterator<(String, String)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.push(name, value);
        }
        params
    }
}

/// Result of looking up one name in [`Params`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamLookup<'a> {
    values: &'a [String],
    has_key: bool,
}

impl<'a> ParamLookup<'a> {
    /// Returns every recorded value, in order.
    #[must_use]
    pub fn values(&self) -> &'a [String] {
        self.values
    }

    /// Returns true if the name was present in the route match.
    #[must_use]
    pub fn has_key(&self) -> bool {
        self.has_key
    }

    /// Returns the last recorded value.
    #[must_use]
    pub fn last(&self) -> Option<&'a str> {
        self.values.last().map(String::as_str)
    }

    /// Returns true if no values were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_new() {
        let params = Params::new();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
    }

    #[test]
    fn test_params_push_and_get() {
        let mut params = Params::new();
        params.push("projectName", "sockshop");
        params.push("serviceName", "carts");

        assert_eq!(params.get("projectName"), Some("sockshop"));
        assert_eq!(params.get("serviceName"), Some("carts"));
        assert_eq!(params.get("unknown"), None);
    }

    #[test]
    fn test_repeated_push_keeps_all_values() {
        let mut params = Params::new();
        params.push("projectName", "p1");
        params.push("projectName", "p2");

        assert_eq!(params.len(), 1);
        let lookup = params.lookup("projectName");
        assert_eq!(lookup.values(), ["p1", "p2"]);
        assert_eq!(lookup.last(), Some("p2"));
        assert_eq!(params.get("projectName"), Some("p2"));
    }

    #[test]
    fn test_insert_empty_values() {
        let mut params = Params::new();
        params.insert("projectName", Vec::<String>::new());

        let lookup = params.lookup("projectName");
        assert!(lookup.has_key());
        assert!(lookup.is_empty());
        assert_eq!(lookup.last(), None);
        assert!(params.contains_key("projectName"));
        assert_eq!(params.get("projectName"), None);
    }

    #[test]
    fn test_insert_replaces_values() {
        let mut params = Params::new();
        params.push("serviceName", "old");
        params.insert("serviceName", ["a", "b"]);

        assert_eq!(params.lookup("serviceName").values(), ["a", "b"]);
    }

    #[test]
    fn test_lookup_missing_key() {
        let params = Params::new();
        let lookup = params.lookup("projectName");

        assert!(!lookup.has_key());
        assert!(lookup.is_empty());
    }

    #[test]
    fn test_params_iter_order() {
        let mut params = Params::new();
        params.push("b", "1");
        params.push("a", "2");

        let names: Vec<_> = params.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_params_clear() {
        let mut params = Params::new();
        params.push("a", "1");
        params.clear();
        assert!(params.is_empty());
    }

    #[test]
    fn test_params_from_iterator_groups_names() {
        let pairs = vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "3".to_string()),
        ];

        let params: Params = pairs.into_iter().collect();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("a"), Some("3"));
        assert_eq!(params.get("b"), Some("2"));
    }

    #[test]
    fn test_params_many_params() {
        let mut params = Params::new();
        for i in 0..10 {
            params.push(format!("key{i}"), format!("value{i}"));
        }

        assert_eq!(params.len(), 10);
        assert_eq!(params.get("key5"), Some("value5"));
    }
}
