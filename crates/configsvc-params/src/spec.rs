//! Declarative parameter tables.
//!
//! Each API operation is described by an [`OperationSpec`]: its ID, route and
//! the ordered list of [`ParamSpec`]s it accepts. The order of that list is the
//! order parameters are bound in, and therefore the order of any errors.
//!
//! # Example
//!
//! ```
//! use configsvc_params::{OperationSpec, ParamSpec, ParamType};
//! use http::Method;
//!
//! let spec = OperationSpec::builder("getServiceResources")
//!     .method(Method::GET)
//!     .path("/project/{projectName}/service/{serviceName}/resource")
//!     .param(ParamSpec::path("projectName").string().required())
//!     .param(ParamSpec::path("serviceName").string().required())
//!     .param(
//!         ParamSpec::query("pageSize")
//!             .integer()
//!             .minimum(1.0)
//!             .maximum(50.0)
//!             .default_value("20"),
//!     )
//!     .build();
//!
//! assert_eq!(spec.params().len(), 3);
//! assert_eq!(spec.param("pageSize").unwrap().param_type(), ParamType::Integer);
//! ```

use configsvc_core::ParamLocation;
use http::Method;
use regex::Regex;
use std::fmt;

/// Declared type of a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParamType {
    /// Plain string, bound as-is.
    #[default]
    String,
    /// 64-bit signed integer.
    Integer,
    /// Finite 64-bit float.
    Number,
    /// Boolean.
    Boolean,
}

impl ParamType {
    /// Returns the type name used in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value constraints of one parameter.
///
/// Length and pattern constraints apply to string parameters, bounds to
/// numeric ones; format and enumeration are checked against the raw value.
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    /// Named format from the route's format registry.
    pub format: Option<String>,
    /// Regular expression string values must match.
    pub pattern: Option<Regex>,
    /// Allowed raw values (empty if unconstrained).
    pub enum_values: Vec<String>,
    /// Minimum string length, in characters.
    pub min_length: Option<usize>,
    /// Maximum string length, in characters.
    pub max_length: Option<usize>,
    /// Inclusive lower bound for numeric values.
    pub minimum: Option<f64>,
    /// Inclusive upper bound for numeric values.
    pub maximum: Option<f64>,
}

impl Constraints {
    /// Returns true if no constraint is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.format.is_none()
            && self.pattern.is_none()
            && self.enum_values.is_empty()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.minimum.is_none()
            && self.maximum.is_none()
    }
}

/// Declaration of one operation parameter.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    name: String,
    location: ParamLocation,
    param_type: ParamType,
    required: bool,
    description: Option<String>,
    default: Option<String>,
    constraints: Constraints,
}

impl ParamSpec {
    fn new(name: impl Into<String>, location: ParamLocation) -> Self {
        Self {
            name: name.into(),
            location,
            param_type: ParamType::String,
            required: false,
            description: None,
            default: None,
            constraints: Constraints::default(),
        }
    }

    /// Declares a path parameter.
    #[must_use]
    pub fn path(name: impl Into<String>) -> Self {
        Self::new(name, ParamLocation::Path)
    }

    /// Declares a query string parameter.
    #[must_use]
    pub fn query(name: impl Into<String>) -> Self {
        Self::new(name, ParamLocation::Query)
    }

    /// Declares a header parameter.
    #[must_use]
    pub fn header(name: impl Into<String>) -> Self {
        Self::new(name, ParamLocation::Header)
    }

    /// Sets the value type.
    #[must_use]
    pub fn of_type(mut self, param_type: ParamType) -> Self {
        self.param_type = param_type;
        self
    }

    /// Shorthand for `of_type(ParamType::String)`.
    #[must_use]
    pub fn string(self) -> Self {
        self.of_type(ParamType::String)
    }

    /// Shorthand for `of_type(ParamType::Integer)`.
    #[must_use]
    pub fn integer(self) -> Self {
        self.of_type(ParamType::Integer)
    }

    /// Shorthand for `of_type(ParamType::Number)`.
    #[must_use]
    pub fn number(self) -> Self {
        self.of_type(ParamType::Number)
    }

    /// Shorthand for `of_type(ParamType::Boolean)`.
    #[must_use]
    pub fn boolean(self) -> Self {
        self.of_type(ParamType::Boolean)
    }

    /// Marks the parameter as required.
    ///
    /// Path parameters are required by construction of the route; for them
    /// this flag is informational and no missing-value error is raised.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets a human-readable description.
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Requires the raw value to satisfy a named format from the route's registry.
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.constraints.format = Some(format.into());
        self
    }

    /// Raw value used when an optional query or header parameter is absent.
    #[must_use]
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Requires string values to match `pattern`.
    #[must_use]
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.constraints.pattern = Some(pattern);
        self
    }

    /// Restricts raw values to the given members.
    #[must_use]
    pub fn enum_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints.enum_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Minimum string length, in characters.
    #[must_use]
    pub fn min_length(mut self, min: usize) -> Self {
        self.constraints.min_length = Some(min);
        self
    }

    /// Maximum string length, in characters.
    #[must_use]
    pub fn max_length(mut self, max: usize) -> Self {
        self.constraints.max_length = Some(max);
        self
    }

    /// Inclusive lower bound for numeric values.
    #[must_use]
    pub fn minimum(mut self, min: f64) -> Self {
        self.constraints.minimum = Some(min);
        self
    }

    /// Inclusive upper bound for numeric values.
    #[must_use]
    pub fn maximum(mut self, max: f64) -> Self {
        self.constraints.maximum = Some(max);
        self
    }

    /// Returns the parameter name (the route, query or header key).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns where the parameter is read from.
    #[must_use]
    pub fn location(&self) -> ParamLocation {
        self.location
    }

    /// Returns the declared value type.
    #[must_use]
    pub fn param_type(&self) -> ParamType {
        self.param_type
    }

    /// Returns true if the parameter is declared required.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the declared default raw value, if any.
    #[must_use]
    pub fn default_raw(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Returns the declared value constraints.
    #[must_use]
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }
}

/// Declaration of one API operation and its ordered parameters.
#[derive(Debug, Clone)]
pub struct OperationSpec {
    operation_id: String,
    method: Method,
    path: String,
    params: Vec<ParamSpec>,
}

impl OperationSpec {
    /// Creates a new operation builder.
    #[must_use]
    pub fn builder(operation_id: impl Into<String>) -> OperationSpecBuilder {
        OperationSpecBuilder::new(operation_id)
    }

    /// Returns the operation ID.
    #[must_use]
    pub fn operation_id(&self) -> &str {
        &self.operation_id
    }

    /// Returns the HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the route path template.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the parameters in declaration order.
    #[must_use]
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// Looks up a parameter by name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }
}

/// Builder for [`OperationSpec`].
#[derive(Debug)]
pub struct OperationSpecBuilder {
    operation_id: String,
    method: Method,
    path: String,
    params: Vec<ParamSpec>,
}

impl OperationSpecBuilder {
    /// Creates a builder for a `GET /` operation with no parameters.
    #[must_use]
    pub fn new(operation_id: impl Into<String>) -> Self {
        Self {
            operation_id: operation_id.into(),
            method: Method::GET,
            path: "/".to_string(),
            params: Vec::new(),
        }
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Sets the route path template.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Appends a parameter; binding follows the order of these calls.
    #[must_use]
    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// Builds the operation spec.
    #[must_use]
    pub fn build(self) -> OperationSpec {
        OperationSpec {
            operation_id: self.operation_id,
            method: self.method,
            path: self.path,
            params: self.params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_spec_defaults() {
        let param = ParamSpec::path("projectName");

        assert_eq!(param.name(), "projectName");
        assert_eq!(param.location(), ParamLocation::Path);
        assert_eq!(param.param_type(), ParamType::String);
        assert!(!param.is_required());
        assert!(param.constraints().is_empty());
        assert_eq!(param.default_raw(), None);
    }

    #[test]
    fn test_param_spec_builder() {
        let param = ParamSpec::query("pageSize")
            .integer()
            .required()
            .describe("Number of items per page")
            .minimum(1.0)
            .maximum(50.0)
            .default_value("20");

        assert_eq!(param.location(), ParamLocation::Query);
        assert_eq!(param.param_type(), ParamType::Integer);
        assert!(param.is_required());
        assert!(!param.constraints().is_empty());
        assert_eq!(param.description(), Some("Number of items per page"));
        assert_eq!(param.constraints().minimum, Some(1.0));
        assert_eq!(param.constraints().maximum, Some(50.0));
        assert_eq!(param.default_raw(), Some("20"));
    }

    #[test]
    fn test_string_constraints() {
        let param = ParamSpec::header("x-keptn-stage")
            .pattern(Regex::new("^[a-z-]+$").unwrap())
            .enum_values(["dev", "staging", "production"])
            .min_length(2)
            .max_length(20)
            .format("hostname");

        let constraints = param.constraints();
        assert_eq!(constraints.pattern.as_ref().unwrap().as_str(), "^[a-z-]+$");
        assert_eq!(constraints.enum_values, ["dev", "staging", "production"]);
        assert_eq!(constraints.min_length, Some(2));
        assert_eq!(constraints.max_length, Some(20));
        assert_eq!(constraints.format.as_deref(), Some("hostname"));
    }

    #[test]
    fn test_operation_spec_preserves_order() {
        let spec = OperationSpec::builder("listThings")
            .method(Method::POST)
            .path("/things")
            .param(ParamSpec::query("b"))
            .param(ParamSpec::query("a"))
            .build();

        assert_eq!(spec.operation_id(), "listThings");
        assert_eq!(spec.method(), &Method::POST);
        assert_eq!(spec.path(), "/things");
        let names: Vec<_> = spec.params().iter().map(ParamSpec::name).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert!(spec.param("a").is_some());
        assert!(spec.param("c").is_none());
    }

    #[test]
    fn test_builder_defaults() {
        let spec = OperationSpecBuilder::new("ping").build();
        assert_eq!(spec.method(), &Method::GET);
        assert_eq!(spec.path(), "/");
        assert!(spec.params().is_empty());
    }

    #[test]
    fn test_param_type_display() {
        assert_eq!(ParamType::String.to_string(), "string");
        assert_eq!(ParamType::Integer.to_string(), "integer");
        assert_eq!(ParamType::Number.to_string(), "number");
        assert_eq!(ParamType::Boolean.to_string(), "boolean");
    }
}
