//! Parameter validation errors.
//!
//! Binding never surfaces a [`ParamError`] on its own: every failure of a
//! request is collected into a [`CompositeValidationError`] that keeps the
//! order in which the operation declares its parameters.
//!
//! # Example
//!
//! ```
//! use configsvc_core::{CompositeValidationError, ParamError, ParamLocation};
//! use http::StatusCode;
//!
//! let errors = vec![
//!     ParamError::required("limit", ParamLocation::Query),
//!     ParamError::invalid_type("page", ParamLocation::Query, "integer", "two"),
//! ];
//!
//! let composite = CompositeValidationError::from_errors(errors).unwrap();
//! assert_eq!(composite.len(), 2);
//! assert_eq!(composite.names().collect::<Vec<_>>(), vec!["limit", "page"]);
//! assert_eq!(composite.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
//! ```

use crate::ParamLocation;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which declared constraint a parameter violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamErrorKind {
    /// Required value is missing.
    Required,
    /// Raw value could not be converted to the declared type.
    InvalidType,
    /// Value does not match the declared regular expression.
    Pattern,
    /// Value is not one of the declared enumeration members.
    Enum,
    /// Value is shorter than the declared minimum length.
    MinLength,
    /// Value is longer than the declared maximum length.
    MaxLength,
    /// Value is below the declared minimum.
    Minimum,
    /// Value is above the declared maximum.
    Maximum,
    /// Value does not satisfy the declared string format.
    Format,
}

impl ParamErrorKind {
    /// Machine-readable code used in error envelopes.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Required => "MISSING_PARAMETER",
            Self::InvalidType => "INVALID_PARAMETER",
            Self::Pattern => "PATTERN_MISMATCH",
            Self::Enum => "ENUM_MISMATCH",
            Self::MinLength => "TOO_SHORT",
            Self::MaxLength => "TOO_LONG",
            Self::Minimum => "BELOW_MINIMUM",
            Self::Maximum => "ABOVE_MAXIMUM",
            Self::Format => "INVALID_FORMAT",
        }
    }
}

/// A single parameter that failed binding or validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParamError {
    name: String,
    location: ParamLocation,
    kind: ParamErrorKind,
    value: Option<String>,
    message: String,
}

impl ParamError {
    fn new(
        name: impl Into<String>,
        location: ParamLocation,
        kind: ParamErrorKind,
        value: Option<String>,
        message: String,
    ) -> Self {
        Self {
            name: name.into(),
            location,
            kind,
            value,
            message,
        }
    }

    /// A required parameter was not supplied.
    #[must_use]
    pub fn required(name: impl Into<String>, location: ParamLocation) -> Self {
        let name = name.into();
        let message = format!("{name} in {location} is required");
        Self::new(name, location, ParamErrorKind::Required, None, message)
    }

    /// The raw value could not be parsed as `type_name`.
    #[must_use]
    pub fn invalid_type(
        name: impl Into<String>,
        location: ParamLocation,
        type_name: &str,
        value: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let value = value.into();
        let message = format!("{name} in {location} must be of type {type_name}: {value:?}");
        Self::new(
            name,
            location,
            ParamErrorKind::InvalidType,
            Some(value),
            message,
        )
    }

    /// The value is not a valid instance of the named string format.
    #[must_use]
    pub fn invalid_format(
        name: impl Into<String>,
        location: ParamLocation,
        format: &str,
        value: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let value = value.into();
        let message = format!("{name} in {location} must be of type {format}: {value:?}");
        Self::new(name, location, ParamErrorKind::Format, Some(value), message)
    }

    /// The value does not match `pattern`.
    #[must_use]
    pub fn pattern(
        name: impl Into<String>,
        location: ParamLocation,
        pattern: &str,
        value: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let message = format!("{name} in {location} should match '{pattern}'");
        Self::new(
            name,
            location,
            ParamErrorKind::Pattern,
            Some(value.into()),
            message,
        )
    }

    /// The value is not one of `allowed`.
    #[must_use]
    pub fn enum_mismatch<S: AsRef<str>>(
        name: impl Into<String>,
        location: ParamLocation,
        allowed: &[S],
        value: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let allowed = allowed
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        let message = format!("{name} in {location} should be one of [{allowed}]");
        Self::new(
            name,
            location,
            ParamErrorKind::Enum,
            Some(value.into()),
            message,
        )
    }

    /// The value has fewer than `min` characters.
    #[must_use]
    pub fn too_short(
        name: impl Into<String>,
        location: ParamLocation,
        min: usize,
        value: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let message = format!("{name} in {location} should be at least {min} chars long");
        Self::new(
            name,
            location,
            ParamErrorKind::MinLength,
            Some(value.into()),
            message,
        )
    }

    /// The value has more than `max` characters.
    #[must_use]
    pub fn too_long(
        name: impl Into<String>,
        location: ParamLocation,
        max: usize,
        value: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let message = format!("{name} in {location} should be at most {max} chars long");
        Self::new(
            name,
            location,
            ParamErrorKind::MaxLength,
            Some(value.into()),
            message,
        )
    }

    /// The numeric value is below `min`.
    #[must_use]
    pub fn below_minimum(
        name: impl Into<String>,
        location: ParamLocation,
        min: f64,
        value: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let message = format!("{name} in {location} should be greater than or equal to {min}");
        Self::new(
            name,
            location,
            ParamErrorKind::Minimum,
            Some(value.into()),
            message,
        )
    }

    /// The numeric value is above `max`.
    #[must_use]
    pub fn above_maximum(
        name: impl Into<String>,
        location: ParamLocation,
        max: f64,
        value: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let message = format!("{name} in {location} should be less than or equal to {max}");
        Self::new(
            name,
            location,
            ParamErrorKind::Maximum,
            Some(value.into()),
            message,
        )
    }

    /// Returns the declared parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns where the parameter was read from.
    #[must_use]
    pub fn location(&self) -> ParamLocation {
        self.location
    }

    /// Returns the violated constraint.
    #[must_use]
    pub fn kind(&self) -> ParamErrorKind {
        self.kind
    }

    /// Returns the offending raw value, if one was supplied.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns the human-readable reason.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the machine-readable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        self.kind.error_code()
    }

    /// Returns the HTTP status code for this error alone.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self.kind {
            ParamErrorKind::Required | ParamErrorKind::InvalidType => StatusCode::BAD_REQUEST,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Every parameter failure of one request, in declaration order.
///
/// A composite error is never empty: [`CompositeValidationError::from_errors`]
/// returns `None` when there is nothing to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeValidationError {
    errors: Vec<ParamError>,
}

impl CompositeValidationError {
    /// Wraps `errors`, or returns `None` if the list is empty.
    #[must_use]
    pub fn from_errors(errors: Vec<ParamError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// Returns the wrapped errors in declaration order.
    #[must_use]
    pub fn errors(&self) -> &[ParamError] {
        &self.errors
    }

    /// Returns the number of failed parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over the wrapped errors.
    pub fn iter(&self) -> std::slice::Iter<'_, ParamError> {
        self.errors.iter()
    }

    /// Iterates over the names of the failed parameters.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(ParamError::name)
    }

    /// Consumes the composite error and returns the wrapped errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParamError> {
        self.errors
    }

    /// Returns the HTTP status code for the whole rejection.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }

    /// Converts this error to a serializable error envelope.
    #[must_use]
    pub fn to_envelope(&self, request_id: Option<&str>) -> ErrorEnvelope {
        ErrorEnvelope {
            error: ErrorDetail {
                code: "VALIDATION_ERROR".to_string(),
                message: self.to_string(),
                violations: self
                    .errors
                    .iter()
                    .map(|e| FieldViolation {
                        name: e.name.clone(),
                        location: e.location,
                        code: e.error_code().to_string(),
                        message: e.message.clone(),
                    })
                    .collect(),
            },
            request_id: request_id.map(ToString::to_string),
        }
    }
}

impl fmt::Display for CompositeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("validation failure list:")?;
        for error in &self.errors {
            write!(f, "\n{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for CompositeValidationError {}

impl<'a> IntoIterator for &'a CompositeValidationError {
    type Item = &'a ParamError;
    type IntoIter = std::slice::Iter<'a, ParamError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Serializable error envelope for client rejections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// The error details.
    pub error: ErrorDetail,
    /// The request ID for correlation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Error detail within an envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// One entry per failed parameter, in declaration order.
    pub violations: Vec<FieldViolation>,
}

/// One failed parameter within an [`ErrorDetail`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldViolation {
    /// Parameter name.
    pub name: String,
    /// Parameter location.
    #[serde(rename = "in")]
    pub location: ParamLocation,
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable reason.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_error() {
        let err = ParamError::required("limit", ParamLocation::Query);

        assert_eq!(err.name(), "limit");
        assert_eq!(err.location(), ParamLocation::Query);
        assert_eq!(err.kind(), ParamErrorKind::Required);
        assert_eq!(err.value(), None);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "MISSING_PARAMETER");
        assert_eq!(err.to_string(), "limit in query is required");
    }

    #[test]
    fn test_invalid_type_error() {
        let err = ParamError::invalid_type("page", ParamLocation::Query, "integer", "two");

        assert_eq!(err.kind(), ParamErrorKind::InvalidType);
        assert_eq!(err.value(), Some("two"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "page in query must be of type integer: \"two\""
        );
    }

    #[test]
    fn test_constraint_messages() {
        let pattern = ParamError::pattern("name", ParamLocation::Path, "^[a-z]+$", "ABC");
        assert_eq!(pattern.to_string(), "name in path should match '^[a-z]+$'");
        assert_eq!(pattern.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let enumeration =
            ParamError::enum_mismatch("stage", ParamLocation::Query, &["dev", "prod"], "qa");
        assert_eq!(
            enumeration.to_string(),
            "stage in query should be one of [dev prod]"
        );

        let short = ParamError::too_short("name", ParamLocation::Path, 3, "ab");
        assert_eq!(short.to_string(), "name in path should be at least 3 chars long");

        let long = ParamError::too_long("name", ParamLocation::Path, 5, "abcdefg");
        assert_eq!(long.to_string(), "name in path should be at most 5 chars long");

        let min = ParamError::below_minimum("limit", ParamLocation::Query, 1.0, "0");
        assert_eq!(
            min.to_string(),
            "limit in query should be greater than or equal to 1"
        );

        let max = ParamError::above_maximum("limit", ParamLocation::Query, 100.0, "101");
        assert_eq!(
            max.to_string(),
            "limit in query should be less than or equal to 100"
        );

        let format = ParamError::invalid_format("id", ParamLocation::Header, "uuid", "nope");
        assert_eq!(format.to_string(), "id in header must be of type uuid: \"nope\"");
        assert_eq!(format.error_code(), "INVALID_FORMAT");
    }

    #[test]
    fn test_composite_rejects_empty() {
        assert!(CompositeValidationError::from_errors(Vec::new()).is_none());
    }

    #[test]
    fn test_composite_preserves_order() {
        let composite = CompositeValidationError::from_errors(vec![
            ParamError::required("b", ParamLocation::Query),
            ParamError::required("a", ParamLocation::Query),
        ])
        .unwrap();

        assert_eq!(composite.names().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(composite.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            composite.to_string(),
            "validation failure list:\nb in query is required\na in query is required"
        );
    }

    #[test]
    fn test_envelope_serialization() {
        let composite = CompositeValidationError::from_errors(vec![ParamError::required(
            "x-token",
            ParamLocation::Header,
        )])
        .unwrap();

        let envelope = composite.to_envelope(Some("req-1"));
        let json = serde_json::to_value(&envelope).expect("serialization should work");

        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["violations"][0]["name"], "x-token");
        assert_eq!(json["error"]["violations"][0]["in"], "header");
        assert_eq!(json["error"]["violations"][0]["code"], "MISSING_PARAMETER");
        assert_eq!(json["request_id"], "req-1");
    }

    #[test]
    fn test_envelope_without_request_id() {
        let composite = CompositeValidationError::from_errors(vec![ParamError::required(
            "q",
            ParamLocation::Query,
        )])
        .unwrap();

        let json = serde_json::to_string(&composite.to_envelope(None)).unwrap();
        assert!(!json.contains("request_id"));
    }
}
