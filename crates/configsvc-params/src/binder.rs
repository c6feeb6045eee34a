//! Generic parameter binding.
//!
//! [`bind_operation`] walks an [`OperationSpec`] in declaration order and
//! binds every parameter from the request and its route match. A failing
//! parameter never stops the walk: its error is recorded, the parameter gets
//! its type's zero value, and the next parameter is attempted. Callers see
//! every problem of a request in one pass.
//!
//! Per parameter:
//!
//! 1. Look up raw values by location and take the **last** one (`""` if none).
//!    A last header value that is not visible ASCII is an invalid-type error,
//!    never treated as absent.
//! 2. Path parameters are required by construction of the route, so an empty
//!    or absent value binds as `""` without error. Required query and header
//!    parameters must be present and non-empty.
//! 3. Absent optional query and header parameters take their declared default,
//!    or the zero value without further validation.
//! 4. Convert to the declared type, then check constraints in order: format,
//!    enumeration, length, pattern, bounds. The first violation is the
//!    parameter's error.

use crate::{FromParamValue, OperationSpec, ParamSpec, ParamType, ParamValue};
use configsvc_core::{ParamError, ParamLocation, Request};
use configsvc_router::{FormatRegistry, RouteMatch};
use std::cell::OnceCell;

/// Values and errors produced by binding one operation.
#[derive(Debug, Clone, Default)]
pub struct BoundValues {
    values: Vec<(String, ParamValue)>,
    errors: Vec<ParamError>,
}

impl BoundValues {
    /// Returns the bound value of `name` converted to `T`.
    ///
    /// Parameters that failed validation hold their type's zero value.
    #[must_use]
    pub fn get<T: FromParamValue>(&self, name: &str) -> Option<T> {
        self.value(name).and_then(T::from_param_value)
    }

    /// Returns the raw bound value of `name`.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&ParamValue> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Iterates over bound names and values in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Returns the number of bound parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the operation declares no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the binding errors in declaration order.
    #[must_use]
    pub fn errors(&self) -> &[ParamError] {
        &self.errors
    }

    /// Returns true if every parameter bound without error.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consumes the values and returns the binding errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParamError> {
        self.errors
    }
}

/// Binds every parameter of `spec` from `request` and `route`.
///
/// Never fails and never short-circuits; see the module documentation for the
/// per-parameter rules.
#[must_use]
pub fn bind_operation(
    spec: &OperationSpec,
    request: &Request,
    route: &RouteMatch<'_>,
) -> BoundValues {
    let sources = Sources {
        request,
        route,
        query: OnceCell::new(),
    };

    let mut bound = BoundValues {
        values: Vec::with_capacity(spec.params().len()),
        errors: Vec::new(),
    };

    for param in spec.params() {
        let raw = sources.lookup(param);
        let value = match bind_param(param, &raw, &route.formats) {
            Ok(value) => value,
            Err(error) => {
                bound.errors.push(error);
                ParamValue::zero(param.param_type())
            }
        };
        bound.values.push((param.name().to_string(), value));
    }

    if bound.is_valid() {
        tracing::trace!(
            operation_id = spec.operation_id(),
            param_count = bound.len(),
            "Parameters bound"
        );
    } else {
        tracing::debug!(
            operation_id = spec.operation_id(),
            error_count = bound.errors.len(),
            failed = ?bound.errors.iter().map(ParamError::name).collect::<Vec<_>>(),
            "Parameter binding failed"
        );
    }

    bound
}

// Effective raw value of one parameter after the last-wins rule.
struct RawParam<'a> {
    value: &'a str,
    has_key: bool,
    // Lossy rendering of a last header value that is not visible ASCII.
    undecodable: Option<String>,
}

impl<'a> RawParam<'a> {
    fn new(value: Option<&'a str>, has_key: bool) -> Self {
        Self {
            value: value.unwrap_or_default(),
            has_key,
            undecodable: None,
        }
    }
}

struct Sources<'r, 'm> {
    request: &'r Request,
    route: &'r RouteMatch<'m>,
    query: OnceCell<Vec<(String, String)>>,
}

impl Sources<'_, '_> {
    fn lookup(&self, param: &ParamSpec) -> RawParam<'_> {
        match param.location() {
            ParamLocation::Path => {
                let lookup = self.route.params.lookup(param.name());
                RawParam::new(lookup.last(), lookup.has_key())
            }
            ParamLocation::Query => {
                let mut matching = self
                    .query_pairs()
                    .iter()
                    .filter(|(k, _)| k == param.name())
                    .peekable();
                let has_key = matching.peek().is_some();
                RawParam::new(matching.last().map(|(_, v)| v.as_str()), has_key)
            }
            ParamLocation::Header => {
                let last = self.request.headers().get_all(param.name()).iter().last();
                match last.map(|v| (v.to_str(), v.as_bytes())) {
                    None => RawParam::new(None, false),
                    Some((Ok(value), _)) => RawParam::new(Some(value), true),
                    Some((Err(_), bytes)) => RawParam {
                        undecodable: Some(String::from_utf8_lossy(bytes).into_owned()),
                        ..RawParam::new(None, true)
                    },
                }
            }
        }
    }

    fn query_pairs(&self) -> &[(String, String)] {
        self.query.get_or_init(|| {
            let query = self.request.uri().query().unwrap_or_default();
            serde_urlencoded::from_str(query).unwrap_or_else(|e| {
                tracing::debug!(error = %e, "Unparseable query string, treating as empty");
                Vec::new()
            })
        })
    }
}

fn bind_param(
    param: &ParamSpec,
    raw: &RawParam<'_>,
    formats: &FormatRegistry,
) -> Result<ParamValue, ParamError> {
    let location = param.location();

    if let Some(value) = &raw.undecodable {
        return Err(ParamError::invalid_type(
            param.name(),
            location,
            param.param_type().as_str(),
            value.as_str(),
        ));
    }

    // Path values are provided by construction from the route.
    if location != ParamLocation::Path && (!raw.has_key || raw.value.is_empty()) {
        if param.is_required() {
            return Err(ParamError::required(param.name(), location));
        }
        return match param.default_raw() {
            Some(default) => convert_and_validate(param, default, formats),
            None => Ok(ParamValue::zero(param.param_type())),
        };
    }

    convert_and_validate(param, raw.value, formats)
}

fn convert_and_validate(
    param: &ParamSpec,
    raw: &str,
    formats: &FormatRegistry,
) -> Result<ParamValue, ParamError> {
    let value = convert(param, raw)?;
    validate(param, raw, &value, formats)?;
    Ok(value)
}

fn convert(param: &ParamSpec, raw: &str) -> Result<ParamValue, ParamError> {
    let invalid = || {
        ParamError::invalid_type(
            param.name(),
            param.location(),
            param.param_type().as_str(),
            raw,
        )
    };

    match param.param_type() {
        ParamType::String => Ok(ParamValue::String(raw.to_string())),
        ParamType::Integer => raw.parse().map(ParamValue::Integer).map_err(|_| invalid()),
        ParamType::Number => raw
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(ParamValue::Number)
            .ok_or_else(invalid),
        ParamType::Boolean => parse_bool(raw).map(ParamValue::Boolean).ok_or_else(invalid),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "on" => Some(true),
        "false" | "0" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

fn validate(
    param: &ParamSpec,
    raw: &str,
    value: &ParamValue,
    formats: &FormatRegistry,
) -> Result<(), ParamError> {
    let constraints = param.constraints();
    if constraints.is_empty() {
        return Ok(());
    }

    let name = param.name();
    let location = param.location();

    if let Some(format) = constraints.format.as_deref() {
        match formats.validate(format, raw) {
            Some(true) => {}
            Some(false) => return Err(ParamError::invalid_format(name, location, format, raw)),
            None => tracing::debug!(
                param = name,
                format,
                "Unknown parameter format, skipping format validation"
            ),
        }
    }

    if !constraints.enum_values.is_empty() && !constraints.enum_values.iter().any(|v| v == raw) {
        return Err(ParamError::enum_mismatch(
            name,
            location,
            constraints.enum_values.as_slice(),
            raw,
        ));
    }

    if let ParamValue::String(s) = value {
        let len = s.chars().count();
        if let Some(min) = constraints.min_length {
            if len < min {
                return Err(ParamError::too_short(name, location, min, raw));
            }
        }
        if let Some(max) = constraints.max_length {
            if len > max {
                return Err(ParamError::too_long(name, location, max, raw));
            }
        }
        if let Some(pattern) = &constraints.pattern {
            if !pattern.is_match(s) {
                return Err(ParamError::pattern(name, location, pattern.as_str(), raw));
            }
        }
    }

    if let Some(n) = value.as_f64() {
        if let Some(min) = constraints.minimum {
            if n < min {
                return Err(ParamError::below_minimum(name, location, min, raw));
            }
        }
        if let Some(max) = constraints.maximum {
            if n > max {
                return Err(ParamError::above_maximum(name, location, max, raw));
            }
        }
    }

    Ok(())
}
