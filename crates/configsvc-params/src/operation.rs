//! Operation parameter objects.
//!
//! Every API operation has a parameter struct implementing [`OperationParams`].
//! The struct only declares its table and how to read its fields out of
//! [`BoundValues`]; the binding itself is shared.

use crate::{bind_operation, BoundValues, OperationSpec};
use configsvc_core::{CompositeValidationError, ParamError, Request};
use configsvc_router::RouteMatch;
use std::sync::Arc;

/// Outcome of binding one operation's parameters.
///
/// The parameter object is always built, even when some parameters failed,
/// so that the request handle and every successfully bound field remain
/// available. Use [`Bound::into_result`] to enforce validity.
#[derive(Debug, Clone)]
pub struct Bound<P> {
    params: P,
    errors: Vec<ParamError>,
}

impl<P> Bound<P> {
    /// Creates a binding outcome.
    #[must_use]
    pub fn new(params: P, errors: Vec<ParamError>) -> Self {
        Self { params, errors }
    }

    /// Returns the parameter object.
    #[must_use]
    pub fn params(&self) -> &P {
        &self.params
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

    /// Returns the parameter object, or every error wrapped in one composite error.
    ///
    /// # Errors
    ///
    /// Returns a [`CompositeValidationError`] if any parameter failed.
    pub fn into_result(self) -> Result<P, CompositeValidationError> {
        match CompositeValidationError::from_errors(self.errors) {
            Some(error) => Err(error),
            None => Ok(self.params),
        }
    }
}

/// Parameters of one API operation.
///
/// # Example
///
/// ```
/// use configsvc_core::Request;
/// use configsvc_params::{BoundValues, OperationParams, OperationSpec, ParamSpec};
/// use configsvc_router::{Params, RouteMatch};
/// use std::sync::{Arc, OnceLock};
///
/// struct GetProjectParams {
///     project_name: String,
/// }
///
/// impl OperationParams for GetProjectParams {
///     fn spec() -> &'static OperationSpec {
///         static SPEC: OnceLock<OperationSpec> = OnceLock::new();
///         SPEC.get_or_init(|| {
///             OperationSpec::builder("getProject")
///                 .path("/project/{projectName}")
///                 .param(ParamSpec::path("projectName").required())
///                 .build()
///         })
///     }
///
///     fn from_bound(_request: Arc<Request>, values: &BoundValues) -> Self {
///         Self {
///             project_name: values.get("projectName").unwrap_or_default(),
///         }
///     }
/// }
///
/// let mut params = Params::new();
/// params.push("projectName", "sockshop");
/// let route = RouteMatch::new("getProject", params);
/// let request = Arc::new(http::Request::new(Default::default()));
///
/// let bound = GetProjectParams::bind_request(request, &route).unwrap();
/// assert_eq!(bound.project_name, "sockshop");
/// ```
pub trait OperationParams: Sized {
    /// Returns the operation's declarative parameter table.
    fn spec() -> &'static OperationSpec;

    /// Builds the parameter object from bound values.
    ///
    /// Called for failed bindings too; failed parameters hold their type's
    /// zero value.
    fn from_bound(request: Arc<Request>, values: &BoundValues) -> Self;

    /// Binds every declared parameter, keeping the object and all errors.
    fn bind(request: Arc<Request>, route: &RouteMatch<'_>) -> Bound<Self> {
        let values = bind_operation(Self::spec(), &request, route);
        let params = Self::from_bound(request, &values);
        Bound::new(params, values.into_errors())
    }

    /// Binds every declared parameter and fails with all errors at once.
    ///
    /// # Errors
    ///
    /// Returns a [`CompositeValidationError`] listing every failed parameter
    /// in declaration order.
    fn bind_request(
        request: Arc<Request>,
        route: &RouteMatch<'_>,
    ) -> Result<Self, CompositeValidationError> {
        Self::bind(request, route).into_result()
    }
}
