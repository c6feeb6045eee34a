//! Parameters of the service operations.

use crate::{BoundValues, OperationParams, OperationSpec, ParamSpec};
use configsvc_core::Request;
use http::Method;
use std::sync::{Arc, OnceLock};

/// Operation ID of "get a named service within a named project".
pub const GET_SERVICE: &str = "getService";

/// Route template of [`GET_SERVICE`].
pub const GET_SERVICE_PATH: &str = "/project/{projectName}/service/{serviceName}";

const PROJECT_NAME: &str = "projectName";
const SERVICE_NAME: &str = "serviceName";

/// Bound parameters of the `getService` operation.
///
/// Both names come from path segments. The route pattern guarantees they are
/// present; no non-empty constraint is declared, so an empty segment binds as
/// an empty string.
///
/// # Example
///
/// ```
/// use configsvc_params::{operations::services::GetServiceParams, OperationParams};
/// use configsvc_router::{Params, RouteMatch};
/// use std::sync::Arc;
///
/// let mut params = Params::new();
/// params.push("projectName", "sockshop");
/// params.push("serviceName", "carts");
/// let route = RouteMatch::new("getService", params);
///
/// let request = Arc::new(
///     http::Request::get("/project/sockshop/service/carts")
///         .body(Default::default())
///         .unwrap(),
/// );
///
/// let params = GetServiceParams::bind_request(request, &route).unwrap();
/// assert_eq!(params.project_name(), "sockshop");
/// assert_eq!(params.service_name(), "carts");
/// ```
#[derive(Debug, Clone)]
pub struct GetServiceParams {
    http_request: Arc<Request>,
    project_name: String,
    service_name: String,
}

impl GetServiceParams {
    /// Returns the inbound request.
    #[must_use]
    pub fn http_request(&self) -> &Arc<Request> {
        &self.http_request
    }

    /// Name of the project.
    #[must_use]
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Name of the service.
    #[must_use]
    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}

impl OperationParams for GetServiceParams {
    fn spec() -> &'static OperationSpec {
        static SPEC: OnceLock<OperationSpec> = OnceLock::new();
        SPEC.get_or_init(|| {
            OperationSpec::builder(GET_SERVICE)
                .method(Method::GET)
                .path(GET_SERVICE_PATH)
                .param(
                    ParamSpec::path(PROJECT_NAME)
                        .string()
                        .required()
                        .describe("Name of the project"),
                )
                .param(
                    ParamSpec::path(SERVICE_NAME)
                        .string()
                        .required()
                        .describe("Name of the service"),
                )
                .build()
        })
    }

    fn from_bound(request: Arc<Request>, values: &BoundValues) -> Self {
        Self {
            http_request: request,
            project_name: values.get(PROJECT_NAME).unwrap_or_default(),
            service_name: values.get(SERVICE_NAME).unwrap_or_default(),
        }
    }
}
