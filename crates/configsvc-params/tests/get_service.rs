//! Integration tests for `getService` parameter binding.
//!
//! Covers the route-match scenarios of the operation itself and the
//! aggregation contract shared by every operation:
//!
//! 1. Single values bind as-is
//! 2. Missing path values bind as empty strings
//! 3. The last of several values wins
//! 4. Every failure is reported, in declaration order
//! 5. The request handle survives failed bindings

use bytes::Bytes;
use configsvc_core::{ParamErrorKind, ParamLocation, Request};
use configsvc_params::{
    operations::services::{GET_SERVICE, GET_SERVICE_PATH},
    BoundValues, GetServiceParams, OperationParams, OperationSpec, ParamSpec,
};
use configsvc_router::{Params, RouteMatch};
use http::StatusCode;
use std::sync::{Arc, OnceLock};

/// Creates a GET request for the given URI.
fn make_request(uri: &str) -> Arc<Request> {
    Arc::new(http::Request::get(uri).body(Bytes::new()).unwrap())
}

/// Creates a `getService` route match from per-name value lists.
fn make_route(project: &[&str], service: &[&str]) -> RouteMatch<'static> {
    let mut params = Params::new();
    params.insert("projectName", project.iter().copied());
    params.insert("serviceName", service.iter().copied());
    RouteMatch::new(GET_SERVICE, params)
}

// =============================================================================
// getService scenarios
// =============================================================================

#[test]
fn test_binds_single_values() {
    let request = make_request("/project/proj-1/service/svc-1");
    let route = make_route(&["proj-1"], &["svc-1"]);

    let params = GetServiceParams::bind_request(Arc::clone(&request), &route).unwrap();

    assert_eq!(params.project_name(), "proj-1");
    assert_eq!(params.service_name(), "svc-1");
    assert!(Arc::ptr_eq(params.http_request(), &request));
}

#[test]
fn test_missing_project_binds_empty() {
    let request = make_request("/project//service/svc-1");
    let route = make_route(&[], &["svc-1"]);

    let params = GetServiceParams::bind_request(request, &route).unwrap();

    assert_eq!(params.project_name(), "");
    assert_eq!(params.service_name(), "svc-1");
}

#[test]
fn test_absent_names_bind_empty() {
    let route = RouteMatch::new(GET_SERVICE, Params::new());

    let params = GetServiceParams::bind_request(make_request("/"), &route).unwrap();

    assert_eq!(params.project_name(), "");
    assert_eq!(params.service_name(), "");
}

#[test]
fn test_last_value_wins() {
    let route = make_route(&["p1", "p2"], &["s1"]);

    let params = GetServiceParams::bind_request(make_request("/"), &route).unwrap();

    assert_eq!(params.project_name(), "p2");
    assert_eq!(params.service_name(), "s1");
}

#[test]
fn test_query_and_headers_are_ignored() {
    let request = Arc::new(
        http::Request::get("/project/a/service/b?projectName=evil&serviceName=evil")
            .header("serviceName", "evil")
            .body(Bytes::new())
            .unwrap(),
    );
    let route = make_route(&["a"], &["b"]);

    let params = GetServiceParams::bind_request(request, &route).unwrap();

    assert_eq!(params.project_name(), "a");
    assert_eq!(params.service_name(), "b");
}

#[test]
fn test_binding_is_deterministic() {
    let request = make_request("/project/sockshop/service/carts");
    let route = make_route(&["sockshop"], &["carts"]);

    let first = GetServiceParams::bind(Arc::clone(&request), &route);
    let second = GetServiceParams::bind(Arc::clone(&request), &route);

    assert_eq!(
        first.params().project_name(),
        second.params().project_name()
    );
    assert_eq!(
        first.params().service_name(),
        second.params().service_name()
    );
    assert_eq!(first.errors(), second.errors());
}

#[test]
fn test_route_template() {
    let spec = GetServiceParams::spec();
    assert_eq!(spec.path(), GET_SERVICE_PATH);
    assert_eq!(
        spec.param("projectName").and_then(ParamSpec::description),
        Some("Name of the project")
    );
}

// =============================================================================
// Aggregation with a constrained table
// =============================================================================

/// Same shape as `getService`, plus constraints that can fail.
#[derive(Debug)]
struct StrictServiceParams {
    http_request: Arc<Request>,
    project_name: String,
    service_name: String,
    stage: String,
}

impl OperationParams for StrictServiceParams {
    fn spec() -> &'static OperationSpec {
        static SPEC: OnceLock<OperationSpec> = OnceLock::new();
        SPEC.get_or_init(|| {
            OperationSpec::builder("getStrictService")
                .path(GET_SERVICE_PATH)
                .param(ParamSpec::path("projectName").required().min_length(1))
                .param(ParamSpec::path("serviceName").required().max_length(8))
                .param(ParamSpec::header("x-stage").required())
                .build()
        })
    }

    fn from_bound(request: Arc<Request>, values: &BoundValues) -> Self {
        Self {
            http_request: request,
            project_name: values.get("projectName").unwrap_or_default(),
            service_name: values.get("serviceName").unwrap_or_default(),
            stage: values.get("x-stage").unwrap_or_default(),
        }
    }
}

#[test]
fn test_every_failure_is_reported_in_order() {
    let route = make_route(&[], &["a-very-long-service"]);

    let err = StrictServiceParams::bind_request(make_request("/"), &route).unwrap_err();

    assert_eq!(err.len(), 3);
    let kinds: Vec<_> = err.iter().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ParamErrorKind::MinLength,
            ParamErrorKind::MaxLength,
            ParamErrorKind::Required,
        ]
    );
    assert_eq!(
        err.names().collect::<Vec<_>>(),
        vec!["projectName", "serviceName", "x-stage"]
    );
    assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn test_failed_binding_is_deterministic() {
    let request = make_request("/");
    let route = make_route(&[], &["a-very-long-service"]);

    let first = StrictServiceParams::bind(Arc::clone(&request), &route);
    let second = StrictServiceParams::bind(Arc::clone(&request), &route);

    assert_eq!(first.errors().len(), 3);
    assert_eq!(first.errors(), second.errors());

    let first = first.into_result().unwrap_err();
    let second = second.into_result().unwrap_err();
    assert_eq!(first, second);
    assert_eq!(
        first.names().collect::<Vec<_>>(),
        second.names().collect::<Vec<_>>()
    );
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_request_attached_on_failure() {
    let request = make_request("/");
    let route = make_route(&[], &["carts"]);

    let bound = StrictServiceParams::bind(Arc::clone(&request), &route);

    assert!(!bound.is_valid());
    assert!(Arc::ptr_eq(&bound.params().http_request, &request));
    assert_eq!(bound.params().project_name, "");
    assert_eq!(bound.params().service_name, "carts");
    assert_eq!(bound.params().stage, "");
}

#[test]
fn test_valid_strict_binding() {
    let request = Arc::new(
        http::Request::get("/project/sockshop/service/carts")
            .header("X-Stage", "dev")
            .body(Bytes::new())
            .unwrap(),
    );
    let route = make_route(&["sockshop"], &["carts"]);

    let params = StrictServiceParams::bind_request(request, &route).unwrap();

    assert_eq!(params.project_name, "sockshop");
    assert_eq!(params.service_name, "carts");
    assert_eq!(params.stage, "dev");
}

#[test]
fn test_error_envelope_lists_violations_in_order() {
    let route = make_route(&[], &["a-very-long-service"]);
    let err = StrictServiceParams::bind_request(make_request("/"), &route).unwrap_err();

    let json = serde_json::to_value(err.to_envelope(Some("req-42"))).unwrap();

    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["request_id"], "req-42");

    let violations = json["error"]["violations"].as_array().unwrap();
    assert_eq!(violations.len(), 3);
    assert_eq!(violations[0]["name"], "projectName");
    assert_eq!(violations[0]["in"], "path");
    assert_eq!(violations[0]["code"], "TOO_SHORT");
    assert_eq!(violations[2]["name"], "x-stage");
    assert_eq!(violations[2]["in"], ParamLocation::Header.as_str());
    assert_eq!(violations[2]["code"], "MISSING_PARAMETER");
}
