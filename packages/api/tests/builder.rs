//! Builder surface tests: construction, URL composition, mutators, and the
//! synchronous error contract.

mod support;

use courier::{HttpError, Method, RequestBuilder};
use serde::{Serialize, Serializer};
use support::StubTransport;
use url::Url;

#[test]
fn base_and_path_compose_with_exactly_one_slash() {
    for base in ["https://api.test", "https://api.test/"] {
        for path in ["users/1", "/users/1"] {
            let mut builder = RequestBuilder::with_base(base).expect("base");
            builder.route(Method::GET, path).expect("route");
            assert_eq!(
                builder.descriptor().url().map(Url::as_str),
                Some("https://api.test/users/1"),
                "base {base:?} path {path:?}"
            );
        }
    }
}

#[test]
fn absolute_path_works_without_a_base() {
    let mut builder = RequestBuilder::new();
    builder
        .route(Method::GET, "https://api.test/users")
        .expect("route");
    assert_eq!(builder.descriptor().method(), Some(&Method::GET));
    assert_eq!(
        builder.descriptor().url().map(Url::as_str),
        Some("https://api.test/users")
    );
}

#[test]
fn relative_path_without_a_base_is_rejected() {
    let mut builder = RequestBuilder::new();
    let err = builder
        .route(Method::GET, "relative/path")
        .expect_err("must fail");
    assert!(err.is_configuration());
}

#[test]
fn invalid_base_is_rejected_at_construction() {
    let err = RequestBuilder::with_base("not a url").expect_err("must fail");
    assert!(err.is_configuration());
}

#[test]
fn header_overwrite_leaves_one_value() {
    let mut builder = RequestBuilder::get("https://api.test/x").expect("get");
    builder.header("X-Tag", "1").header("X-Tag", "2");
    let headers = builder.descriptor().headers();
    assert_eq!(headers.get_all("x-tag").iter().count(), 1);
    assert_eq!(headers["x-tag"], "2");
}

#[test]
fn default_headers_survive_route_changes() {
    let mut builder =
        RequestBuilder::with_base_and_headers("https://api.test", [("x-api-key", "secret")])
            .expect("base");
    builder.route(Method::GET, "a").expect("route");
    assert_eq!(builder.descriptor().headers()["x-api-key"], "secret");

    builder.route(Method::DELETE, "b").expect("route");
    assert_eq!(builder.descriptor().method(), Some(&Method::DELETE));
    assert_eq!(
        builder.descriptor().url().map(Url::as_str),
        Some("https://api.test/b")
    );
    assert_eq!(builder.descriptor().headers()["x-api-key"], "secret");
}

#[test]
fn body_and_content_type_install_atomically() {
    let mut builder = RequestBuilder::post("https://api.test/x").expect("post");
    builder.body(&b"payload"[..], "text/plain");
    let descriptor = builder.descriptor();
    let body = descriptor.body().expect("body");
    assert_eq!(body.data().as_ref(), b"payload");
    assert_eq!(body.content_type(), "text/plain");
    assert_eq!(descriptor.headers()[http::header::CONTENT_TYPE], "text/plain");
}

#[test]
fn json_body_sets_content_type() {
    let mut builder = RequestBuilder::post("https://api.test/x").expect("post");
    builder
        .json_body(&serde_json::json!({"a": 1}))
        .expect("encode");
    let descriptor = builder.descriptor();
    assert_eq!(
        descriptor.headers()[http::header::CONTENT_TYPE],
        "application/json"
    );
    let body: serde_json::Value =
        serde_json::from_slice(descriptor.body().expect("body").data()).expect("parse");
    assert_eq!(body, serde_json::json!({"a": 1}));
}

struct Unrepresentable;

impl Serialize for Unrepresentable {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("not representable"))
    }
}

#[test]
fn encoding_failure_is_synchronous() {
    let mut builder = RequestBuilder::post("https://api.test/x").expect("post");
    let err = builder.json_body(&Unrepresentable).expect_err("must fail");
    assert!(matches!(err, HttpError::Encoding(_)));
    assert!(err.is_synchronous());
    // Nothing was installed on the descriptor.
    assert!(!builder.descriptor().has_body());
}

#[test]
fn verb_factories_resolve_method_and_url() {
    let get = RequestBuilder::get("https://api.test/a").expect("get");
    assert_eq!(get.descriptor().method(), Some(&Method::GET));

    let post = RequestBuilder::post_with_headers("https://api.test/b", [("x-a", "1")])
        .expect("post");
    assert_eq!(post.descriptor().method(), Some(&Method::POST));
    assert_eq!(post.descriptor().headers()["x-a"], "1");

    let put = RequestBuilder::put_data("https://api.test/c", &serde_json::json!({"n": 2}))
        .expect("put");
    assert_eq!(put.descriptor().method(), Some(&Method::PUT));
    assert!(put.descriptor().has_body());

    let delete = RequestBuilder::delete("https://api.test/d").expect("delete");
    assert_eq!(delete.descriptor().method(), Some(&Method::DELETE));
}

#[test]
fn factory_rejects_relative_url() {
    let err = RequestBuilder::get("users/1").expect_err("must fail");
    assert!(err.is_configuration());
}

#[test]
fn dispatch_without_route_is_a_configuration_error_and_skips_transport() {
    let stub = StubTransport::respond(200, b"{}");
    let mut builder = RequestBuilder::new();
    builder.transport(stub.clone());
    let err = builder.send(|_, _, _| {}).expect_err("must fail");
    assert!(err.is_configuration());
    assert_eq!(stub.call_count(), 0);
}
