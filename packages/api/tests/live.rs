//! End-to-end tests against a localhost server using the default
//! hyper-backed transport.

use std::net::SocketAddr;
use std::sync::mpsc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::{Json, Router};
use courier::{Method, RequestBuilder, StatusCode};

const WAIT: Duration = Duration::from_secs(5);

fn spawn_server(runtime: &tokio::runtime::Runtime) -> SocketAddr {
    let (addr_tx, addr_rx) = mpsc::channel();
    runtime.spawn(async move {
        let app = Router::new()
            .route(
                "/users/1",
                get(|| async { Json(serde_json::json!({"id": 1, "name": "ada"})) }),
            )
            .route(
                "/echo",
                post(|body: axum::body::Bytes| async move { body }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        addr_tx
            .send(listener.local_addr().expect("local addr"))
            .expect("addr send");
        axum::serve(listener, app).await.expect("serve");
    });
    addr_rx.recv_timeout(WAIT).expect("server address")
}

#[test]
fn get_decodes_json_over_the_default_transport() {
    env_logger::try_init().ok();
    let runtime = tokio::runtime::Runtime::new().expect("runtime");
    let addr = spawn_server(&runtime);

    let (tx, rx) = mpsc::channel();
    RequestBuilder::with_base(format!("http://{addr}"))
        .expect("base")
        .route(Method::GET, "users/1")
        .expect("route")
        .send(move |value, response, error| {
            tx.send((value, response.map(|r| r.status()), error))
                .expect("completion send");
        })
        .expect("send");

    let (value, status, error) = rx.recv_timeout(WAIT).expect("completion");
    assert!(error.is_none(), "unexpected error: {error:?}");
    assert_eq!(status, Some(StatusCode::OK));
    assert_eq!(value.expect("value")["name"], "ada");
}

#[test]
fn post_echo_round_trips_raw_bytes() {
    let runtime = tokio::runtime::Runtime::new().expect("runtime");
    let addr = spawn_server(&runtime);

    let (tx, rx) = mpsc::channel();
    RequestBuilder::post(format!("http://{addr}/echo"))
        .expect("post")
        .body(&b"ping"[..], "application/octet-stream")
        .send_raw(move |bytes, response, error| {
            tx.send((bytes, response.map(|r| r.status()), error))
                .expect("completion send");
        })
        .expect("send_raw");

    let (bytes, status, error) = rx.recv_timeout(WAIT).expect("completion");
    assert!(error.is_none(), "unexpected error: {error:?}");
    assert_eq!(status, Some(StatusCode::OK));
    assert_eq!(bytes.expect("bytes").as_ref(), b"ping");
}

#[test]
fn get_then_factory_dispatches_immediately() {
    let runtime = tokio::runtime::Runtime::new().expect("runtime");
    let addr = spawn_server(&runtime);

    let (tx, rx) = mpsc::channel();
    RequestBuilder::get_then(format!("http://{addr}/users/1"), move |value, _, error| {
        tx.send((value, error)).expect("completion send");
    })
    .expect("get_then");

    let (value, error) = rx.recv_timeout(WAIT).expect("completion");
    assert!(error.is_none(), "unexpected error: {error:?}");
    assert_eq!(value.expect("value")["id"], 1);
}

#[test]
fn connection_refused_surfaces_as_a_transport_error() {
    // Port 1 on localhost is almost certainly closed.
    let (tx, rx) = mpsc::channel();
    RequestBuilder::get("http://127.0.0.1:1/nothing")
        .expect("get")
        .send(move |value, response, error| {
            tx.send((value.is_some(), response.is_some(), error))
                .expect("completion send");
        })
        .expect("send");

    let (has_value, has_response, error) = rx.recv_timeout(WAIT).expect("completion");
    assert!(!has_value);
    assert!(!has_response);
    assert!(error.expect("error").is_transport());
}
