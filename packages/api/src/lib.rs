//! # courier
//!
//! Fluent builder for issuing HTTP requests and dispatching asynchronous
//! callbacks with the parsed result. A caller accumulates method, URL,
//! headers and body through chained calls, then fires the request and
//! receives a decoded structured payload, raw bytes, or an error through a
//! completion invoked exactly once.
//!
//! ```no_run
//! use courier::{Method, RequestBuilder};
//!
//! let mut api = RequestBuilder::with_base_and_headers(
//!     "https://api.example.com",
//!     [("authorization", "Bearer token")],
//! )?;
//! api.route(Method::GET, "users/1")?.send(|value, _response, _error| {
//!     if let Some(user) = value {
//!         println!("{user}");
//!     }
//! })?;
//! # Ok::<(), courier::HttpError>(())
//! ```
//!
//! Completions run on the transport's delivery context; a builder is
//! single-owner and chained mutations after a dispatch never affect the
//! request already in flight.

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod builder;

pub use builder::{DecodePolicy, RequestBuilder};

// Re-export the model layer alongside the fluent surface.
pub use courier_client::{
    compose_url, Codec, HttpError, HttpRequest, HttpResponse, HyperTransport, JsonCodec,
    PreparedRequest, RequestBody, Transport, TransportCallback, TransportOutcome,
};

// Wire types callers need to name.
pub use bytes::Bytes;
pub use http::{Method, StatusCode};
pub use serde_json::Value;

/// Builder resolved to `GET url`; shorthand for [`RequestBuilder::get`].
///
/// # Errors
///
/// Returns [`HttpError::Configuration`] when `url` is not absolute.
pub fn get(url: impl AsRef<str>) -> Result<RequestBuilder, HttpError> {
    RequestBuilder::get(url)
}

/// Builder resolved to `POST url`; shorthand for [`RequestBuilder::post`].
///
/// # Errors
///
/// Returns [`HttpError::Configuration`] when `url` is not absolute.
pub fn post(url: impl AsRef<str>) -> Result<RequestBuilder, HttpError> {
    RequestBuilder::post(url)
}

/// Builder resolved to `PUT url`; shorthand for [`RequestBuilder::put`].
///
/// # Errors
///
/// Returns [`HttpError::Configuration`] when `url` is not absolute.
pub fn put(url: impl AsRef<str>) -> Result<RequestBuilder, HttpError> {
    RequestBuilder::put(url)
}

/// Builder resolved to `DELETE url`; shorthand for
/// [`RequestBuilder::delete`].
///
/// # Errors
///
/// Returns [`HttpError::Configuration`] when `url` is not absolute.
pub fn delete(url: impl AsRef<str>) -> Result<RequestBuilder, HttpError> {
    RequestBuilder::delete(url)
}
