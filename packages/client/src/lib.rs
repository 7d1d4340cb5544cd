//! # courier_client
//!
//! Internals for the `courier` fluent HTTP client: the mutable request
//! descriptor and its dispatch-time snapshot, the response envelope, the
//! error taxonomy, the structured-value codec seam, URL composition, and the
//! transport capability with its default hyper-backed implementation.
//!
//! The public fluent surface lives in the `courier` crate; this crate is the
//! model layer it drives.

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod codec;
pub mod error;
pub mod request;
pub mod response;
pub mod transport;
pub mod url;

pub use codec::{Codec, JsonCodec};
pub use error::HttpError;
pub use request::{HttpRequest, PreparedRequest, RequestBody};
pub use response::HttpResponse;
pub use transport::{HyperTransport, Transport, TransportCallback, TransportOutcome};
pub use url::compose_url;
