//! Transport capability.
//!
//! A [`Transport`] accepts one [`PreparedRequest`] per `submit` call and
//! invokes the callback exactly once with the outcome, on whatever execution
//! context it delivers results on. The builder performs no threading of its
//! own and never blocks on a submission.

mod default;

use std::sync::Arc;

use bytes::Bytes;
use once_cell::sync::Lazy;

pub use default::HyperTransport;

use crate::error::HttpError;
use crate::request::PreparedRequest;
use crate::response::HttpResponse;

/// Result of one transport round trip.
#[derive(Debug)]
pub enum TransportOutcome {
    /// The server answered; any status counts as success at this layer.
    Success {
        body: Bytes,
        response: HttpResponse,
    },
    /// The round trip failed below the HTTP layer. `partial` carries any
    /// bytes received before the failure, for raw-mode completions.
    Failure {
        partial: Option<Bytes>,
        error: HttpError,
    },
}

/// Callback handed to [`Transport::submit`]; invoked exactly once.
pub type TransportCallback = Box<dyn FnOnce(TransportOutcome) + Send + 'static>;

/// Black-box network executor for prepared requests.
pub trait Transport: Send + Sync {
    /// Start the request and arrange for `done` to be invoked exactly once.
    /// Must not block the caller.
    fn submit(&self, request: PreparedRequest, done: TransportCallback);
}

static SHARED: Lazy<Arc<HyperTransport>> = Lazy::new(|| {
    match HyperTransport::new() {
        Ok(transport) => Arc::new(transport),
        // Nowhere to propagate from static init; mirrors runtime-bootstrap
        // failure being fatal for the process.
        Err(e) => panic!("shared transport failed to start: {e}"),
    }
});

/// Process-wide default transport, started on first use.
pub fn shared() -> Arc<dyn Transport> {
    SHARED.clone() as Arc<dyn Transport>
}
