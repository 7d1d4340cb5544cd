//! Error taxonomy for request building and dispatch.
//!
//! Synchronous failures (`Configuration`, `Encoding`) are returned at the
//! call site and never reach a completion callback. Asynchronous failures
//! (`Transport`) only ever arrive through the completion's error slot.
//! `Decode` sits in between: under the default lenient policy it is swallowed
//! and the completion simply carries no structured value; under the strict
//! policy it is delivered through the error slot with response metadata
//! attached.

/// Errors produced while building or dispatching a request.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The request descriptor is incomplete or unresolvable: missing method,
    /// missing URL, an unparseable base, or a relative path with no base set.
    #[error("request configuration error: {0}")]
    Configuration(String),

    /// The value handed to the JSON body helper is not representable by the
    /// codec. A programming error, raised at the mutator call site.
    #[error("request body encoding failed: {0}")]
    Encoding(#[source] serde_json::Error),

    /// Network-level failure reported by the transport: connection refused,
    /// timeout, TLS failure and the like.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response body could not be decoded into a structured value.
    #[error("response body decoding failed: {0}")]
    Decode(#[source] serde_json::Error),
}

impl HttpError {
    pub fn configuration(message: impl Into<String>) -> Self {
        HttpError::Configuration(message.into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        HttpError::Transport(message.into())
    }

    /// True for errors raised synchronously at a builder call site.
    pub fn is_synchronous(&self) -> bool {
        matches!(self, HttpError::Configuration(_) | HttpError::Encoding(_))
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, HttpError::Configuration(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, HttpError::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, HttpError::Decode(_))
    }
}
