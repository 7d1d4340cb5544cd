//! Core `RequestBuilder` structure and base functionality.
//!
//! The builder owns one mutable [`HttpRequest`] descriptor for its whole
//! lifetime. Every chained call mutates that descriptor in place and returns
//! `&mut Self`, so a chain never copies state: two references to one builder
//! alias the same descriptor. Exactly one logical owner should drive a
//! builder's chain at a time; in-flight dispatches read the snapshot taken at
//! submission and are unaffected by later chaining.

use std::fmt;
use std::sync::Arc;

use http::Method;
use url::Url;

use courier_client::codec::{Codec, JsonCodec};
use courier_client::error::HttpError;
use courier_client::request::HttpRequest;
use courier_client::transport::{self, Transport};
use courier_client::url::compose_url;

/// Policy for decode failures in structured dispatch modes.
///
/// `Lenient` swallows the failure: the completion receives no structured
/// value alongside the response metadata. `Strict` surfaces a
/// [`HttpError::Decode`] through the completion's error slot, metadata still
/// attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    #[default]
    Lenient,
    Strict,
}

/// Fluent builder for one HTTP request chain.
pub struct RequestBuilder {
    base: Option<Url>,
    pub(crate) request: HttpRequest,
    pub(crate) transport: Option<Arc<dyn Transport>>,
    pub(crate) codec: Arc<dyn Codec>,
    pub(crate) decode_policy: DecodePolicy,
    pub(crate) debug_enabled: bool,
}

impl RequestBuilder {
    /// Start a builder with no base URL and an unresolved descriptor.
    ///
    /// A verb constructor or [`route`](Self::route) call must run before any
    /// dispatch; every path passed to `route` must then be absolute.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: None,
            request: HttpRequest::new(),
            transport: None,
            codec: Arc::new(JsonCodec),
            decode_policy: DecodePolicy::default(),
            debug_enabled: false,
        }
    }

    /// Start a builder with a base URL that relative routes compose against.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] when the base does not parse as
    /// an absolute URL.
    pub fn with_base(base: impl AsRef<str>) -> Result<Self, HttpError> {
        let base = base.as_ref();
        let parsed = Url::parse(base)
            .map_err(|e| HttpError::configuration(format!("invalid base URL {base:?}: {e}")))?;
        let mut builder = Self::new();
        builder.base = Some(parsed);
        Ok(builder)
    }

    /// Start a builder with a base URL and a set of default headers.
    ///
    /// The headers are seeded into the descriptor immediately and survive
    /// every later `route` call; chained `header` calls overwrite them
    /// per-name.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] when the base does not parse.
    pub fn with_base_and_headers<I, K, V>(
        base: impl AsRef<str>,
        headers: I,
    ) -> Result<Self, HttpError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut builder = Self::with_base(base)?;
        builder.headers(headers);
        Ok(builder)
    }

    /// Resolve the descriptor's method and URL, composing `path` against the
    /// base when one is set.
    ///
    /// Re-invoking `route` on a builder overwrites the method and URL and
    /// leaves previously set headers and body untouched, so one builder can
    /// issue several requests against different routes.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] when the path is relative and no
    /// base is set, or the composed URL does not parse.
    pub fn route(&mut self, method: Method, path: &str) -> Result<&mut Self, HttpError> {
        let url = compose_url(self.base.as_ref(), path)?;
        self.request.set_route(method, url);
        Ok(self)
    }

    /// Replace the transport this builder dispatches through.
    ///
    /// Without this call the process-wide shared transport is used.
    pub fn transport(&mut self, transport: Arc<dyn Transport>) -> &mut Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the structured-value codec.
    pub fn codec(&mut self, codec: Arc<dyn Codec>) -> &mut Self {
        self.codec = codec;
        self
    }

    /// Choose how decode failures are reported in structured dispatch modes.
    pub fn decode_policy(&mut self, policy: DecodePolicy) -> &mut Self {
        self.decode_policy = policy;
        self
    }

    /// Enable debug logging for dispatches from this builder.
    pub fn debug(&mut self) -> &mut Self {
        self.debug_enabled = true;
        self
    }

    /// Read access to the accumulated descriptor.
    pub fn descriptor(&self) -> &HttpRequest {
        &self.request
    }

    pub(crate) fn transport_handle(&self) -> Arc<dyn Transport> {
        match &self.transport {
            Some(transport) => Arc::clone(transport),
            None => transport::shared(),
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("base", &self.base)
            .field("request", &self.request)
            .field("transport", &self.transport.is_some())
            .field("decode_policy", &self.decode_policy)
            .field("debug_enabled", &self.debug_enabled)
            .finish()
    }
}
