//! Request descriptor types.
//!
//! [`HttpRequest`] is the mutable descriptor a builder accumulates state
//! into: method is only resolved once a verb constructor or route call runs.
//! [`PreparedRequest`] is the immutable snapshot taken at dispatch time; an
//! in-flight request reads only its snapshot, so chaining further mutations
//! on the builder never corrupts a request already handed to the transport.

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use url::Url;

use crate::error::HttpError;

/// A request body plus the content type it was declared with.
///
/// A body never exists without its content type; [`HttpRequest::set_body`]
/// installs both or neither.
#[derive(Debug, Clone)]
pub struct RequestBody {
    data: Bytes,
    content_type: String,
}

impl RequestBody {
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Mutable request descriptor accumulated by a builder.
#[derive(Debug, Clone, Default)]
pub struct HttpRequest {
    method: Option<Method>,
    url: Option<Url>,
    headers: HeaderMap,
    body: Option<RequestBody>,
}

impl HttpRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Getters

    pub fn method(&self) -> Option<&Method> {
        self.method.as_ref()
    }

    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    // In-place mutators

    /// Overwrite method and URL, leaving headers and body untouched.
    pub fn set_route(&mut self, method: Method, url: Url) {
        self.method = Some(method);
        self.url = Some(url);
    }

    /// Set or overwrite one header. Last write wins.
    pub fn insert_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    /// Set body bytes and the content-type header atomically.
    ///
    /// If the content type is not a valid header value, neither the body nor
    /// the header is installed; there is no observable partial state.
    pub fn set_body(&mut self, data: Bytes, content_type: &str) {
        match HeaderValue::from_str(content_type) {
            Ok(value) => {
                self.headers.insert(http::header::CONTENT_TYPE, value);
                self.body = Some(RequestBody {
                    data,
                    content_type: content_type.to_string(),
                });
            }
            Err(_) => {
                log::warn!("skipping body with invalid content type {content_type:?}");
            }
        }
    }

    /// Snapshot the descriptor for submission to a transport.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] when the method or URL has not
    /// been resolved yet; a transport is never invoked for such a request.
    pub fn prepare(&self) -> Result<PreparedRequest, HttpError> {
        let method = self
            .method
            .clone()
            .ok_or_else(|| HttpError::configuration("no method set; call route() or a verb constructor first"))?;
        let url = self
            .url
            .clone()
            .ok_or_else(|| HttpError::configuration("no URL resolved; call route() or a verb constructor first"))?;
        Ok(PreparedRequest {
            method,
            url,
            headers: self.headers.clone(),
            body: self.body.clone(),
        })
    }
}

/// Immutable snapshot of a descriptor, captured at dispatch time.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<RequestBody>,
}
