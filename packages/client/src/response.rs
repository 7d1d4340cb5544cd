//! Response envelope.

use http::{HeaderMap, StatusCode, Version};

/// Status and header metadata for one completed dispatch.
///
/// Created fresh by the transport when a response arrives and handed to the
/// completion; the body travels separately in whichever shape the dispatch
/// mode produced. The envelope has no lifecycle beyond the completion call.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    status: StatusCode,
    headers: HeaderMap,
    version: Version,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: StatusCode, headers: HeaderMap, version: Version) -> Self {
        Self {
            status,
            headers,
            version,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Fetch a header value as text, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
