//! Default transport: hyper over a dedicated runtime.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use tokio::runtime::Runtime;

use super::{Transport, TransportCallback, TransportOutcome};
use crate::error::HttpError;
use crate::request::PreparedRequest;
use crate::response::HttpResponse;

/// HTTP/1.1 transport backed by the hyper legacy client.
///
/// Owns its own tokio runtime; `submit` spawns the round trip onto it and
/// returns immediately. Speaks plain `http` only: TLS termination belongs to
/// the transport layer, and a TLS-capable implementation can be injected in
/// its place.
pub struct HyperTransport {
    runtime: Runtime,
    client: Client<HttpConnector, Full<Bytes>>,
}

impl HyperTransport {
    /// Build the transport and its runtime.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] when the runtime cannot start.
    pub fn new() -> Result<Self, HttpError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("courier-transport")
            .enable_all()
            .build()
            .map_err(|e| HttpError::transport(format!("transport runtime: {e}")))?;
        let client = Client::builder(TokioExecutor::new()).build_http();
        Ok(Self { runtime, client })
    }

    async fn round_trip(
        client: Client<HttpConnector, Full<Bytes>>,
        request: PreparedRequest,
    ) -> TransportOutcome {
        let uri = match request.url.as_str().parse::<hyper::Uri>() {
            Ok(uri) => uri,
            Err(e) => {
                return TransportOutcome::Failure {
                    partial: None,
                    error: HttpError::transport(format!("unusable request URI: {e}")),
                }
            }
        };

        let payload = request
            .body
            .as_ref()
            .map_or_else(Bytes::new, |b| b.data().clone());
        let mut outbound = match hyper::Request::builder()
            .method(request.method.clone())
            .uri(uri)
            .body(Full::new(payload))
        {
            Ok(outbound) => outbound,
            Err(e) => {
                return TransportOutcome::Failure {
                    partial: None,
                    error: HttpError::transport(format!("request assembly: {e}")),
                }
            }
        };
        outbound.headers_mut().extend(request.headers.clone());

        match client.request(outbound).await {
            Ok(inbound) => {
                let (parts, body) = inbound.into_parts();
                match body.collect().await {
                    Ok(collected) => TransportOutcome::Success {
                        body: collected.to_bytes(),
                        response: HttpResponse::new(parts.status, parts.headers, parts.version),
                    },
                    Err(e) => {
                        tracing::warn!("body read from {} failed: {e}", request.url);
                        TransportOutcome::Failure {
                            partial: None,
                            error: HttpError::transport(format!("response body: {e}")),
                        }
                    }
                }
            }
            Err(e) => {
                tracing::warn!("request to {} failed: {e}", request.url);
                TransportOutcome::Failure {
                    partial: None,
                    error: HttpError::transport(e.to_string()),
                }
            }
        }
    }
}

impl Transport for HyperTransport {
    fn submit(&self, request: PreparedRequest, done: TransportCallback) {
        let client = self.client.clone();
        self.runtime.spawn(async move {
            done(Self::round_trip(client, request).await);
        });
    }
}
