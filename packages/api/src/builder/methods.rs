//! Terminal dispatch operations.
//!
//! Each dispatch snapshots the descriptor, hands the snapshot to the
//! transport, and adapts the transport outcome into the typed completion.
//! Dispatch never blocks: it returns as soon as the submission is made, and
//! the completion runs exactly once, later, on the transport's delivery
//! context. The builder is returned for further chaining, so one instance
//! can re-route and dispatch again.

use bytes::Bytes;
use http::Method;
use serde_json::Value;

use courier_client::error::HttpError;
use courier_client::response::HttpResponse;
use courier_client::transport::TransportOutcome;

use crate::builder::core::{DecodePolicy, RequestBuilder};

impl RequestBuilder {
    /// Dispatch and decode the response body as a structured value.
    ///
    /// On transport failure the completion receives `(None, None, error)`.
    /// On success the body is decoded best-effort: an empty body yields no
    /// value, and a decode failure is handled per the builder's
    /// [`DecodePolicy`] (swallowed by default).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] synchronously when the
    /// descriptor has no resolved method or URL; the transport is not
    /// invoked in that case.
    pub fn send<F>(&mut self, done: F) -> Result<&mut Self, HttpError>
    where
        F: FnOnce(Option<Value>, Option<HttpResponse>, Option<HttpError>) + Send + 'static,
    {
        self.dispatch_structured(done)
    }

    /// Dispatch and parse the response body as a JSON object graph.
    ///
    /// Identical to [`send`](Self::send) with the decode path spelled out:
    /// the default codec parses JSON, and malformed bodies follow the same
    /// [`DecodePolicy`] handling.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] synchronously when the
    /// descriptor is incomplete.
    pub fn send_json<F>(&mut self, done: F) -> Result<&mut Self, HttpError>
    where
        F: FnOnce(Option<Value>, Option<HttpResponse>, Option<HttpError>) + Send + 'static,
    {
        self.dispatch_structured(done)
    }

    /// Dispatch and deliver the raw response bytes undecoded.
    ///
    /// On transport failure the completion receives any partial bytes the
    /// transport captured alongside the error; on success it receives the
    /// full body and the response envelope.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] synchronously when the
    /// descriptor is incomplete.
    pub fn send_raw<F>(&mut self, done: F) -> Result<&mut Self, HttpError>
    where
        F: FnOnce(Option<Bytes>, Option<HttpResponse>, Option<HttpError>) + Send + 'static,
    {
        let prepared = self.request.prepare()?;
        if self.debug_enabled {
            log::debug!("dispatch raw {} {}", prepared.method, prepared.url);
        }
        self.transport_handle().submit(
            prepared,
            Box::new(move |outcome| match outcome {
                TransportOutcome::Success { body, response } => {
                    done(Some(body), Some(response), None);
                }
                TransportOutcome::Failure { partial, error } => {
                    done(partial, None, Some(error));
                }
            }),
        );
        Ok(self)
    }

    /// Route and dispatch in one call on an existing builder.
    ///
    /// Reuse sugar: `call(method, path, done)` is `route(method, path)`
    /// followed by `send(done)`, keeping any headers and body already
    /// accumulated on the instance.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Configuration`] when the path cannot be
    /// resolved.
    pub fn call<F>(&mut self, method: Method, path: &str, done: F) -> Result<&mut Self, HttpError>
    where
        F: FnOnce(Option<Value>, Option<HttpResponse>, Option<HttpError>) + Send + 'static,
    {
        self.route(method, path)?.send(done)
    }

    fn dispatch_structured<F>(&mut self, done: F) -> Result<&mut Self, HttpError>
    where
        F: FnOnce(Option<Value>, Option<HttpResponse>, Option<HttpError>) + Send + 'static,
    {
        let prepared = self.request.prepare()?;
        if self.debug_enabled {
            log::debug!("dispatch {} {}", prepared.method, prepared.url);
            if let Some(body) = &prepared.body {
                log::debug!("request body: {} bytes", body.len());
            }
        }
        let codec = std::sync::Arc::clone(&self.codec);
        let policy = self.decode_policy;
        self.transport_handle().submit(
            prepared,
            Box::new(move |outcome| match outcome {
                TransportOutcome::Success { body, response } => {
                    if body.is_empty() {
                        done(None, Some(response), None);
                        return;
                    }
                    match codec.decode(&body) {
                        Ok(value) => done(Some(value), Some(response), None),
                        Err(err) => match policy {
                            DecodePolicy::Lenient => done(None, Some(response), None),
                            DecodePolicy::Strict => done(None, Some(response), Some(err)),
                        },
                    }
                }
                TransportOutcome::Failure { error, .. } => done(None, None, Some(error)),
            }),
        );
        Ok(self)
    }
}
