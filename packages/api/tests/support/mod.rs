//! Transport stub shared by the integration tests.

// Not every test file exercises every behavior.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use courier::{
    Bytes, HttpError, HttpResponse, PreparedRequest, Transport, TransportCallback,
    TransportOutcome,
};
use http::{HeaderMap, StatusCode, Version};

enum Behavior {
    /// Answer with a fixed status and body.
    Respond { status: u16, body: Vec<u8> },
    /// Answer 200 with the submitted request body echoed back.
    Echo,
    /// Fail every round trip with a transport error.
    Fail(String),
    /// Sleep on a separate thread before answering.
    Delayed {
        delay: Duration,
        status: u16,
        body: Vec<u8>,
    },
}

/// Records every submission and answers per the configured behavior.
pub struct StubTransport {
    behavior: Behavior,
    calls: Mutex<Vec<PreparedRequest>>,
}

impl StubTransport {
    pub fn respond(status: u16, body: &[u8]) -> Arc<Self> {
        Arc::new(Self {
            behavior: Behavior::Respond {
                status,
                body: body.to_vec(),
            },
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn echo() -> Arc<Self> {
        Arc::new(Self {
            behavior: Behavior::Echo,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn fail(message: &str) -> Arc<Self> {
        Arc::new(Self {
            behavior: Behavior::Fail(message.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn delayed(delay: Duration, status: u16, body: &[u8]) -> Arc<Self> {
        Arc::new(Self {
            behavior: Behavior::Delayed {
                delay,
                status,
                body: body.to_vec(),
            },
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<PreparedRequest> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock").len()
    }

    fn envelope(status: u16) -> HttpResponse {
        HttpResponse::new(
            StatusCode::from_u16(status).expect("stub status"),
            HeaderMap::new(),
            Version::HTTP_11,
        )
    }
}

impl Transport for StubTransport {
    fn submit(&self, request: PreparedRequest, done: TransportCallback) {
        self.calls.lock().expect("calls lock").push(request.clone());
        match &self.behavior {
            Behavior::Respond { status, body } => done(TransportOutcome::Success {
                body: Bytes::from(body.clone()),
                response: Self::envelope(*status),
            }),
            Behavior::Echo => {
                let body = request
                    .body
                    .as_ref()
                    .map(|b| b.data().clone())
                    .unwrap_or_default();
                done(TransportOutcome::Success {
                    body,
                    response: Self::envelope(200),
                });
            }
            Behavior::Fail(message) => done(TransportOutcome::Failure {
                partial: None,
                error: HttpError::transport(message.clone()),
            }),
            Behavior::Delayed {
                delay,
                status,
                body,
            } => {
                let delay = *delay;
                let status = *status;
                let body = body.clone();
                thread::spawn(move || {
                    thread::sleep(delay);
                    done(TransportOutcome::Success {
                        body: Bytes::from(body),
                        response: Self::envelope(status),
                    });
                });
            }
        }
    }
}
