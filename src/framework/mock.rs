//! # Mock Transport
//!
//! Utilities for testing fetch chains without a network.
//!
//! [`MockTransport`] implements [`Transport`] entirely in memory. Responses are
//! scripted per URL with a fluent builder and every issued call is recorded, so a
//! test can assert both what the code under test saw and what it asked for.
//!
//! ```ignore
//! let mock = MockTransport::new();
//! mock.expect_get("http://sap.test/svc/ProdnOrdConf2")
//!     .return_ok(collection_body(json!([{ "OrderID": "O1" }])));
//!
//! let fetcher = ResourceFetcher::new(mock.transport(), Duration::from_secs(1));
//! // ... exercise the fetcher ...
//! mock.verify(); // every scripted response was consumed
//! ```
//!
//! Expectations are keyed by URL rather than by call order: operations run
//! concurrently, so the order in which calls arrive is not deterministic.

use crate::framework::core::{Transport, TransportResponse};
use crate::framework::error::TransportError;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted reply to one request.
enum Expectation {
    Respond { status: u16, body: Vec<u8> },
    Fail(String),
    Hang,
}

/// One request as the transport received it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
}

impl RecordedCall {
    /// The `$filter` query value, if the call carried one.
    pub fn filter(&self) -> Option<&str> {
        self.query
            .iter()
            .find(|(name, _)| name == "$filter")
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Default)]
struct MockState {
    expectations: HashMap<String, VecDeque<Expectation>>,
    calls: Vec<RecordedCall>,
}

/// An in-memory transport with expectation tracking.
///
/// Clones share state, so the handle kept by the test sees the calls made through
/// the `Arc<dyn Transport>` handed to the code under test.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    /// Creates a new mock transport with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the transport for use in tests.
    pub fn transport(&self) -> Arc<dyn Transport> {
        Arc::new(self.clone())
    }

    /// Expects a `GET` to `url`. Each call consumes one scripted reply.
    pub fn expect_get(&self, url: impl Into<String>) -> ResponseExpectationBuilder {
        ResponseExpectationBuilder {
            url: url.into(),
            state: self.state.clone(),
        }
    }

    /// All calls received so far, in arrival order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Calls received for one URL.
    pub fn calls_to(&self, url: &str) -> Vec<RecordedCall> {
        self.calls().into_iter().filter(|c| c.url == url).collect()
    }

    /// Verifies that every scripted reply was consumed.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        let remaining: usize = state.expectations.values().map(VecDeque::len).sum();
        if remaining > 0 {
            let urls: Vec<&String> = state
                .expectations
                .iter()
                .filter(|(_, exps)| !exps.is_empty())
                .map(|(url, _)| url)
                .collect();
            panic!("Not all expectations were met. {remaining} remaining for {urls:?}");
        }
    }
}

/// Builder for a scripted reply.
pub struct ResponseExpectationBuilder {
    url: String,
    state: Arc<Mutex<MockState>>,
}

impl ResponseExpectationBuilder {
    /// Replies `200 OK` with `body`.
    pub fn return_ok(self, body: impl Into<String>) {
        self.return_status(200, body);
    }

    /// Replies with an arbitrary status and body.
    pub fn return_status(self, status: u16, body: impl Into<String>) {
        self.push(Expectation::Respond {
            status,
            body: body.into().into_bytes(),
        });
    }

    /// Fails the call as if the connection broke.
    pub fn return_err(self, reason: impl Into<String>) {
        self.push(Expectation::Fail(reason.into()));
    }

    /// Never replies. Useful for exercising deadlines.
    pub fn hang(self) {
        self.push(Expectation::Hang);
    }

    fn push(self, expectation: Expectation) {
        let mut state = self.state.lock().unwrap();
        state
            .expectations
            .entry(self.url)
            .or_default()
            .push_back(expectation);
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(
        &self,
        method: Method,
        url: &str,
        query: &[(String, String)],
        _body: Option<String>,
    ) -> Result<TransportResponse, TransportError> {
        let expectation = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(RecordedCall {
                method: method.clone(),
                url: url.to_string(),
                query: query.to_vec(),
            });
            state
                .expectations
                .get_mut(url)
                .and_then(VecDeque::pop_front)
        }; // Release lock before awaiting

        match expectation {
            Some(Expectation::Respond { status, body }) => Ok(TransportResponse::new(status, body)),
            Some(Expectation::Fail(reason)) => Err(TransportError::Connection(reason)),
            Some(Expectation::Hang) => std::future::pending().await,
            None => Err(TransportError::Connection(format!(
                "no expectation for {method} {url}"
            ))),
        }
    }
}

// =============================================================================
// BODY HELPERS
// =============================================================================

/// Wraps records in the OData v2 collection envelope.
pub fn collection_body(records: Value) -> String {
    json!({ "d": { "results": records } }).to_string()
}

/// A deferred navigation property pointing at `uri`.
pub fn deferred(uri: &str) -> Value {
    json!({ "__deferred": { "uri": uri } })
}
