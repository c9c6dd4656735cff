//! # Core Fetch Framework
//!
//! This module defines the generic building blocks for reading OData resources.
//!
//! ## Key Types
//!
//! - [`ODataEntity`]: The trait every decoded record type implements.
//! - [`Transport`]: The seam to the HTTP layer (real or mocked).
//! - [`ResourceFetcher`]: One GET, one decode, one deadline.
//! - [`decode_records`]: Unwraps the `{"d": ...}` envelope into typed records.

use crate::framework::error::{FetchError, TransportError};
use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any record type must implement to be read by the [`ResourceFetcher`].
///
/// # Architecture Note
/// The fetcher, the chain resolver and the dispatcher are written once against this
/// contract. A record only has to say which entity set it lives in and, if it is not
/// a terminal resource, where its navigation link points.
pub trait ODataEntity: DeserializeOwned + Debug + Clone + Send + Sync + 'static {
    /// Name of the entity set under the service root (e.g. `ProdnOrdConf2`).
    const ENTITY_SET: &'static str;

    /// The outgoing navigation URL of this record, if the server populated one.
    ///
    /// Terminal resources keep the default.
    fn navigation(&self) -> Option<&str> {
        None
    }
}

// =============================================================================
// 2. THE TRANSPORT SEAM
// =============================================================================

/// A raw response as seen by the fetcher.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The HTTP layer, with authentication and client headers already attached.
///
/// Implementations must be safe to call from many tasks at once; the dispatcher
/// shares a single instance across every running operation.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(
        &self,
        method: Method,
        url: &str,
        query: &[(String, String)],
        body: Option<String>,
    ) -> Result<TransportResponse, TransportError>;
}

// =============================================================================
// 3. DECODING
// =============================================================================

/// Decodes an OData v2 JSON body into a list of records.
///
/// Accepts both the collection form `{"d": {"results": [...]}}` and the
/// single-entity form `{"d": {...}}`.
pub fn decode_records<T: ODataEntity>(body: &[u8]) -> Result<Vec<T>, FetchError> {
    let mut envelope: Value = serde_json::from_slice(body)?;
    let payload = match envelope.get_mut("d") {
        Some(payload) => payload.take(),
        None => return Err(shape_error("missing \"d\" envelope")),
    };

    match payload {
        Value::Object(mut fields) => match fields.remove("results") {
            Some(results @ Value::Array(_)) => Ok(serde_json::from_value(results)?),
            Some(_) => Err(shape_error("\"results\" is not an array")),
            None if is_entity(&fields) => Ok(vec![serde_json::from_value(Value::Object(fields))?]),
            None => Err(shape_error("\"d\" carries neither \"results\" nor an entity")),
        },
        _ => Err(shape_error("\"d\" is not an object")),
    }
}

/// A single entity has `__metadata` or at least one property that is not
/// envelope bookkeeping (`__count`, `__next`).
fn is_entity(fields: &serde_json::Map<String, Value>) -> bool {
    fields.contains_key("__metadata") || fields.keys().any(|key| !key.starts_with("__"))
}

fn shape_error(reason: &str) -> FetchError {
    FetchError::Decode(<serde_json::Error as serde::de::Error>::custom(reason))
}

// =============================================================================
// 4. THE FETCHER
// =============================================================================

/// Performs one GET and decodes the body into records of a single kind.
///
/// Cheap to clone: it only holds the shared transport and the per-call deadline.
#[derive(Clone)]
pub struct ResourceFetcher {
    transport: Arc<dyn Transport>,
    timeout: Duration,
}

impl ResourceFetcher {
    pub fn new(transport: Arc<dyn Transport>, timeout: Duration) -> Self {
        Self { transport, timeout }
    }

    /// Fetches `url`, adding `filter` as the `$filter` query parameter when present.
    ///
    /// Returns an empty list when the server found nothing.
    #[instrument(skip(self), fields(entity_set = T::ENTITY_SET))]
    pub async fn fetch<T: ODataEntity>(
        &self,
        url: &str,
        filter: Option<&str>,
    ) -> Result<Vec<T>, FetchError> {
        let query: Vec<(String, String)> = filter
            .map(|f| vec![("$filter".to_string(), f.to_string())])
            .unwrap_or_default();

        debug!("Sending request");
        let call = self.transport.request(Method::GET, url, &query, None);
        let response = tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| TransportError::Timeout(self.timeout))??;

        if !response.is_success() {
            return Err(TransportError::Status {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            }
            .into());
        }

        let records = decode_records::<T>(&response.body)?;
        debug!(count = records.len(), "Decoded");
        Ok(records)
    }
}

// =============================================================================
// 5. TESTS
// =============================================================================
