//! Generic OData read framework.
//!
//! This module provides the building blocks for fetching typed records from an
//! OData v2 service and walking the navigation links between them.
//!
//! # Main Components
//!
//! - [`ODataEntity`] - Trait that record types implement to be fetched
//! - [`Transport`] - The HTTP seam; [`ReqwestTransport`] in production
//! - [`ResourceFetcher`] - One GET, one decode, bounded by a deadline
//! - [`next_hop`] - Resolves the next URL in a chain from a hop's records
//! - [`FetchError`] - Transport and decode failures
//!
//! # Testing
//!
//! See [`mock`] module for a scripted transport that needs no network.

pub mod chain;
pub mod core;
pub mod error;
pub mod http;
pub mod mock;

// Re-export core types for convenience
pub use chain::next_hop;
pub use self::core::{decode_records, ODataEntity, ResourceFetcher, Transport, TransportResponse};
pub use error::{FetchError, TransportError};
pub use http::{HttpTransportConfig, ReqwestTransport};
