//! # Fetch Errors
//!
//! Error types shared by the transport, the fetcher and everything that runs a hop.
//! A fetch fails in exactly one of two ways: the call never produced a usable
//! response ([`FetchError::Transport`]) or the response body could not be decoded
//! ([`FetchError::Decode`]). An empty result is not an error.

use std::time::Duration;

/// Failures below the decoding layer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    #[error("Invalid header value for {name}: {reason}")]
    InvalidHeader { name: String, reason: String },
}

/// Errors that terminate a single hop.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("API request error: {0}")]
    Transport(#[from] TransportError),
    #[error("Convert error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, FetchError::Decode(_))
    }
}
