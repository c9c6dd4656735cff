//! Type-safe wrappers around [`ResourceFetcher`](crate::framework::ResourceFetcher).

pub mod confirmation_client;

pub use confirmation_client::*;
