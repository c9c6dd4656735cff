//! Runtime orchestration.
//!
//! This module contains everything around the fetch chains themselves:
//!
//! - **Dispatch**: Spawning one task per selected operation and joining them
//! - **Configuration**: Loading connection settings from the environment
//! - **Input**: Reading the invocation descriptor
//! - **Observability setup**: Initializing tracing and logging
//!
//! # Main Components
//!
//! - [`OperationDispatcher`] - Runs selected operations concurrently and reports per hop
//! - [`Config`] - Connection settings and the per-call deadline
//! - [`read_input`] - Loads the lookup key and operation selector
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod config;
pub mod dispatcher;
pub mod input;
pub mod tracing;

pub use config::*;
pub use dispatcher::*;
pub use input::*;
pub use self::tracing::*;
