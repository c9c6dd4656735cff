//! # Production Order Confirmation Reads
//!
//! > **Concurrent, chained reads against `API_PROD_ORDER_CONFIRMATION_2_SRV`.**
//!
//! A caller names one or more read operations and supplies a lookup key. Each
//! operation runs in its own Tokio task and walks a short chain of OData
//! resources: a confirmation, the material movements it posted, and the batch
//! characteristics of the moved batch. Each hop after the first follows the
//! navigation link the server returned on the previous hop.
//!
//! ## 🏗️ Design Notes
//!
//! ### Chains are data
//! [`Operation::chain`](operation::Operation::chain) lists the resource kinds an
//! operation visits. The dispatcher walks that list and stops early when a hop
//! fails, comes back empty, or carries no link. Only the first record of a hop is
//! followed.
//!
//! ### Failures stay local
//! A transport or decode error ends the chain that hit it and nothing else.
//! [`OperationDispatcher::run`](runtime::OperationDispatcher::run) always returns,
//! with one [`OperationReport`](runtime::OperationReport) per operation.
//!
//! ### The transport is injected
//! Everything network-facing goes through the [`Transport`](framework::Transport)
//! trait. Production uses [`ReqwestTransport`](framework::ReqwestTransport); tests use
//! [`MockTransport`](framework::mock::MockTransport).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Generic fetching: the [`ODataEntity`](framework::ODataEntity) trait, the
//! [`ResourceFetcher`](framework::ResourceFetcher), envelope decoding, chain
//! resolution and the error taxonomy.
//!
//! ### 2. The Records ([`model`])
//! Confirmation, material movement and batch characteristic records, the
//! [`FetchKey`](model::FetchKey), and the [`ResourceKind`](model::ResourceKind) tag.
//!
//! ### 3. The Operations ([`operation`])
//! The five named operations, selector parsing, and the `$filter` builder.
//!
//! ### 4. The Interface ([`clients`])
//! [`ConfirmationServiceClient`](clients::ConfirmationServiceClient) maps a resource
//! kind to its entity set URL and record type.
//!
//! ### 5. The Orchestrator ([`runtime`])
//! Dispatch, configuration, input loading and tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! SAP_BASE_URL=https://host/sap/opu/odata/sap RUST_LOG=info \
//!     cargo run -- ./Inputs/SDC_Production_Order_Confirmation_sample.json
//! ```

pub mod clients;
pub mod framework;
pub mod model;
pub mod operation;
pub mod runtime;
