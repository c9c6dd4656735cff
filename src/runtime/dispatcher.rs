use crate::clients::{ConfirmationServiceClient, HopTarget};
use crate::framework::{FetchError, ReqwestTransport, ResourceFetcher};
use crate::model::{FetchKey, ResourceKind, ResourceRecords};
use crate::operation::{build_filter, Operation, OperationSelection};
use crate::runtime::config::Config;
use std::sync::Arc;
use tracing::{debug, error, info, info_span, warn, Instrument};

/// What one hop produced.
#[derive(Debug)]
pub enum HopOutcome {
    /// At least one record came back.
    Fetched(ResourceRecords),
    /// The call succeeded with no records. Ends the chain without error.
    Empty,
    /// The call failed. Ends the chain.
    Failed(FetchError),
}

/// One executed hop of an operation's chain.
#[derive(Debug)]
pub struct HopReport {
    pub kind: ResourceKind,
    pub url: String,
    pub outcome: HopOutcome,
}

/// How an operation's chain ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainEnd {
    /// The last executed hop fetched records and nothing was left to follow.
    Completed,
    /// A hop returned zero records.
    NotFound,
    /// A hop failed.
    Failed,
    /// The task did not finish normally.
    Aborted(String),
}

/// Everything one operation surfaced, hop by hop.
#[derive(Debug)]
pub struct OperationReport {
    pub operation: Operation,
    pub hops: Vec<HopReport>,
    aborted: Option<String>,
}

impl OperationReport {
    fn new(operation: Operation) -> Self {
        Self {
            operation,
            hops: Vec::new(),
            aborted: None,
        }
    }

    fn aborted(operation: Operation, reason: String) -> Self {
        Self {
            operation,
            hops: Vec::new(),
            aborted: Some(reason),
        }
    }

    pub fn end(&self) -> ChainEnd {
        if let Some(reason) = &self.aborted {
            return ChainEnd::Aborted(reason.clone());
        }
        match self.hops.last().map(|hop| &hop.outcome) {
            Some(HopOutcome::Failed(_)) => ChainEnd::Failed,
            Some(HopOutcome::Empty) | None => ChainEnd::NotFound,
            Some(HopOutcome::Fetched(_)) => ChainEnd::Completed,
        }
    }

    /// Records fetched by successful hops, in chain order.
    pub fn fetched(&self) -> impl Iterator<Item = &ResourceRecords> {
        self.hops.iter().filter_map(|hop| match &hop.outcome {
            HopOutcome::Fetched(records) => Some(records),
            _ => None,
        })
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.hops.iter().find_map(|hop| match &hop.outcome {
            HopOutcome::Failed(e) => Some(e),
            _ => None,
        })
    }
}

/// Runs selected operations concurrently against the confirmation service.
///
/// # Architecture
///
/// Each operation becomes one Tokio task that walks its chain (see
/// [`Operation::chain`]). Tasks share only the read-only client, so a failing or
/// slow chain never affects its siblings. [`run`](Self::run) is a join barrier:
/// every task is spawned first, then every handle is awaited.
///
/// # Example
///
/// ```ignore
/// let dispatcher = OperationDispatcher::from_config(&config)?;
/// let reports = dispatcher.run(&key, &OperationSelection::parse(["all"])).await;
/// ```
#[derive(Clone)]
pub struct OperationDispatcher {
    client: ConfirmationServiceClient,
}

impl OperationDispatcher {
    pub fn new(client: ConfirmationServiceClient) -> Self {
        Self { client }
    }

    /// Wires the production transport from configuration.
    pub fn from_config(config: &Config) -> Result<Self, crate::framework::TransportError> {
        let transport = ReqwestTransport::new(&config.http_transport())?;
        let fetcher = ResourceFetcher::new(Arc::new(transport), config.request_timeout);
        Ok(Self::new(ConfirmationServiceClient::new(
            config.base_url.clone(),
            fetcher,
        )))
    }

    /// Runs every selected operation and waits for all of them.
    ///
    /// Never fails as a whole: each report carries its own outcome.
    pub async fn run(&self, key: &FetchKey, selection: &OperationSelection) -> Vec<OperationReport> {
        info!(operations = selection.len(), "Dispatching operations");
        let key = Arc::new(key.clone());

        // Spawn everything before joining anything
        let handles: Vec<_> = selection
            .iter()
            .map(|operation| {
                let client = self.client.clone();
                let key = key.clone();
                let span = info_span!("operation", op = %operation);
                let handle =
                    tokio::spawn(run_chain(client, operation, key).instrument(span));
                (operation, handle)
            })
            .collect();

        let mut reports = Vec::with_capacity(handles.len());
        for (operation, handle) in handles {
            match handle.await {
                Ok(report) => reports.push(report),
                Err(e) => {
                    error!(op = %operation, error = %e, "Operation task failed");
                    reports.push(OperationReport::aborted(operation, e.to_string()));
                }
            }
        }

        info!(operations = reports.len(), "All operations finished");
        reports
    }
}

/// Walks one operation's chain until it ends, fails, or runs out of links.
async fn run_chain(
    client: ConfirmationServiceClient,
    operation: Operation,
    key: Arc<FetchKey>,
) -> OperationReport {
    let mut report = OperationReport::new(operation);
    let chain = operation.chain();
    let mut target = HopTarget::Query {
        filter: build_filter(operation, &key),
    };

    for (index, &kind) in chain.iter().enumerate() {
        let hop = index + 1;
        let (url, filter) = client.resolve(kind, &target);

        match client.fetch(kind, &url, filter).await {
            Err(e) => {
                error!(hop, %kind, error = %e, "Hop failed");
                report.hops.push(HopReport {
                    kind,
                    url,
                    outcome: HopOutcome::Failed(e),
                });
                break;
            }
            Ok(records) if records.is_empty() => {
                info!(hop, %kind, "No records found");
                report.hops.push(HopReport {
                    kind,
                    url,
                    outcome: HopOutcome::Empty,
                });
                break;
            }
            Ok(records) => {
                info!(hop, %kind, count = records.len(), "Hop fetched");
                debug!(?records);
                if records.len() > 1 && hop < chain.len() {
                    warn!(hop, %kind, count = records.len(), "Following first record only");
                }
                let next = records.next_hop();
                report.hops.push(HopReport {
                    kind,
                    url,
                    outcome: HopOutcome::Fetched(records),
                });

                if hop == chain.len() {
                    break;
                }
                match next {
                    Some(link) => target = HopTarget::Link(link),
                    None => {
                        info!(hop, %kind, "No navigation link, chain ends");
                        break;
                    }
                }
            }
        }
    }

    report
}
