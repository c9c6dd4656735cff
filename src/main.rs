//! # prod-order-conf
//!
//! Reads the input descriptor, runs the selected operations, and logs one
//! summary line per operation.
//!
//! Configuration comes from the environment (see
//! [`Config`](prod_order_conf::runtime::Config)); the first argument, when given,
//! overrides `INPUT_PATH`.

use prod_order_conf::runtime::{read_input, setup_tracing, ChainEnd, Config, OperationDispatcher};
use std::path::PathBuf;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenvy::dotenv().ok();
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::from_env().map_err(|e| e.to_string())?;
    let input_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.input_path.clone());

    let input = read_input(&input_path).map_err(|e| e.to_string())?;
    let key = input.fetch_key();
    let selection = input.selection();
    if selection.is_empty() {
        warn!(accepter = ?input.accepter, "No known operations selected");
    }

    let dispatcher = OperationDispatcher::from_config(&config).map_err(|e| e.to_string())?;
    let reports = dispatcher.run(&key, &selection).await;

    for report in &reports {
        let end = report.end();
        let records: usize = report.fetched().map(|r| r.len()).sum();
        match &end {
            ChainEnd::Completed | ChainEnd::NotFound => {
                info!(op = %report.operation, hops = report.hops.len(), records, ?end, "Operation summary")
            }
            ChainEnd::Failed | ChainEnd::Aborted(_) => {
                warn!(op = %report.operation, hops = report.hops.len(), records, ?end, "Operation summary")
            }
        }
    }

    info!("Application completed");
    Ok(())
}
