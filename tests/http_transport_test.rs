use mockito::{Matcher, Server, ServerGuard};
use prod_order_conf::framework::{FetchError, TransportError};
use prod_order_conf::model::{FetchKey, ResourceRecords};
use prod_order_conf::operation::OperationSelection;
use prod_order_conf::runtime::{ChainEnd, Config, HopOutcome, OperationDispatcher};
use serde_json::json;

const SERVICE: &str = "/sap/opu/odata/sap/API_PROD_ORDER_CONFIRMATION_2_SRV";

fn config_for(server: &ServerGuard) -> Config {
    let base_url = format!("{}/sap/opu/odata/sap", server.url());
    Config::from_lookup(|var| match var {
        "SAP_BASE_URL" => Some(base_url.clone()),
        "SAP_CLIENT" => Some("200".to_string()),
        "SAP_USER" => Some("user".to_string()),
        "SAP_PASSWORD" => Some("pass".to_string()),
        "SAP_REQUEST_TIMEOUT_SECS" => Some("5".to_string()),
        _ => None,
    })
    .expect("Failed to build test config")
}

fn key() -> FetchKey {
    FetchKey {
        order_id: "1000020".into(),
        batch: "B100".into(),
        ..Default::default()
    }
}

/// The filter, client header and credentials reach the server.
#[tokio::test]
async fn test_request_carries_filter_and_client_headers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", format!("{SERVICE}/ProdnOrderConfBatchCharc").as_str())
        .match_query(Matcher::UrlEncoded(
            "$filter".into(),
            "Batch eq 'B100'".into(),
        ))
        .match_header("sap-client", "200")
        .match_header("accept", "application/json")
        .match_header("authorization", "Basic dXNlcjpwYXNz")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"d": {"results": [{"Batch": "B100", "Characteristic": "COLOR", "CharcValue": "RED"}]}})
                .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let dispatcher = OperationDispatcher::from_config(&config_for(&server)).unwrap();
    let reports = dispatcher
        .run(&key(), &OperationSelection::parse(["BatchCharacteristic"]))
        .await;

    mock.assert_async().await;
    assert_eq!(reports[0].end(), ChainEnd::Completed);
}

/// Navigation links returned by the server are followed as absolute URLs.
#[tokio::test]
async fn test_chain_follows_server_links() {
    let mut server = Server::new_async().await;
    let url = server.url();

    let movements = server
        .mock("GET", format!("{SERVICE}/ProdnOrdConfMatlDocItm").as_str())
        .match_query(Matcher::UrlEncoded(
            "$filter".into(),
            "Batch eq 'B100'".into(),
        ))
        .with_status(200)
        .with_body(
            json!({"d": {"results": [{
                "MaterialDocument": "4900000001",
                "Batch": "B100",
                "to_ProdnOrderConfBatchCharc": {"__deferred": {"uri": format!("{url}/nav/charc")}}
            }]}})
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let charcs = server
        .mock("GET", "/nav/charc")
        .with_status(200)
        .with_body(json!({"d": {"results": [{"Batch": "B100", "CharcValue": "A"}]}}).to_string())
        .expect(1)
        .create_async()
        .await;

    let dispatcher = OperationDispatcher::from_config(&config_for(&server)).unwrap();
    let reports = dispatcher
        .run(&key(), &OperationSelection::parse(["MaterialMovements"]))
        .await;

    movements.assert_async().await;
    charcs.assert_async().await;

    let report = &reports[0];
    assert_eq!(report.end(), ChainEnd::Completed);
    assert_eq!(report.hops[1].url, format!("{url}/nav/charc"));
    assert!(matches!(
        &report.hops[1].outcome,
        HopOutcome::Fetched(ResourceRecords::BatchCharacteristics(records)) if records.len() == 1
    ));
}

/// A server error ends the chain with a transport error carrying the status.
#[tokio::test]
async fn test_server_error_is_reported_as_transport_failure() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", format!("{SERVICE}/ProdnOrdConf2").as_str())
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("internal error")
        .expect(1)
        .create_async()
        .await;

    let dispatcher = OperationDispatcher::from_config(&config_for(&server)).unwrap();
    let reports = dispatcher
        .run(&key(), &OperationSelection::parse(["ConfByOrderID"]))
        .await;

    mock.assert_async().await;
    let report = &reports[0];
    assert_eq!(report.end(), ChainEnd::Failed);
    assert_eq!(report.hops.len(), 1);
    match report.error() {
        Some(FetchError::Transport(TransportError::Status { status, body })) => {
            assert_eq!(*status, 500);
            assert_eq!(body, "internal error");
        }
        other => panic!("unexpected error {other:?}"),
    }
}
