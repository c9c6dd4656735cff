//! # Confirmation Service Client
//!
//! Provides a high-level API over `API_PROD_ORDER_CONFIRMATION_2_SRV`.
//! It wraps a [`ResourceFetcher`] and knows where each entity set lives and which
//! record type each [`ResourceKind`] decodes into.

use crate::framework::{FetchError, ResourceFetcher};
use crate::model::{
    BatchCharacteristic, Confirmation, MaterialMovement, ResourceKind, ResourceRecords,
};
use tracing::{debug, instrument};

/// Service path appended to the configured base URL.
pub const SERVICE_PATH: &str = "API_PROD_ORDER_CONFIRMATION_2_SRV";

/// Where a hop reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HopTarget {
    /// The kind's entity set, filtered.
    Query { filter: String },
    /// A navigation link returned by the previous hop, used verbatim.
    Link(String),
}

/// Client for the production order confirmation service.
#[derive(Clone)]
pub struct ConfirmationServiceClient {
    base_url: String,
    fetcher: ResourceFetcher,
}

impl ConfirmationServiceClient {
    pub fn new(base_url: impl Into<String>, fetcher: ResourceFetcher) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, fetcher }
    }

    /// `<base>/API_PROD_ORDER_CONFIRMATION_2_SRV/<EntitySet>`
    pub fn entity_set_url(&self, kind: ResourceKind) -> String {
        [self.base_url.as_str(), SERVICE_PATH, kind.entity_set()].join("/")
    }

    /// The URL a hop will call and the filter it will send.
    pub fn resolve<'a>(&self, kind: ResourceKind, target: &'a HopTarget) -> (String, Option<&'a str>) {
        match target {
            HopTarget::Query { filter } => (self.entity_set_url(kind), Some(filter.as_str())),
            HopTarget::Link(url) => (url.clone(), None),
        }
    }

    /// Reads one resolved hop and decodes it as `kind`.
    #[instrument(skip(self))]
    pub async fn fetch(
        &self,
        kind: ResourceKind,
        url: &str,
        filter: Option<&str>,
    ) -> Result<ResourceRecords, FetchError> {
        debug!("Fetching");
        let records = match kind {
            ResourceKind::Confirmation => ResourceRecords::Confirmations(
                self.fetcher.fetch::<Confirmation>(url, filter).await?,
            ),
            ResourceKind::MaterialMovement => ResourceRecords::MaterialMovements(
                self.fetcher.fetch::<MaterialMovement>(url, filter).await?,
            ),
            ResourceKind::BatchCharacteristic => ResourceRecords::BatchCharacteristics(
                self.fetcher.fetch::<BatchCharacteristic>(url, filter).await?,
            ),
        };
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{collection_body, deferred, MockTransport};
    use serde_json::json;
    use std::time::Duration;

    fn client(mock: &MockTransport, base: &str) -> ConfirmationServiceClient {
        ConfirmationServiceClient::new(
            base,
            ResourceFetcher::new(mock.transport(), Duration::from_secs(1)),
        )
    }

    #[test]
    fn test_entity_set_urls() {
        let mock = MockTransport::new();
        let client = client(&mock, "https://sap.test/sap/opu/odata/sap/");
        assert_eq!(
            client.entity_set_url(ResourceKind::Confirmation),
            "https://sap.test/sap/opu/odata/sap/API_PROD_ORDER_CONFIRMATION_2_SRV/ProdnOrdConf2"
        );
        assert_eq!(
            client.entity_set_url(ResourceKind::MaterialMovement),
            "https://sap.test/sap/opu/odata/sap/API_PROD_ORDER_CONFIRMATION_2_SRV/ProdnOrdConfMatlDocItm"
        );
        assert_eq!(
            client.entity_set_url(ResourceKind::BatchCharacteristic),
            "https://sap.test/sap/opu/odata/sap/API_PROD_ORDER_CONFIRMATION_2_SRV/ProdnOrderConfBatchCharc"
        );
    }

    #[tokio::test]
    async fn test_query_target_filters_entity_set() {
        let mock = MockTransport::new();
        let client = client(&mock, "https://sap.test");
        let url = client.entity_set_url(ResourceKind::Confirmation);
        mock.expect_get(&url).return_ok(collection_body(json!([{
            "OrderID": "O1",
            "to_ProdnOrdConfMatlDocItm": deferred("https://sap.test/next")
        }])));

        let target = HopTarget::Query {
            filter: "OrderID eq 'O1'".into(),
        };
        let (resolved, filter) = client.resolve(ResourceKind::Confirmation, &target);
        assert_eq!(resolved, url);
        let records = client
            .fetch(ResourceKind::Confirmation, &resolved, filter)
            .await
            .unwrap();

        assert_eq!(records.kind(), ResourceKind::Confirmation);
        assert_eq!(records.next_hop().as_deref(), Some("https://sap.test/next"));
        assert_eq!(mock.calls()[0].filter(), Some("OrderID eq 'O1'"));
        mock.verify();
    }

    #[tokio::test]
    async fn test_link_target_is_used_verbatim() {
        let mock = MockTransport::new();
        let client = client(&mock, "https://sap.test");
        let link = "https://other.host/ProdnOrdConf2(ConfirmationGroup='1',ConfirmationCount='2')/to_ProdnOrdConfMatlDocItm";
        mock.expect_get(link).return_ok(collection_body(json!([{"Batch": "B1"}])));

        let target = HopTarget::Link(link.into());
        let (resolved, filter) = client.resolve(ResourceKind::MaterialMovement, &target);
        assert_eq!(filter, None);
        let records = client
            .fetch(ResourceKind::MaterialMovement, &resolved, filter)
            .await
            .unwrap();

        assert_eq!(records.len(), 1);
        let calls = mock.calls();
        assert_eq!(calls[0].url, link);
        assert!(calls[0].query.is_empty());
    }
}
