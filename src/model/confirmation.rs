//! A production order confirmation (`ProdnOrdConf2`).
//!
//! # Fetch Framework
//! This struct implements the [`ODataEntity`] trait, allowing it to be read by a
//! [`ResourceFetcher`](crate::framework::ResourceFetcher). Its navigation link
//! points at the material document items posted with the confirmation.

use crate::framework::ODataEntity;
use crate::model::Deferred;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Confirmation {
    pub confirmation_group: Option<String>,
    pub confirmation_count: Option<String>,
    #[serde(rename = "OrderID")]
    pub order_id: Option<String>,
    pub order_operation: Option<String>,
    pub sequence: Option<String>,
    pub order_suboperation: Option<String>,
    pub order_type: Option<String>,
    #[serde(rename = "OrderOperationInternalID")]
    pub order_operation_internal_id: Option<String>,
    pub confirmation_text: Option<String>,
    pub plant: Option<String>,
    pub work_center: Option<String>,
    pub material: Option<String>,
    pub batch: Option<String>,
    pub confirmation_unit: Option<String>,
    pub confirmation_yield_quantity: Option<String>,
    pub confirmation_scrap_quantity: Option<String>,
    pub confirmation_rework_quantity: Option<String>,
    pub posting_date: Option<String>,
    pub entered_by_user: Option<String>,
    pub is_final_confirmation: Option<bool>,
    #[serde(rename = "to_ProdnOrdConfMatlDocItm")]
    pub to_material_movements: Option<Deferred>,
}

impl ODataEntity for Confirmation {
    const ENTITY_SET: &'static str = "ProdnOrdConf2";

    fn navigation(&self) -> Option<&str> {
        self.to_material_movements.as_ref().and_then(Deferred::uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::decode_records;
    use serde_json::json;

    #[test]
    fn test_decodes_server_payload() {
        let body = json!({"d": {"results": [{
            "__metadata": {"type": "API_PROD_ORDER_CONFIRMATION_2_SRV.A_ProdnOrdConf2Type"},
            "ConfirmationGroup": "0000001234",
            "ConfirmationCount": "00000001",
            "OrderID": "1000123",
            "OrderOperation": "0010",
            "Sequence": "0",
            "Plant": "1010",
            "ConfirmationYieldQuantity": "10.000",
            "IsFinalConfirmation": true,
            "to_ProdnOrdConfMatlDocItm": {"__deferred": {
                "uri": "https://sap.test/API_PROD_ORDER_CONFIRMATION_2_SRV/ProdnOrdConf2(ConfirmationGroup='0000001234',ConfirmationCount='00000001')/to_ProdnOrdConfMatlDocItm"
            }}
        }]}})
        .to_string();

        let records: Vec<Confirmation> = decode_records(body.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        let conf = &records[0];
        assert_eq!(conf.order_id.as_deref(), Some("1000123"));
        assert_eq!(conf.confirmation_yield_quantity.as_deref(), Some("10.000"));
        assert_eq!(conf.is_final_confirmation, Some(true));
        assert!(conf.work_center.is_none());
        assert!(conf
            .navigation()
            .unwrap()
            .ends_with("/to_ProdnOrdConfMatlDocItm"));
    }

    #[test]
    fn test_expanded_navigation_is_not_a_link() {
        let body = json!({"d": {"results": [{
            "OrderID": "1",
            "to_ProdnOrdConfMatlDocItm": {"results": []}
        }]}})
        .to_string();

        let records: Vec<Confirmation> = decode_records(body.as_bytes()).unwrap();
        assert_eq!(records[0].navigation(), None);
    }
}
