//! A material document item posted by a confirmation (`ProdnOrdConfMatlDocItm`).
//!
//! Links onward to the batch characteristics of the moved batch.

use crate::framework::ODataEntity;
use crate::model::Deferred;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MaterialMovement {
    pub confirmation_group: Option<String>,
    pub confirmation_count: Option<String>,
    pub material_document: Option<String>,
    pub material_document_item: Option<String>,
    pub material_document_year: Option<String>,
    #[serde(rename = "OrderID")]
    pub order_id: Option<String>,
    pub order_item: Option<String>,
    pub material: Option<String>,
    pub plant: Option<String>,
    pub storage_location: Option<String>,
    pub batch: Option<String>,
    pub goods_movement_type: Option<String>,
    pub inventory_valuation_type: Option<String>,
    pub quantity_in_entry_unit: Option<String>,
    pub entry_unit: Option<String>,
    pub posting_date: Option<String>,
    pub is_completely_delivered: Option<bool>,
    #[serde(rename = "to_ProdnOrderConfBatchCharc")]
    pub to_batch_characteristic: Option<Deferred>,
}

impl ODataEntity for MaterialMovement {
    const ENTITY_SET: &'static str = "ProdnOrdConfMatlDocItm";

    fn navigation(&self) -> Option<&str> {
        self.to_batch_characteristic.as_ref().and_then(Deferred::uri)
    }
}
