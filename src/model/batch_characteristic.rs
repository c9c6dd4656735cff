//! A characteristic value of a confirmed batch (`ProdnOrderConfBatchCharc`).
//!
//! Terminal: nothing is fetched after it.

use crate::framework::ODataEntity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchCharacteristic {
    pub confirmation_group: Option<String>,
    pub confirmation_count: Option<String>,
    pub material_document: Option<String>,
    pub material_document_item: Option<String>,
    pub material_document_year: Option<String>,
    pub material: Option<String>,
    pub batch: Option<String>,
    pub characteristic: Option<String>,
    pub charc_value: Option<String>,
    pub charc_value_dependency: Option<String>,
    pub charc_from_decimal_value: Option<String>,
}

impl ODataEntity for BatchCharacteristic {
    const ENTITY_SET: &'static str = "ProdnOrderConfBatchCharc";
}
