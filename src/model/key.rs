//! The primitive identifiers that parameterize first-hop filters.

use serde::{Deserialize, Serialize};

/// Lookup values supplied once per invocation.
///
/// Values are not validated; an empty field is sent as an empty literal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchKey {
    pub order_id: String,
    pub batch: String,
    pub confirmation_group: String,
    pub sequence: String,
    pub order_operation: String,
}

/// One field of a [`FetchKey`], named as the service names the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyField {
    OrderId,
    Batch,
    ConfirmationGroup,
    Sequence,
    OrderOperation,
}

impl KeyField {
    /// The OData property name used in `$filter`.
    pub fn property(self) -> &'static str {
        match self {
            KeyField::OrderId => "OrderID",
            KeyField::Batch => "Batch",
            KeyField::ConfirmationGroup => "ConfirmationGroup",
            KeyField::Sequence => "Sequence",
            KeyField::OrderOperation => "OrderOperation",
        }
    }
}

impl FetchKey {
    pub fn get(&self, field: KeyField) -> &str {
        match field {
            KeyField::OrderId => &self.order_id,
            KeyField::Batch => &self.batch,
            KeyField::ConfirmationGroup => &self.confirmation_group,
            KeyField::Sequence => &self.sequence,
            KeyField::OrderOperation => &self.order_operation,
        }
    }
}
