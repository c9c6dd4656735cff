//! Record types (DTOs) implementing the [`ODataEntity`](crate::framework::ODataEntity) trait,
//! plus the lookup key used to select them.

pub mod batch_characteristic;
pub mod confirmation;
pub mod key;
pub mod material_movement;

pub use batch_characteristic::*;
pub use confirmation::*;
pub use key::*;
pub use material_movement::*;

use crate::framework::{next_hop, ODataEntity};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A deferred navigation property: `{"__deferred": {"uri": "..."}}`.
///
/// An expanded property decodes to an empty `Deferred` rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deferred {
    #[serde(rename = "__deferred")]
    pub deferred: Option<DeferredUri>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeferredUri {
    pub uri: String,
}

impl Deferred {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            deferred: Some(DeferredUri { uri: uri.into() }),
        }
    }

    pub fn uri(&self) -> Option<&str> {
        self.deferred.as_ref().map(|d| d.uri.as_str())
    }
}

/// The three kinds of record a chain can visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Confirmation,
    MaterialMovement,
    BatchCharacteristic,
}

impl ResourceKind {
    pub fn entity_set(self) -> &'static str {
        match self {
            ResourceKind::Confirmation => Confirmation::ENTITY_SET,
            ResourceKind::MaterialMovement => MaterialMovement::ENTITY_SET,
            ResourceKind::BatchCharacteristic => BatchCharacteristic::ENTITY_SET,
        }
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Confirmation => "Confirmation",
            ResourceKind::MaterialMovement => "MaterialMovement",
            ResourceKind::BatchCharacteristic => "BatchCharacteristic",
        };
        f.write_str(name)
    }
}

/// The decoded result of one hop.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceRecords {
    Confirmations(Vec<Confirmation>),
    MaterialMovements(Vec<MaterialMovement>),
    BatchCharacteristics(Vec<BatchCharacteristic>),
}

impl ResourceRecords {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceRecords::Confirmations(_) => ResourceKind::Confirmation,
            ResourceRecords::MaterialMovements(_) => ResourceKind::MaterialMovement,
            ResourceRecords::BatchCharacteristics(_) => ResourceKind::BatchCharacteristic,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ResourceRecords::Confirmations(r) => r.len(),
            ResourceRecords::MaterialMovements(r) => r.len(),
            ResourceRecords::BatchCharacteristics(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// URL of the next hop, taken from the first record.
    pub fn next_hop(&self) -> Option<String> {
        match self {
            ResourceRecords::Confirmations(r) => next_hop(r),
            ResourceRecords::MaterialMovements(r) => next_hop(r),
            ResourceRecords::BatchCharacteristics(r) => next_hop(r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_hop_per_kind() {
        let confs = ResourceRecords::Confirmations(vec![Confirmation {
            to_material_movements: Some(Deferred::new("http://sap.test/mm")),
            ..Default::default()
        }]);
        assert_eq!(confs.next_hop().as_deref(), Some("http://sap.test/mm"));

        let movements = ResourceRecords::MaterialMovements(vec![MaterialMovement::default()]);
        assert_eq!(movements.next_hop(), None);

        let charcs = ResourceRecords::BatchCharacteristics(vec![BatchCharacteristic::default()]);
        assert_eq!(charcs.kind(), ResourceKind::BatchCharacteristic);
        assert_eq!(charcs.next_hop(), None);
    }
}
