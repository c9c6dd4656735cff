//! The five named read operations and how a caller selects them.
//!
//! Each [`Operation`] is data: the key fields its first hop filters on and the
//! ordered list of resource kinds its chain visits. The dispatcher walks that
//! list; it never branches on the operation itself.

pub mod query;

pub use query::build_filter;

use crate::model::{KeyField, ResourceKind};
use std::fmt::{self, Display};
use std::str::FromStr;
use tracing::debug;

/// Sentinel selector that expands to every operation.
pub const ALL_SELECTOR: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ConfByOrderId,
    MaterialMovements,
    BatchCharacteristic,
    ConfByOrderIdConfGroup,
    ConfByOrderIdSeqOp,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::ConfByOrderId,
        Operation::MaterialMovements,
        Operation::BatchCharacteristic,
        Operation::ConfByOrderIdConfGroup,
        Operation::ConfByOrderIdSeqOp,
    ];

    /// The name callers use to select this operation.
    pub fn name(self) -> &'static str {
        match self {
            Operation::ConfByOrderId => "ConfByOrderID",
            Operation::MaterialMovements => "MaterialMovements",
            Operation::BatchCharacteristic => "BatchCharacteristic",
            Operation::ConfByOrderIdConfGroup => "ConfByOrderIDConfGroup",
            Operation::ConfByOrderIdSeqOp => "ConfByOrderIDSeqOp",
        }
    }

    /// Key fields the first hop filters on, in filter order.
    pub fn required_fields(self) -> &'static [KeyField] {
        use KeyField::*;
        match self {
            Operation::ConfByOrderId => &[OrderId],
            Operation::MaterialMovements => &[Batch],
            Operation::BatchCharacteristic => &[Batch],
            Operation::ConfByOrderIdConfGroup => &[OrderId, ConfirmationGroup],
            Operation::ConfByOrderIdSeqOp => &[OrderId, Sequence, OrderOperation],
        }
    }

    /// Resource kinds visited by this operation, first hop first.
    pub fn chain(self) -> &'static [ResourceKind] {
        use ResourceKind::*;
        match self {
            Operation::ConfByOrderId
            | Operation::ConfByOrderIdConfGroup
            | Operation::ConfByOrderIdSeqOp => {
                &[Confirmation, MaterialMovement, BatchCharacteristic]
            }
            Operation::MaterialMovements => &[MaterialMovement, BatchCharacteristic],
            Operation::BatchCharacteristic => &[BatchCharacteristic],
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown operation: {0}")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s.trim())
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}

/// A deduplicated, ordered set of operations to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSelection {
    operations: Vec<Operation>,
}

impl OperationSelection {
    pub fn all() -> Self {
        Self {
            operations: Operation::ALL.to_vec(),
        }
    }

    /// Builds a selection from caller-supplied names.
    ///
    /// An empty list, or any entry equal to `all` (case-insensitive), selects every
    /// operation. Unknown names are dropped; duplicates keep their first position.
    pub fn parse<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<S> = names.into_iter().collect();
        if names.is_empty()
            || names
                .iter()
                .any(|n| n.as_ref().trim().eq_ignore_ascii_case(ALL_SELECTOR))
        {
            return Self::all();
        }

        let mut operations = Vec::with_capacity(names.len());
        for name in &names {
            match name.as_ref().parse::<Operation>() {
                Ok(op) if !operations.contains(&op) => operations.push(op),
                Ok(_) => {}
                Err(e) => debug!(error = %e, "Ignoring selector entry"),
            }
        }
        Self { operations }
    }

    pub fn iter(&self) -> impl Iterator<Item = Operation> + '_ {
        self.operations.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>(), Ok(op));
        }
        assert!("confbyorderid".parse::<Operation>().is_err());
    }

    #[test]
    fn test_all_matches_explicit_list() {
        let explicit = OperationSelection::parse([
            "ConfByOrderID",
            "MaterialMovements",
            "BatchCharacteristic",
            "ConfByOrderIDConfGroup",
            "ConfByOrderIDSeqOp",
        ]);
        assert_eq!(OperationSelection::parse(["all"]), explicit);
        assert_eq!(OperationSelection::parse(["All"]), explicit);
        assert_eq!(OperationSelection::parse(Vec::<String>::new()), explicit);
    }

    #[test]
    fn test_unknown_names_are_dropped() {
        let mixed = OperationSelection::parse(["BatchCharacteristic", "Nope", "ConfByOrderID"]);
        let valid = OperationSelection::parse(["BatchCharacteristic", "ConfByOrderID"]);
        assert_eq!(mixed, valid);
        assert_eq!(mixed.len(), 2);

        let only_unknown = OperationSelection::parse(["Nope"]);
        assert!(only_unknown.is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let selection =
            OperationSelection::parse(["MaterialMovements", "MaterialMovements", "BatchCharacteristic"]);
        let ops: Vec<Operation> = selection.iter().collect();
        assert_eq!(
            ops,
            vec![Operation::MaterialMovements, Operation::BatchCharacteristic]
        );
    }

    #[test]
    fn test_chain_table() {
        use ResourceKind::*;
        let full = [Confirmation, MaterialMovement, BatchCharacteristic];
        assert_eq!(Operation::ConfByOrderId.chain(), full);
        assert_eq!(Operation::ConfByOrderIdConfGroup.chain(), full);
        assert_eq!(Operation::ConfByOrderIdSeqOp.chain(), full);
        assert_eq!(
            Operation::MaterialMovements.chain(),
            [MaterialMovement, BatchCharacteristic]
        );
        assert_eq!(Operation::BatchCharacteristic.chain(), [BatchCharacteristic]);
    }
}
