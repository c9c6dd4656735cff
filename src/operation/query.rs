//! `$filter` expressions for first hops.

use crate::model::FetchKey;
use crate::operation::Operation;

/// Builds the equality conjunction over the fields `operation` requires.
///
/// Values are inserted verbatim, without quoting or validation.
pub fn build_filter(operation: Operation, key: &FetchKey) -> String {
    operation
        .required_fields()
        .iter()
        .map(|field| format!("{} eq '{}'", field.property(), key.get(*field)))
        .collect::<Vec<_>>()
        .join(" and ")
}
