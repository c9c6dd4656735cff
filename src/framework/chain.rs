//! # Chain Resolution
//!
//! Given the records returned by one hop, find the URL of the next hop.
//!
//! Only the first record of a result is followed. When a hop returns several
//! records, the remaining ones are reported but never traversed.

use crate::framework::core::ODataEntity;

/// Returns the navigation URL carried by the first record, if any.
///
/// `None` when the list is empty, the record kind is terminal, or the server left
/// the link out (missing or blank URI).
pub fn next_hop<T: ODataEntity>(records: &[T]) -> Option<String> {
    records
        .first()
        .and_then(|record| record.navigation())
        .map(str::trim)
        .filter(|uri| !uri.is_empty())
        .map(str::to_string)
}
