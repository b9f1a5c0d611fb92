//! Pure catalog query evaluation.
//!
//! `evaluate` is a total, deterministic function of its inputs: it never
//! fails, never reorders, and keeps no state between calls. Pages run it
//! eagerly on every filter change; with catalogs of at most a few hundred
//! records the O(records x active facets) pass needs no caching.

use crate::facet::FacetState;
use crate::record::ContentRecord;

/// Whether one record satisfies every active constraint.
///
/// Logical AND across active facet selections (a record missing the facet
/// field never matches), then the free-text predicate: the lowercase query
/// must be a substring of the record's search haystack.
pub fn matches(record: &ContentRecord, state: &FacetState) -> bool {
    for (key, selection) in state.selections() {
        if record.facet(key) != Some(selection) {
            return false;
        }
    }
    match state.active_query() {
        Some(query) => record.search_haystack().contains(&query.to_lowercase()),
        None => true,
    }
}

/// Records matching every active constraint, preserving store order.
///
/// An unconstrained state returns every record; an impossible combination
/// returns an empty list, never an error.
pub fn evaluate<'a>(records: &'a [ContentRecord], state: &FacetState) -> Vec<&'a ContentRecord> {
    records
        .iter()
        .filter(|record| matches(record, state))
        .collect()
}

/// Positions of matching records, for callers that cache a filtered view
/// across page navigation.
pub fn evaluate_indices(records: &[ContentRecord], state: &FacetState) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches(record, state))
        .map(|(idx, _)| idx)
        .collect()
}

/// Number of matching records, without materializing the list.
pub fn filtered_count(records: &[ContentRecord], state: &FacetState) -> usize {
    records
        .iter()
        .filter(|record| matches(record, state))
        .count()
}
