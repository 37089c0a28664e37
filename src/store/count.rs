//! Count extraction from loosely-shaped upstream bodies.

use serde_json::Value;

/// Pull a usable total out of a count response.
///
/// The count endpoint does not commit to a shape: the value may sit in a
/// `count` field, a `total` field, or be the bare body, as either a JSON
/// number or a numeric string. Candidates are tried in that order and the
/// first valid one wins; fractional, negative, and non-numeric candidates
/// are skipped. `None` means the caller keeps whatever total it already
/// had.
#[must_use]
pub fn extract_count(body: &Value) -> Option<u64> {
    body.get("count")
        .and_then(parse_candidate)
        .or_else(|| body.get("total").and_then(parse_candidate))
        .or_else(|| parse_candidate(body))
}

/// Like [`extract_count`] for a single candidate value, but only accepting
/// totals greater than zero.
///
/// Used for the list response's `total` fallback, where zero is
/// indistinguishable from "field not populated".
#[must_use]
pub fn extract_positive(value: &Value) -> Option<u64> {
    parse_candidate(value).filter(|count| *count > 0)
}

fn parse_candidate(value: &Value) -> Option<u64> {
    if let Some(count) = value.as_u64() {
        return Some(count);
    }
    value.as_str()?.trim().parse().ok()
}
