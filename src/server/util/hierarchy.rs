//! Stored form of a company's geo hierarchy.
//!
//! Selected state and city IDs are persisted as a JSON array of integers in a text
//! column (`[12,14]`). Decoding is lenient: a column that doesn't hold an integer array
//! decodes to an empty list rather than failing the read of the whole record.

use std::collections::HashSet;

/// Encodes IDs as a JSON integer array, preserving order.
///
/// # Example
/// ```ignore
/// assert_eq!(encode_ids(&[12, 14]), "[12,14]");
/// assert_eq!(encode_ids(&[]), "[]");
/// ```
pub fn encode_ids(ids: &[i32]) -> String {
    serde_json::json!(ids).to_string()
}

/// Decodes a stored ID list.
///
/// Malformed input yields an empty list. Repeated IDs are collapsed to their first
/// occurrence so a decoded list never holds duplicates.
pub fn decode_ids(raw: &str) -> Vec<i32> {
    let ids: Vec<i32> = serde_json::from_str(raw).unwrap_or_default();

    let mut seen = HashSet::with_capacity(ids.len());
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}
