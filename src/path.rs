//! Dotted-path resolution against a document value.
//!
//! A path like `"address.city"` or `"items.0.price"` is split on `.` and
//! walked segment by segment. Resolution distinguishes *missing* from
//! *null*: a path that does not reach a value yields `None`, which the
//! matcher treats as the `exists = false` flag for `$exists`.
//!
//! # Array traversal
//!
//! Arrays are navigable two ways:
//!
//! - A segment that parses as a non-negative integer indexes the array
//!   (`"coordinates.0"`).
//! - Any other segment fans out: the walk descends into the **first**
//!   element that is an object containing the segment as a key
//!   (`"projects.rating"` over an array of project objects). The
//!   first-positional-element tie-break is deterministic over array order.
//!
//! On objects a numeric-looking segment is still a literal key, so
//! documents with keys like `"0"` resolve as written.

use crate::value::Value;

/// Resolve a dotted path against a value.
///
/// Returns `Some(&value)` for the resolved leaf, or `None` when any
/// segment fails to resolve. An empty path resolves to the value itself.
///
/// # Examples
///
/// ```
/// use mangomatch::{resolve, Value};
/// use std::collections::HashMap;
///
/// let mut address = HashMap::new();
/// address.insert("city".to_string(), Value::String("New York".to_string()));
/// let mut doc = HashMap::new();
/// doc.insert("address".to_string(), Value::Object(address));
/// let doc = Value::Object(doc);
///
/// assert_eq!(
///     resolve(&doc, "address.city"),
///     Some(&Value::String("New York".to_string()))
/// );
/// assert_eq!(resolve(&doc, "address.zip"), None);
/// ```
pub fn resolve<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(value);
    }
    let mut current = value;
    for segment in path.split('.') {
        current = resolve_segment(current, segment)?;
    }
    Some(current)
}

fn resolve_segment<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(arr) => match segment.parse::<usize>() {
            Ok(index) => arr.get(index),
            // Fan out: first element that is an object carrying the key
            Err(_) => arr.iter().find_map(|item| match item {
                Value::Object(map) => map.get(segment),
                _ => None,
            }),
        },
        _ => None,
    }
}
