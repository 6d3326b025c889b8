//! Equality and ordering over document values.
//!
//! Integers and floats compare as one numeric domain; strings compare
//! lexicographically over their code units; arrays and objects compare by
//! deep structure. Every other cross-kind pair is unequal and unordered,
//! so predicates built on top of these functions simply fail instead of
//! raising.

use std::cmp::Ordering;

use crate::value::Value;

/// Deep structural equality with numeric promotion.
///
/// Integer/Float pairs are equal when their numeric values coincide.
/// Arrays must have the same length and element-wise equal contents;
/// objects must have the same key set with equal values per key.
pub fn equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Boolean(a), Value::Boolean(b)) => a == b,
        (Value::Integer(a), Value::Integer(b)) => a == b,
        (Value::Float(a), Value::Float(b)) => a == b,
        (Value::Integer(a), Value::Float(b)) => (*a as f64) == *b,
        (Value::Float(a), Value::Integer(b)) => *a == (*b as f64),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| equals(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(k, v)| b.get(k).is_some_and(|w| equals(v, w)))
        }
        _ => false,
    }
}

/// Compare two values, returning an ordering if the kinds are comparable.
///
/// - Numbers: compared after promoting to f64
/// - Strings: compared lexicographically
/// - Everything else (booleans, nulls, arrays, objects, mixed kinds):
///   returns `None`
pub fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        (Value::Integer(a), Value::Float(b)) => (*a as f64).partial_cmp(b),
        (Value::Float(a), Value::Integer(b)) => a.partial_cmp(&(*b as f64)),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => None,
    }
}
