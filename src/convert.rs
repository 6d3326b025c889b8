//! Conversion between the canonical value model and `serde_json::Value`.
//!
//! Documents and queries usually arrive already parsed into the
//! ecosystem's JSON representation; this module is the normalization shim
//! that carries them into the engine's [`Value`] tree and back.
//!
//! # Number mapping
//!
//! The integer/float split is preserved where the representation allows:
//! JSON numbers representable as `i64` become [`Value::Integer`],
//! everything else becomes [`Value::Float`] (a `u64` above `i64::MAX`
//! narrows to float, losing precision). Going back, non-finite floats
//! have no JSON form and serialize as null.

use crate::matcher::matches;
use crate::value::Value;

/// Convert an ecosystem JSON value into the canonical value model.
pub fn from_json(value: &serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(*b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => n.as_f64().map_or(Value::Null, Value::Float),
        },
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => Value::Array(items.iter().map(from_json).collect()),
        serde_json::Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), from_json(v)))
                .collect(),
        ),
    }
}

/// Convert a canonical value back into the ecosystem JSON representation.
///
/// Object key order is whatever the map yields; the matcher attaches no
/// meaning to it.
pub fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Integer(n) => serde_json::Value::Number((*n).into()),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Object(map) => serde_json::Value::Object(
            map.iter().map(|(k, v)| (k.clone(), to_json(v))).collect(),
        ),
    }
}

/// Match over the ecosystem JSON representation.
///
/// Equivalent to converting both arguments with [`from_json`] and calling
/// [`matches`].
///
/// # Examples
///
/// ```
/// use mangomatch::matches_json;
/// use serde_json::json;
///
/// let doc = json!({"tags": ["premium", "verified"]});
/// assert!(matches_json(&json!({"tags": "premium"}), &doc));
/// ```
pub fn matches_json(query: &serde_json::Value, doc: &serde_json::Value) -> bool {
    matches(&from_json(query), &from_json(doc))
}

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        from_json(value)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        from_json(&value)
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        to_json(value)
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        to_json(&value)
    }
}
