//! Top-level query interpretation.
//!
//! A query is an object whose entries are evaluated as a conjunction:
//! logical keys (`$and`, `$or`, `$nor`) combine sub-queries, every other
//! key is a dotted field path matched against the document. The engine is
//! total: malformed queries falsify, they never raise.

use std::collections::HashMap;

use tracing::trace;

use crate::compare::equals;
use crate::operators::eval_operators;
use crate::path::resolve;
use crate::value::{kind_name, Value};

/// Match a document against a MongoDB-style query.
///
/// Both arguments are expected to be [`Value::Object`]s; anything else
/// falsifies. The empty query `{}` matches nothing. Mixed top-level
/// entries (logical keys alongside field paths) are conjoined, so the
/// verdict never depends on object iteration order.
///
/// # Examples
///
/// ```
/// use mangomatch::{from_json, matches};
/// use serde_json::json;
///
/// let doc = from_json(&json!({"name": "John Doe", "age": 35, "status": "active"}));
/// assert!(matches(&from_json(&json!({"age": {"$gt": 30}})), &doc));
/// assert!(!matches(&from_json(&json!({"status": "inactive"})), &doc));
/// ```
pub fn matches(query: &Value, doc: &Value) -> bool {
    let verdict = match_query(query, doc);
    trace!(verdict, "matched document against query");
    verdict
}

/// Recursion point shared by the public entry and the logical combinators
pub(crate) fn match_query(query: &Value, doc: &Value) -> bool {
    match query {
        Value::Object(entries) if !entries.is_empty() => entries
            .iter()
            .all(|(key, operand)| match_entry(key, operand, doc)),
        _ => false,
    }
}

fn match_entry(key: &str, operand: &Value, doc: &Value) -> bool {
    match key {
        "$and" => eval_and(operand, doc),
        "$or" => eval_or(operand, doc).unwrap_or(false),
        "$nor" => eval_or(operand, doc).map_or(false, |matched| !matched),
        key if key.starts_with('$') => false,
        path => match resolve(doc, path) {
            Some(field) => match_value(operand, field),
            None => missing_field_entry(operand),
        },
    }
}

/// `$and`: every sub-query matches. Empty array is true; a non-array
/// operand or a non-object element fails the entry.
fn eval_and(operand: &Value, doc: &Value) -> bool {
    let Value::Array(conditions) = operand else {
        return false;
    };
    if !conditions.iter().all(|c| matches!(c, Value::Object(_))) {
        return false;
    }
    conditions.iter().all(|c| match_query(c, doc))
}

/// `$or`: any sub-query matches. Empty array is false. `None` signals a
/// malformed operand, which fails the entry for both `$or` and `$nor`
/// instead of being negated into a spurious `$nor` match.
fn eval_or(operand: &Value, doc: &Value) -> Option<bool> {
    let Value::Array(conditions) = operand else {
        return None;
    };
    if !conditions.iter().all(|c| matches!(c, Value::Object(_))) {
        return None;
    }
    Some(conditions.iter().any(|c| match_query(c, doc)))
}

/// Entry outcome for a field path that did not resolve. Only an operator
/// document carrying `$exists` can still succeed; the missing value never
/// reaches operator evaluation.
fn missing_field_entry(operand: &Value) -> bool {
    match operand {
        Value::Object(ops) if is_operator_document(ops) => {
            matches!(ops.get("$exists"), Some(Value::Boolean(false)))
        }
        _ => false,
    }
}

/// Match a query value against a resolved field value.
///
/// Operator documents delegate to the operator evaluator; other objects
/// compare by deep structure; scalars and arrays use equality with
/// implicit array containment.
pub(crate) fn match_value(query_value: &Value, field_value: &Value) -> bool {
    match query_value {
        Value::Object(entries) if is_operator_document(entries) => {
            eval_operators(entries, field_value)
        }
        Value::Object(_) => equals(query_value, field_value),
        _ => {
            if let Value::Array(items) = field_value {
                if items.iter().any(|item| equals(query_value, item)) {
                    return true;
                }
            }
            equals(query_value, field_value)
        }
    }
}

/// An object whose keys all begin with `$`. Vacuously true for `{}`.
fn is_operator_document(entries: &HashMap<String, Value>) -> bool {
    entries.keys().all(|k| k.starts_with('$'))
}

// ============================================================================
// Strict mode: query diagnostics
// ============================================================================

/// Shape problems reported by [`check`].
///
/// Matching itself never raises these; they exist so callers can lint
/// queries (for example user-supplied filters) before running them.
#[derive(Debug, Clone)]
pub enum QueryError {
    /// The query, or a logical sub-query element, is not an object
    NotAnObject(String, String),

    /// A `$`-prefixed key is not a recognized operator at its position
    UnknownOperator(String, String),

    /// An operand has the wrong kind or arity for its operator
    BadOperand(String, String),

    /// A `$regex` pattern failed to compile
    InvalidRegex(String, String),
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::NotAnObject(at, found) => {
                write!(f, "expected an object at '{}', found {}", at, found)
            }
            QueryError::UnknownOperator(at, op) => {
                write!(f, "unknown operator '{}' at '{}'", op, at)
            }
            QueryError::BadOperand(at, msg) => write!(f, "bad operand at '{}': {}", at, msg),
            QueryError::InvalidRegex(at, msg) => write!(f, "invalid regex at '{}': {}", at, msg),
        }
    }
}

impl std::error::Error for QueryError {}

/// Operators that accept an operand of any shape
const COMPARISON_OPS: &[&str] = &["$eq", "$ne", "$gt", "$gte", "$lt", "$lte"];

/// Lint a query, reporting the first shape violation.
///
/// `check` is diagnostics only: it never changes what [`matches`] returns.
/// A query that passes `check` exercises no falsify-on-malformed paths,
/// so its verdicts are driven purely by the document.
pub fn check(query: &Value) -> Result<(), QueryError> {
    check_query(query, "$")
}

fn check_query(query: &Value, at: &str) -> Result<(), QueryError> {
    let Value::Object(entries) = query else {
        return Err(QueryError::NotAnObject(at.into(), kind_name(query).into()));
    };
    for (key, operand) in entries {
        match key.as_str() {
            "$and" | "$or" | "$nor" => check_logical(key, operand, at)?,
            key if key.starts_with('$') => {
                return Err(QueryError::UnknownOperator(at.into(), key.into()));
            }
            path => check_value(operand, &join(at, path))?,
        }
    }
    Ok(())
}

fn check_logical(key: &str, operand: &Value, at: &str) -> Result<(), QueryError> {
    let at = join(at, key);
    let Value::Array(conditions) = operand else {
        return Err(QueryError::BadOperand(
            at,
            format!("{} takes an array of sub-queries", key),
        ));
    };
    for (i, condition) in conditions.iter().enumerate() {
        check_query(condition, &format!("{}[{}]", at, i))?;
    }
    Ok(())
}

fn check_value(operand: &Value, at: &str) -> Result<(), QueryError> {
    match operand {
        Value::Object(entries) if is_operator_document(entries) => {
            for (op, arg) in entries {
                check_operator(op, arg, at)?;
            }
            Ok(())
        }
        // Non-operator objects, scalars, and arrays are equality literals;
        // every shape is well-formed
        _ => Ok(()),
    }
}

fn check_operator(op: &str, operand: &Value, at: &str) -> Result<(), QueryError> {
    let here = join(at, op);
    match op {
        op if COMPARISON_OPS.contains(&op) => Ok(()),
        "$in" | "$nin" | "$all" => match operand {
            Value::Array(_) => Ok(()),
            other => Err(QueryError::BadOperand(
                here,
                format!("{} takes an array, found {}", op, kind_name(other)),
            )),
        },
        "$exists" => match operand {
            Value::Boolean(_) => Ok(()),
            other => Err(QueryError::BadOperand(
                here,
                format!("$exists takes a boolean, found {}", kind_name(other)),
            )),
        },
        "$not" => match operand {
            Value::Object(sub) if !sub.is_empty() && is_operator_document(sub) => {
                for (inner, arg) in sub {
                    check_operator(inner, arg, &here)?;
                }
                Ok(())
            }
            other => Err(QueryError::BadOperand(
                here,
                format!(
                    "$not takes a non-empty operator document, found {}",
                    kind_name(other)
                ),
            )),
        },
        "$regex" => match operand {
            Value::String(pattern) => regex::Regex::new(pattern)
                .map(|_| ())
                .map_err(|e| QueryError::InvalidRegex(here, e.to_string())),
            other => Err(QueryError::BadOperand(
                here,
                format!("$regex takes a string pattern, found {}", kind_name(other)),
            )),
        },
        "$size" => match operand.as_exact_int() {
            Some(n) if n >= 0 => Ok(()),
            _ => Err(QueryError::BadOperand(
                here,
                format!(
                    "$size takes a non-negative integer, found {}",
                    kind_name(operand)
                ),
            )),
        },
        "$elemMatch" => match operand {
            Value::Object(criteria) => {
                for (key, expected) in criteria {
                    if key.starts_with('$') {
                        check_operator(key, expected, &here)?;
                    } else {
                        check_value(expected, &join(&here, key))?;
                    }
                }
                Ok(())
            }
            other => Err(QueryError::BadOperand(
                here,
                format!(
                    "$elemMatch takes a criteria object, found {}",
                    kind_name(other)
                ),
            )),
        },
        "$type" => match operand {
            Value::String(name) if crate::value::TypeTag::parse(name).is_some() => Ok(()),
            Value::String(name) => Err(QueryError::BadOperand(
                here,
                format!("unknown type tag '{}'", name),
            )),
            other => Err(QueryError::BadOperand(
                here,
                format!("$type takes a type name, found {}", kind_name(other)),
            )),
        },
        "$mod" => match operand {
            Value::Array(params) if params.len() == 2 => {
                match (params[0].as_exact_int(), params[1].as_exact_int()) {
                    (Some(divisor), Some(_)) if divisor > 0 => Ok(()),
                    (Some(_), Some(_)) => Err(QueryError::BadOperand(
                        here,
                        "$mod divisor must be positive".into(),
                    )),
                    _ => Err(QueryError::BadOperand(
                        here,
                        "$mod takes two integer-valued numbers".into(),
                    )),
                }
            }
            _ => Err(QueryError::BadOperand(
                here,
                "$mod takes a [divisor, remainder] pair".into(),
            )),
        },
        _ => Err(QueryError::UnknownOperator(at.into(), op.into())),
    }
}

fn join(at: &str, segment: &str) -> String {
    format!("{}.{}", at, segment)
}
