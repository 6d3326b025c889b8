//! Per-operator predicate evaluation.
//!
//! An operator document is an object whose keys all begin with `$`, applied
//! to a single resolved field value. All listed operators must hold; a
//! single unknown operator falsifies the whole group. Operand shape
//! violations falsify rather than raise, keeping the engine total.
//!
//! Comparison operators (`$eq`, `$gt`, ...) fan out one level over array
//! field values: the predicate holds if any element satisfies it. `$size`,
//! `$all`, and `$elemMatch` are whole-array operators and never fan out.

use std::cmp::Ordering;
use std::collections::HashMap;

use regex::Regex;

use crate::compare::{compare, equals};
use crate::matcher::match_value;
use crate::value::{TypeTag, Value};

/// Evaluate an operator document against a resolved field value.
///
/// Conjunction across operators; an empty document is vacuously true.
pub(crate) fn eval_operators(operators: &HashMap<String, Value>, field: &Value) -> bool {
    operators
        .iter()
        .all(|(op, operand)| eval_operator(op, operand, field))
}

/// Dispatch a single operator to its implementation
fn eval_operator(op: &str, operand: &Value, field: &Value) -> bool {
    match op {
        "$eq" => eval_eq(operand, field),
        "$ne" => !eval_eq(operand, field),
        "$gt" => any_ordering(field, operand, Ordering::Greater, false),
        "$gte" => any_ordering(field, operand, Ordering::Greater, true),
        "$lt" => any_ordering(field, operand, Ordering::Less, false),
        "$lte" => any_ordering(field, operand, Ordering::Less, true),
        "$in" => eval_in(operand, field),
        "$nin" => !eval_in(operand, field),
        "$exists" => matches!(operand, Value::Boolean(wanted) if *wanted),
        "$not" => eval_not(operand, field),
        "$regex" => eval_regex(operand, field),
        "$size" => eval_size(operand, field),
        "$all" => eval_all(operand, field),
        "$elemMatch" => eval_elem_match(operand, field),
        "$type" => eval_type(operand, field),
        "$mod" => eval_mod(operand, field),
        _ => false,
    }
}

/// `$eq`: equality with array fan-out. The field matches if it equals the
/// operand as a whole or, for array fields, if any element does. `$ne` is
/// the strict negation of this predicate.
fn eval_eq(operand: &Value, field: &Value) -> bool {
    if equals(operand, field) {
        return true;
    }
    if let Value::Array(items) = field {
        return items.iter().any(|item| equals(operand, item));
    }
    false
}

/// Ordered comparison (`$gt`/`$gte`/`$lt`/`$lte`) with one-level fan-out
/// over array fields. Non-comparable kind pairs never satisfy.
fn any_ordering(field: &Value, operand: &Value, wanted: Ordering, or_equal: bool) -> bool {
    if let Value::Array(items) = field {
        return items
            .iter()
            .any(|item| ordering_holds(item, operand, wanted, or_equal));
    }
    ordering_holds(field, operand, wanted, or_equal)
}

fn ordering_holds(field: &Value, operand: &Value, wanted: Ordering, or_equal: bool) -> bool {
    match compare(field, operand) {
        Some(ord) => ord == wanted || (or_equal && ord == Ordering::Equal),
        None => false,
    }
}

/// `$in`: field equals any operand element, or any element of an array
/// field does. An empty operand array never matches.
fn eval_in(operand: &Value, field: &Value) -> bool {
    let Value::Array(choices) = operand else {
        return false;
    };
    if choices.iter().any(|choice| equals(choice, field)) {
        return true;
    }
    if let Value::Array(items) = field {
        return items
            .iter()
            .any(|item| choices.iter().any(|choice| equals(choice, item)));
    }
    false
}

/// `$not`: negation of a nested operator document. The operand must be a
/// non-empty object whose keys are all operators; anything else falsifies.
fn eval_not(operand: &Value, field: &Value) -> bool {
    match operand {
        Value::Object(sub) if !sub.is_empty() && sub.keys().all(|k| k.starts_with('$')) => {
            !eval_operators(sub, field)
        }
        _ => false,
    }
}

/// `$regex`: string match against a pattern in the `regex` crate dialect.
/// Array fields match if any string element matches. The pattern is
/// compiled once per evaluation; a compile failure falsifies.
fn eval_regex(operand: &Value, field: &Value) -> bool {
    let Value::String(pattern) = operand else {
        return false;
    };
    let Ok(re) = Regex::new(pattern) else {
        return false;
    };
    match field {
        Value::String(s) => re.is_match(s),
        Value::Array(items) => items
            .iter()
            .any(|item| matches!(item, Value::String(s) if re.is_match(s))),
        _ => false,
    }
}

/// `$size`: exact array length. The operand must be a non-negative
/// integer; integer-valued floats are accepted, fractional ones are not.
fn eval_size(operand: &Value, field: &Value) -> bool {
    let Some(size) = operand.as_exact_int() else {
        return false;
    };
    if size < 0 {
        return false;
    }
    matches!(field, Value::Array(items) if items.len() as i64 == size)
}

/// `$all`: every operand element is equal to some element of the array
/// field. Operand elements are literals, never regexes. Empty operand
/// matches any array field.
fn eval_all(operand: &Value, field: &Value) -> bool {
    let (Value::Array(wanted), Value::Array(items)) = (operand, field) else {
        return false;
    };
    wanted
        .iter()
        .all(|w| items.iter().any(|item| equals(w, item)))
}

/// `$elemMatch`: some element of the array field satisfies the criteria
/// object. Operator-keyed criteria apply to the element directly; field
/// keys look up into object elements and match recursively. An empty
/// criteria object matches any non-empty array.
fn eval_elem_match(operand: &Value, field: &Value) -> bool {
    let Value::Object(criteria) = operand else {
        return false;
    };
    let Value::Array(items) = field else {
        return false;
    };
    items.iter().any(|item| elem_matches(criteria, item))
}

fn elem_matches(criteria: &HashMap<String, Value>, item: &Value) -> bool {
    criteria.iter().all(|(key, expected)| {
        if key.starts_with('$') {
            eval_operator(key, expected, item)
        } else {
            match item {
                Value::Object(map) => match map.get(key) {
                    Some(field) => match_value(expected, field),
                    None => false,
                },
                _ => false,
            }
        }
    })
}

/// `$type`: the field's kind matches the named tag. Unknown tags falsify.
fn eval_type(operand: &Value, field: &Value) -> bool {
    let Value::String(name) = operand else {
        return false;
    };
    TypeTag::parse(name) == Some(field.type_tag())
}

/// `$mod`: `[divisor, remainder]` with an integer-valued divisor > 0.
/// Field values truncate toward zero; array fields fan out.
fn eval_mod(operand: &Value, field: &Value) -> bool {
    let Value::Array(params) = operand else {
        return false;
    };
    let [divisor, remainder] = params.as_slice() else {
        return false;
    };
    let (Some(divisor), Some(remainder)) = (divisor.as_exact_int(), remainder.as_exact_int())
    else {
        return false;
    };
    if divisor <= 0 {
        return false;
    }
    if let Value::Array(items) = field {
        return items.iter().any(|item| mod_holds(item, divisor, remainder));
    }
    mod_holds(field, divisor, remainder)
}

fn mod_holds(value: &Value, divisor: i64, remainder: i64) -> bool {
    match value.as_int() {
        Some(n) => n % divisor == remainder,
        None => false,
    }
}
