use mangomatch::{from_json, resolve, Value};
use serde_json::json;

fn doc() -> Value {
    from_json(&json!({
        "name": "John",
        "age": null,
        "address": {"city": "New York", "zip": "10001"},
        "tags": ["premium", "verified"],
        "items": [
            {"sku": "a-1", "price": 10},
            {"sku": "b-2", "price": 20, "meta": {"color": "red"}},
        ],
        "0": "zero-key",
    }))
}

// ============================================================================
// Section: Object Traversal
// ============================================================================

#[test]
fn top_level_key() {
    assert_eq!(resolve(&doc(), "name"), Some(&Value::String("John".into())));
}

#[test]
fn nested_key() {
    assert_eq!(
        resolve(&doc(), "address.city"),
        Some(&Value::String("New York".into()))
    );
}

#[test]
fn missing_key_is_none() {
    assert_eq!(resolve(&doc(), "address.country"), None);
    assert_eq!(resolve(&doc(), "home.city"), None);
}

#[test]
fn null_is_resolved_not_missing() {
    // A null field exists; only absent paths yield None
    assert_eq!(resolve(&doc(), "age"), Some(&Value::Null));
}

#[test]
fn numeric_segment_on_object_is_a_literal_key() {
    assert_eq!(resolve(&doc(), "0"), Some(&Value::String("zero-key".into())));
}

#[test]
fn scalars_terminate_resolution() {
    assert_eq!(resolve(&doc(), "name.length"), None);
    assert_eq!(resolve(&doc(), "age.anything"), None);
}

// ============================================================================
// Section: Array Traversal
// ============================================================================

#[test]
fn array_index_segment() {
    assert_eq!(
        resolve(&doc(), "tags.0"),
        Some(&Value::String("premium".into()))
    );
    assert_eq!(
        resolve(&doc(), "tags.1"),
        Some(&Value::String("verified".into()))
    );
}

#[test]
fn array_index_out_of_bounds_is_none() {
    assert_eq!(resolve(&doc(), "tags.2"), None);
}

#[test]
fn negative_index_is_not_an_index() {
    // "-1" does not parse as a non-negative integer, so it fans out as a
    // key and finds nothing among string elements
    assert_eq!(resolve(&doc(), "tags.-1"), None);
}

#[test]
fn fan_out_through_object_elements() {
    assert_eq!(
        resolve(&doc(), "items.sku"),
        Some(&Value::String("a-1".into()))
    );
}

#[test]
fn fan_out_picks_first_element_carrying_the_key() {
    // Both elements have "price"; the first positional one wins
    assert_eq!(resolve(&doc(), "items.price"), Some(&Value::Integer(10)));
    // Only the second element has "meta"
    assert_eq!(
        resolve(&doc(), "items.meta.color"),
        Some(&Value::String("red".into()))
    );
}

#[test]
fn fan_out_skips_non_object_elements() {
    let value = from_json(&json!({"mixed": [1, "two", {"k": 3}]}));
    assert_eq!(resolve(&value, "mixed.k"), Some(&Value::Integer(3)));
}

#[test]
fn index_beats_fan_out_when_segment_is_numeric() {
    let value = from_json(&json!({"rows": [{"0": "keyed"}, {"0": "other"}]}));
    // "1" indexes the array rather than looking up the key "1"
    assert_eq!(
        resolve(&value, "rows.1.0"),
        Some(&Value::String("other".into()))
    );
}

#[test]
fn empty_path_resolves_to_the_value_itself() {
    let value = Value::Integer(7);
    assert_eq!(resolve(&value, ""), Some(&Value::Integer(7)));
}
