use mangomatch::{check, from_json, QueryError};
use serde_json::json;

fn check_json(query: serde_json::Value) -> Result<(), QueryError> {
    check(&from_json(&query))
}

// ============================================================================
// Section: Well-Formed Queries
// ============================================================================

#[test]
fn accepts_typical_queries() {
    let queries = [
        json!({"age": {"$gt": 30}}),
        json!({"tags": "premium"}),
        json!({"address.city": "New York"}),
        json!({"work.projects.rating": {"$gt": 4}}),
        json!({"scores": {"$size": 4, "$all": [85, 92]}}),
        json!({"work.projects": {"$elemMatch": {"rating": {"$gte": 5}, "tech": "Go"}}}),
        json!({"age": {"$mod": [5, 0]}}),
        json!({"missing": {"$exists": false}}),
        json!({"address.location.coordinates.0": {"$gt": 40}}),
        json!({"$nor": [{"age": 40}, {"status": "inactive"}]}),
        json!({"name": {"$regex": "^Jo"}}),
        json!({"age": {"$not": {"$lt": 18}}}),
        json!({"status": {"$in": ["active", "pending"]}}),
        json!({"age": {"$type": "number"}}),
    ];
    for query in queries {
        assert!(check_json(query.clone()).is_ok(), "rejected {}", query);
    }
}

#[test]
fn accepts_equality_literals_of_any_shape() {
    assert!(check_json(json!({"address": {"city": "NYC", "zip": null}})).is_ok());
    assert!(check_json(json!({"tags": ["a", ["b", {"c": 1}]]})).is_ok());
}

#[test]
fn accepts_empty_query_and_empty_logical_arrays() {
    // Shape-valid even though the empty query matches nothing
    assert!(check_json(json!({})).is_ok());
    assert!(check_json(json!({"$and": []})).is_ok());
}

// ============================================================================
// Section: Shape Violations
// ============================================================================

#[test]
fn rejects_non_object_query() {
    assert!(matches!(
        check_json(json!("age")),
        Err(QueryError::NotAnObject(_, _))
    ));
    assert!(matches!(
        check_json(json!([1, 2])),
        Err(QueryError::NotAnObject(_, _))
    ));
}

#[test]
fn rejects_non_object_logical_element() {
    assert!(matches!(
        check_json(json!({"$and": [{"a": 1}, 5]})),
        Err(QueryError::NotAnObject(_, _))
    ));
}

#[test]
fn rejects_non_array_logical_operand() {
    assert!(matches!(
        check_json(json!({"$or": {"a": 1}})),
        Err(QueryError::BadOperand(_, _))
    ));
}

#[test]
fn rejects_unknown_operators() {
    assert!(matches!(
        check_json(json!({"$where": "true"})),
        Err(QueryError::UnknownOperator(_, _))
    ));
    assert!(matches!(
        check_json(json!({"age": {"$near": 5}})),
        Err(QueryError::UnknownOperator(_, _))
    ));
    assert!(matches!(
        check_json(json!({"age": {"$gt": 18, "$near": 5}})),
        Err(QueryError::UnknownOperator(_, _))
    ));
}

#[test]
fn rejects_bad_operands() {
    let cases = [
        json!({"status": {"$in": "active"}}),
        json!({"age": {"$exists": 1}}),
        json!({"age": {"$not": 25}}),
        json!({"age": {"$not": {}}}),
        json!({"scores": {"$size": -1}}),
        json!({"scores": {"$size": 4.5}}),
        json!({"scores": {"$elemMatch": 5}}),
        json!({"age": {"$type": "double"}}),
        json!({"age": {"$type": 3}}),
        json!({"age": {"$mod": [5]}}),
        json!({"age": {"$mod": [0, 1]}}),
        json!({"age": {"$mod": [5.5, 0]}}),
        json!({"name": {"$regex": 35}}),
    ];
    for query in cases {
        assert!(
            matches!(check_json(query.clone()), Err(QueryError::BadOperand(_, _))),
            "accepted {}",
            query
        );
    }
}

#[test]
fn rejects_invalid_regex_patterns() {
    assert!(matches!(
        check_json(json!({"name": {"$regex": "("}})),
        Err(QueryError::InvalidRegex(_, _))
    ));
}

#[test]
fn walks_into_nested_positions() {
    assert!(matches!(
        check_json(json!({"$and": [{"$or": [{"age": {"$near": 5}}]}]})),
        Err(QueryError::UnknownOperator(_, _))
    ));
    assert!(matches!(
        check_json(json!({"age": {"$not": {"$regex": "("}}})),
        Err(QueryError::InvalidRegex(_, _))
    ));
    assert!(matches!(
        check_json(json!({"items": {"$elemMatch": {"price": {"$mod": [0, 0]}}}})),
        Err(QueryError::BadOperand(_, _))
    ));
}

// ============================================================================
// Section: Diagnostics
// ============================================================================

#[test]
fn errors_carry_a_dotted_location() {
    let err = check_json(json!({"items": {"$elemMatch": {"price": {"$near": 1}}}}))
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("$near"), "message was: {}", message);
    assert!(message.contains("items"), "message was: {}", message);
}

#[test]
fn errors_display_and_implement_error() {
    let err = check_json(json!({"name": {"$regex": "("}})).unwrap_err();
    let _: &dyn std::error::Error = &err;
    assert!(err.to_string().contains("regex"));
}
