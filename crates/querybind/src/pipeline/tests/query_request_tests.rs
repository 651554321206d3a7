use crate::pipeline::QueryRequest;
use serde_json::json;

#[test]
fn deserializes_a_conventional_request_body() {
    let request: QueryRequest = serde_json::from_value(json!({
        "query": "query Donut($id: ID!) { donut(id: $id) { name } }",
        "operationName": "Donut",
        "variables": { "id": "42" },
    })).unwrap();

    assert_eq!(request.operation_name.as_deref(), Some("Donut"));
    assert_eq!(request.variables.get("id"), Some(&json!("42")));
    assert!(request.principal.is_none());
    assert!(request.root_value.is_none());
    assert!(!request.cancellation_token.is_cancelled());
}

#[test]
fn null_or_missing_variables_are_empty() {
    let request: QueryRequest = serde_json::from_value(json!({
        "query": "{ greeting }",
        "variables": null,
    })).unwrap();
    assert!(request.variables.is_empty());
    assert!(request.operation_name.is_none());

    let request: QueryRequest = serde_json::from_value(json!({ "query": "{ greeting }" })).unwrap();
    assert!(request.variables.is_empty());
}

#[test]
fn builder_preserves_variable_order() {
    let request = QueryRequest::new("{ greeting }")
        .with_variable("b", json!(2))
        .with_variable("a", json!(1));
    let names: Vec<&str> = request.variables.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["b", "a"]);
}
