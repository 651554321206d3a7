use crate::messages::GraphMessage;
use crate::messages::MessageSeverity;
use crate::response_path::PathSegment;
use serde::Serialize;

/// The final result of a request, serializable to the standard GraphQL
/// response shape.
///
/// `errors` holds every message recorded for the request; only those of
/// warning severity or worse are serialized.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryResponse {
    pub data: Option<serde_json::Map<String, serde_json::Value>>,
    pub errors: Vec<GraphMessage>,
}
impl QueryResponse {
    pub fn has_critical_errors(&self) -> bool {
        self.errors.iter().any(GraphMessage::is_critical)
    }

    pub fn is_success(&self) -> bool {
        self.data.is_some() && !self.has_critical_errors()
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut response = serde_json::Map::new();
        response.insert(
            "data".to_string(),
            self.data.clone().map(serde_json::Value::Object).unwrap_or_default(),
        );

        let errors: Vec<serde_json::Value> = self.errors.iter()
            .filter(|msg| msg.severity() >= MessageSeverity::Warning)
            .map(error_to_json)
            .collect();
        if !errors.is_empty() {
            response.insert("errors".to_string(), serde_json::Value::Array(errors));
        }
        serde_json::Value::Object(response)
    }
}
impl Serialize for QueryResponse {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

fn error_to_json(msg: &GraphMessage) -> serde_json::Value {
    let mut error = serde_json::Map::new();
    error.insert("message".to_string(), msg.message().into());
    if let Some(location) = msg.location() {
        error.insert("locations".to_string(), serde_json::json!([{
            "line": location.line,
            "column": location.column,
        }]));
    }
    if let Some(path) = msg.path() {
        let segments = path.segments()
            .iter()
            .map(|segment| match segment {
                PathSegment::Field(name) => serde_json::Value::String(name.to_string()),
                PathSegment::Index(index) => serde_json::Value::from(*index),
            })
            .collect();
        error.insert("path".to_string(), serde_json::Value::Array(segments));
    }
    error.insert("extensions".to_string(), serde_json::json!({
        "code": msg.code(),
        "severity": format!("{:?}", msg.severity()).to_uppercase(),
    }));
    serde_json::Value::Object(error)
}
