use crate::execution::Principal;
use indexmap::IndexMap;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

/// One request to execute a query document.
///
/// Deserializes from the conventional `{"query", "operationName",
/// "variables"}` JSON body; the remaining fields are set by the host.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    #[serde(skip)]
    pub cancellation_token: CancellationToken,

    #[serde(default)]
    pub operation_name: Option<String>,

    #[serde(skip)]
    pub principal: Option<Principal>,

    #[serde(rename = "query")]
    pub query_text: String,

    /// The source value top-level fields resolve against.
    #[serde(skip)]
    pub root_value: Option<serde_json::Value>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub variables: IndexMap<String, serde_json::Value>,
}
impl QueryRequest {
    pub fn new(query_text: impl Into<String>) -> Self {
        Self {
            query_text: query_text.into(),
            ..Self::default()
        }
    }

    pub fn with_cancellation_token(mut self, cancellation_token: CancellationToken) -> Self {
        self.cancellation_token = cancellation_token;
        self
    }

    pub fn with_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    pub fn with_principal(mut self, principal: Principal) -> Self {
        self.principal = Some(principal);
        self
    }

    pub fn with_root_value(mut self, root_value: serde_json::Value) -> Self {
        self.root_value = Some(root_value);
        self
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.variables.insert(name.into(), value);
        self
    }

    pub fn with_variables(mut self, variables: IndexMap<String, serde_json::Value>) -> Self {
        self.variables = variables;
        self
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<IndexMap<String, serde_json::Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<IndexMap<String, serde_json::Value>>::deserialize(deserializer)
        .map(Option::unwrap_or_default)
}
