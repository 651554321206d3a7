use crate::error_codes;
use crate::messages::GraphMessage;
use crate::response_path::ResponsePath;

/// The error type field resolvers and directive executors fail with.
pub type ResolverError = Box<dyn std::error::Error + Send + Sync>;

/// A failure raised while resolving one field.
///
/// The resolver's own error is kept as `source`, so callers can
/// `downcast_ref` it back to whatever type the resolver raised.
#[derive(Debug, thiserror::Error)]
#[error("Failed to resolve `{path}` ({origin}): {source}")]
pub struct ExecutionFault {
    /// Where the fault came from, e.g. `Query.donut`.
    pub origin: String,
    pub path: ResponsePath,
    pub source: ResolverError,
}
impl ExecutionFault {
    pub fn new(
        origin: impl Into<String>,
        path: ResponsePath,
        source: impl Into<ResolverError>,
    ) -> Self {
        Self {
            origin: origin.into(),
            path,
            source: source.into(),
        }
    }

    pub fn to_message(&self) -> GraphMessage {
        GraphMessage::critical(error_codes::EXECUTION_ERROR, self.source.to_string())
            .with_path(self.path.clone())
    }
}
