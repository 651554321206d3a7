use crate::error_codes;
use crate::messages::GraphMessage;

/// Why no operation could be selected from a document.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum PlanError {
    #[error("The document does not contain any operations")]
    NoOperations,

    #[error("The document contains several operations; an operation name is required")]
    OperationNameRequired,

    #[error("Unknown operation `{operation_name}`")]
    UnknownOperation {
        operation_name: String,
    },
}
impl PlanError {
    pub fn code(&self) -> &'static str {
        error_codes::UNKNOWN_OPERATION
    }
}
impl std::convert::From<&PlanError> for GraphMessage {
    fn from(err: &PlanError) -> Self {
        GraphMessage::critical(err.code(), err.to_string())
    }
}
