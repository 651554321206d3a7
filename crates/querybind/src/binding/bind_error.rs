use crate::document::OperationKind;
use crate::error_codes;
use crate::loc::SourceLocation;
use crate::messages::GraphMessage;

/// A problem found while binding a document against its schema.
///
/// Binding never stops at the first problem: each one is recorded on the
/// resulting [`QueryDocument`](crate::document::QueryDocument) and the
/// offending part is still materialized (unbound) so later tooling can
/// inspect it.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum BindError {
    #[error("Argument `{argument_name}` is supplied more than once")]
    DuplicateArgument {
        argument_name: String,
        location: SourceLocation,
    },

    #[error("Variable `${variable_name}` is declared more than once")]
    DuplicateVariable {
        variable_name: String,
        location: SourceLocation,
    },

    #[error("Field `{field_name}` returns the leaf type `{type_name}` and cannot have a selection set")]
    LeafFieldSelectionSet {
        field_name: String,
        type_name: String,
        location: SourceLocation,
    },

    #[error("Missing required argument `{argument_name}` on `{target_name}`")]
    MissingRequiredArgument {
        argument_name: String,
        target_name: String,
        location: SourceLocation,
    },

    #[error("Field `{field_name}` of type `{type_name}` must have a selection set")]
    MissingSelectionSet {
        field_name: String,
        type_name: String,
        location: SourceLocation,
    },

    #[error("Fragments can only be applied to composite types, but `{type_name}` is not one")]
    NonCompositeTypeCondition {
        type_name: String,
        location: SourceLocation,
    },

    #[error("Variable `${variable_name}` cannot be of non-input type `{type_name}`")]
    NonInputVariableType {
        variable_name: String,
        type_name: String,
        location: SourceLocation,
    },

    #[error("Syntax error: {message}")]
    SyntaxError {
        message: String,
    },

    #[error("Cannot query field `{field_name}` on type `{type_name}`")]
    UndefinedField {
        type_name: String,
        field_name: String,
        location: SourceLocation,
    },

    #[error("The schema does not define a {operation} root operation type")]
    UndefinedRootOperationType {
        operation: OperationKind,
        location: SourceLocation,
    },

    #[error("Unknown type `{type_name}` in type condition")]
    UndefinedTypeCondition {
        type_name: String,
        location: SourceLocation,
    },

    #[error("Variable `${variable_name}` is declared with unknown type `{type_name}`")]
    UndefinedVariableType {
        variable_name: String,
        type_name: String,
        location: SourceLocation,
    },

    #[error("Unknown argument `{argument_name}` on `{target_name}`")]
    UnknownArgument {
        argument_name: String,
        target_name: String,
        location: SourceLocation,
    },
}
impl BindError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::SyntaxError { .. } => error_codes::SYNTAX_ERROR,
            _ => error_codes::INVALID_DOCUMENT,
        }
    }

    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            Self::DuplicateArgument { location, .. }
            | Self::DuplicateVariable { location, .. }
            | Self::LeafFieldSelectionSet { location, .. }
            | Self::MissingRequiredArgument { location, .. }
            | Self::MissingSelectionSet { location, .. }
            | Self::NonCompositeTypeCondition { location, .. }
            | Self::NonInputVariableType { location, .. }
            | Self::UndefinedField { location, .. }
            | Self::UndefinedRootOperationType { location, .. }
            | Self::UndefinedTypeCondition { location, .. }
            | Self::UndefinedVariableType { location, .. }
            | Self::UnknownArgument { location, .. } => Some(*location),
            Self::SyntaxError { .. } => None,
        }
    }
}
impl std::convert::From<&BindError> for GraphMessage {
    fn from(err: &BindError) -> Self {
        GraphMessage::critical(err.code(), err.to_string())
            .with_location(err.location())
    }
}
