use crate::error_codes;
use crate::loc::SourceLocation;
use crate::messages::GraphMessage;
use crate::types::TypeAnnotation;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum VariableResolutionError {
    #[error("Variable `${variable_name}` of type `{type_annotation}` was given an invalid value: {value}")]
    InvalidValue {
        variable_name: String,
        type_annotation: TypeAnnotation,
        value: String,
        location: Option<SourceLocation>,
    },

    #[error("Variable `${variable_name}` of non-null type `{type_annotation}` requires a value")]
    MissingValue {
        variable_name: String,
        type_annotation: TypeAnnotation,
        location: Option<SourceLocation>,
    },
}
impl VariableResolutionError {
    pub fn code(&self) -> &'static str {
        error_codes::INVALID_VARIABLE_VALUE
    }

    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            Self::InvalidValue { location, .. }
            | Self::MissingValue { location, .. } => *location,
        }
    }
}
impl std::convert::From<&VariableResolutionError> for GraphMessage {
    fn from(err: &VariableResolutionError) -> Self {
        GraphMessage::critical(err.code(), err.to_string())
            .with_location(err.location())
    }
}
