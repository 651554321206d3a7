use crate::error_codes;
use crate::loc::SourceLocation;
use crate::messages::GraphMessage;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DirectiveError {
    #[error("Directive `@{directive_name}` failed: {message}")]
    ExecutionFailed {
        directive_name: String,
        message: String,
        location: Option<SourceLocation>,
    },

    #[error("Directive `@{directive_name}` was given an invalid `{argument_name}` argument")]
    InvalidArgument {
        directive_name: String,
        argument_name: String,
        location: Option<SourceLocation>,
    },
}
impl DirectiveError {
    pub fn code(&self) -> &'static str {
        error_codes::DIRECTIVE_EXECUTION_ERROR
    }

    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            Self::ExecutionFailed { location, .. }
            | Self::InvalidArgument { location, .. } => *location,
        }
    }
}
impl std::convert::From<&DirectiveError> for GraphMessage {
    fn from(err: &DirectiveError) -> Self {
        GraphMessage::critical(err.code(), err.to_string())
            .with_location(err.location())
    }
}
