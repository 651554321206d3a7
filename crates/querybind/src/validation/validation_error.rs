use crate::error_codes;
use crate::loc::SourceLocation;
use crate::messages::GraphMessage;
use crate::messages::MessageSeverity;
use crate::types::DirectiveLocation;
use crate::types::TypeAnnotation;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Non-repeatable directive `@{directive_name}` is applied more than once at the same location")]
    DuplicateDirective {
        directive_name: String,
        location: Option<SourceLocation>,
    },

    #[error("Fragment `{fragment_name}` is defined more than once")]
    DuplicateFragmentName {
        fragment_name: String,
        location: Option<SourceLocation>,
    },

    #[error("Operation name `{operation_name}` is used more than once")]
    DuplicateOperationName {
        operation_name: String,
        location: Option<SourceLocation>,
    },

    #[error("Fragment spreads form a cycle: {}", .cycle_path.join(" -> "))]
    FragmentCycle {
        cycle_path: Vec<String>,
        location: Option<SourceLocation>,
    },

    #[error(
        "Variable `${variable_name}` of type `{variable_type}` cannot be used where \
        `{location_type}` is expected"
    )]
    IncompatibleVariableUsage {
        variable_name: String,
        variable_type: TypeAnnotation,
        location_type: TypeAnnotation,
        location: Option<SourceLocation>,
    },

    #[error("Directive `@{directive_name}` may not be used on {directive_location}")]
    MisplacedDirective {
        directive_name: String,
        directive_location: DirectiveLocation,
        location: Option<SourceLocation>,
    },

    #[error("A document may contain at most one anonymous operation")]
    MultipleAnonymousOperations {
        location: Option<SourceLocation>,
    },

    #[error("Unknown fragment `{fragment_name}`")]
    UndefinedFragment {
        fragment_name: String,
        location: Option<SourceLocation>,
    },

    #[error("Variable `${variable_name}` is not declared by operation `{operation_name}`")]
    UndefinedVariable {
        variable_name: String,
        operation_name: String,
        location: Option<SourceLocation>,
    },

    #[error("Unknown directive `@{directive_name}`")]
    UnknownDirective {
        directive_name: String,
        location: Option<SourceLocation>,
    },

    #[error("Fragment `{fragment_name}` is never used")]
    UnreferencedFragment {
        fragment_name: String,
        location: Option<SourceLocation>,
    },

    #[error("Variable `${variable_name}` is never used in operation `{operation_name}`")]
    UnusedVariable {
        variable_name: String,
        operation_name: String,
        location: Option<SourceLocation>,
    },
}
impl ValidationError {
    pub fn code(&self) -> &'static str {
        error_codes::INVALID_DOCUMENT
    }

    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            Self::DuplicateDirective { location, .. }
            | Self::DuplicateFragmentName { location, .. }
            | Self::DuplicateOperationName { location, .. }
            | Self::FragmentCycle { location, .. }
            | Self::IncompatibleVariableUsage { location, .. }
            | Self::MisplacedDirective { location, .. }
            | Self::MultipleAnonymousOperations { location }
            | Self::UndefinedFragment { location, .. }
            | Self::UndefinedVariable { location, .. }
            | Self::UnknownDirective { location, .. }
            | Self::UnreferencedFragment { location, .. }
            | Self::UnusedVariable { location, .. } => *location,
        }
    }

    /// Unused declarations are reported but do not invalidate a document;
    /// a directive may legitimately remove the only usage at execution time.
    pub fn severity(&self) -> MessageSeverity {
        match self {
            Self::UnreferencedFragment { .. } | Self::UnusedVariable { .. } =>
                MessageSeverity::Warning,
            _ => MessageSeverity::Critical,
        }
    }

    pub fn is_critical(&self) -> bool {
        self.severity().is_critical()
    }
}
impl std::convert::From<&ValidationError> for GraphMessage {
    fn from(err: &ValidationError) -> Self {
        GraphMessage::new(err.severity(), err.code(), err.to_string())
            .with_location(err.location())
    }
}
