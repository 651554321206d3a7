use crate::document::PartId;
use crate::document::QueryDocument;
use crate::execution::DirectiveError;
use crate::loc::SourceLocation;
use indexmap::IndexMap;

/// When a directive executor runs.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DirectivePhase {
    /// Once per request, against the request's variables, before
    /// authorization and field execution.
    Execution,

    /// Once per plan, the first time the plan is used.
    SchemaGeneration,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DirectiveOutcome {
    DocumentAltered,
    Unchanged,
}

/// One application of a directive, with exclusive access to the document it
/// appears in.
#[derive(Debug)]
pub struct DirectiveInvocation<'doc> {
    pub arguments: IndexMap<String, serde_json::Value>,
    pub directive: PartId,
    pub document: &'doc mut QueryDocument,
    pub location: Option<SourceLocation>,
    pub name: String,
    /// The part the directive is applied to.
    pub target: PartId,
}
impl DirectiveInvocation<'_> {
    pub fn fail(&self, message: impl Into<String>) -> DirectiveError {
        DirectiveError::ExecutionFailed {
            directive_name: self.name.to_string(),
            message: message.into(),
            location: self.location,
        }
    }

    pub fn invalid_argument(&self, argument_name: &str) -> DirectiveError {
        DirectiveError::InvalidArgument {
            directive_name: self.name.to_string(),
            argument_name: argument_name.to_string(),
            location: self.location,
        }
    }
}

#[async_trait::async_trait]
pub trait DirectiveExecutor: Send + Sync {
    fn phase(&self) -> DirectivePhase {
        DirectivePhase::Execution
    }

    async fn execute(
        &self,
        invocation: DirectiveInvocation<'_>,
    ) -> Result<DirectiveOutcome, DirectiveError>;
}
