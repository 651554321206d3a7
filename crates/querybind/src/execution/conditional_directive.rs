use crate::execution::DirectiveError;
use crate::execution::DirectiveExecutor;
use crate::execution::DirectiveInvocation;
use crate::execution::DirectiveOutcome;

/// `@skip(if:)` and `@include(if:)`: removes the target part from the
/// document when the condition says so.
#[derive(Clone, Copy, Debug)]
pub struct ConditionalDirective {
    remove_when: bool,
}
impl ConditionalDirective {
    pub fn include() -> Self {
        Self { remove_when: false }
    }

    pub fn skip() -> Self {
        Self { remove_when: true }
    }
}
#[async_trait::async_trait]
impl DirectiveExecutor for ConditionalDirective {
    async fn execute(
        &self,
        invocation: DirectiveInvocation<'_>,
    ) -> Result<DirectiveOutcome, DirectiveError> {
        let Some(condition) = invocation.arguments.get("if").and_then(|arg| arg.as_bool()) else {
            return Err(invocation.invalid_argument("if"));
        };
        if condition != self.remove_when {
            return Ok(DirectiveOutcome::Unchanged);
        }
        invocation.document.remove_part(invocation.target);
        Ok(DirectiveOutcome::DocumentAltered)
    }
}
