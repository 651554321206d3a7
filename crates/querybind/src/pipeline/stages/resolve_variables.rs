use crate::execution::ResolvedVariables;
use crate::messages::GraphMessage;
use crate::pipeline::Next;
use crate::pipeline::PipelineError;
use crate::pipeline::PipelineStage;
use crate::pipeline::QueryExecutionContext;
use std::sync::Arc;

/// Resolves the request's runtime variable values against the operation's
/// declared variables.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResolveVariablesStage;
#[async_trait::async_trait]
impl PipelineStage for ResolveVariablesStage {
    fn name(&self) -> &'static str {
        "resolve_variables"
    }

    async fn invoke(
        &self,
        ctx: &mut QueryExecutionContext,
        next: Next<'_>,
    ) -> Result<(), PipelineError> {
        if let Some(plan) = &ctx.plan {
            match ResolvedVariables::resolve(plan.document(), plan.operation(), &ctx.request.variables) {
                Ok(variables) => ctx.variables = Some(Arc::new(variables)),
                Err(errors) => {
                    tracing::debug!(errors = errors.len(), "invalid variable values");
                    ctx.messages.extend(errors.iter().map(GraphMessage::from));
                },
            }
        }
        next.run(ctx).await
    }
}
