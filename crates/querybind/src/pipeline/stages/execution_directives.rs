use crate::execution::DirectivePhase;
use crate::execution::DirectiveRegistry;
use crate::messages::GraphMessage;
use crate::pipeline::Next;
use crate::pipeline::PipelineError;
use crate::pipeline::PipelineStage;
use crate::pipeline::QueryExecutionContext;
use crate::validation::DocumentValidator;
use std::sync::Arc;

/// Applies execution-phase directives (`@skip`, `@include`, and any
/// registered executor) to this request's copy of the plan. A document
/// they restructured is validated again.
#[derive(Clone, Debug)]
pub struct ExecutionDirectivesStage {
    directives: Arc<DirectiveRegistry>,
}
impl ExecutionDirectivesStage {
    pub fn new(directives: Arc<DirectiveRegistry>) -> Self {
        Self { directives }
    }
}
#[async_trait::async_trait]
impl PipelineStage for ExecutionDirectivesStage {
    fn name(&self) -> &'static str {
        "execution_directives"
    }

    async fn invoke(
        &self,
        ctx: &mut QueryExecutionContext,
        next: Next<'_>,
    ) -> Result<(), PipelineError> {
        if let Some(plan) = ctx.plan.as_mut() && let Some(variables) = ctx.variables.as_deref() {
            match self.directives.apply(plan, DirectivePhase::Execution, variables).await {
                Ok(true) => {
                    let new_errors: Vec<GraphMessage> = DocumentValidator::new(plan.document())
                        .validate()
                        .iter()
                        .filter(|err| err.is_critical())
                        .map(GraphMessage::from)
                        .collect();
                    tracing::debug!(
                        errors = new_errors.len(),
                        "re-validated document restructured by directives",
                    );
                    ctx.messages.extend(new_errors);
                },
                Ok(false) => (),
                Err(err) => {
                    tracing::debug!(%err, "execution directive failed");
                    ctx.messages.add(GraphMessage::from(&err));
                },
            }
        }
        next.run(ctx).await
    }
}
