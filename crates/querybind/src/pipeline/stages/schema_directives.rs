use crate::execution::DirectivePhase;
use crate::execution::DirectiveRegistry;
use crate::execution::ResolvedVariables;
use crate::messages::GraphMessage;
use crate::pipeline::Next;
use crate::pipeline::PipelineError;
use crate::pipeline::PipelineStage;
use crate::pipeline::QueryExecutionContext;
use std::sync::Arc;

/// Applies schema-generation-phase directives to a plan the first time it
/// is used.
#[derive(Clone, Debug)]
pub struct SchemaDirectivesStage {
    directives: Arc<DirectiveRegistry>,
}
impl SchemaDirectivesStage {
    pub fn new(directives: Arc<DirectiveRegistry>) -> Self {
        Self { directives }
    }
}
#[async_trait::async_trait]
impl PipelineStage for SchemaDirectivesStage {
    fn name(&self) -> &'static str {
        "schema_directives"
    }

    async fn invoke(
        &self,
        ctx: &mut QueryExecutionContext,
        next: Next<'_>,
    ) -> Result<(), PipelineError> {
        if let Some(plan) = ctx.plan.as_mut()
            && !plan.schema_directives_applied() {
            let applied = self.directives
                .apply(plan, DirectivePhase::SchemaGeneration, &ResolvedVariables::new())
                .await;
            if let Err(err) = applied {
                tracing::debug!(%err, "schema-generation directive failed");
                ctx.messages.add(GraphMessage::from(&err));
            }
        }
        next.run(ctx).await
    }
}
