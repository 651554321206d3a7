use crate::messages::GraphMessage;
use crate::pipeline::Next;
use crate::pipeline::PipelineError;
use crate::pipeline::PipelineStage;
use crate::pipeline::QueryExecutionContext;
use crate::plan::PlanLimits;
use crate::plan::QueryPlan;
use std::sync::Arc;

/// Wraps the requested operation of the bound document in a [`QueryPlan`].
#[derive(Clone, Debug, Default)]
pub struct GeneratePlanStage {
    limits: PlanLimits,
}
impl GeneratePlanStage {
    pub fn new(limits: PlanLimits) -> Self {
        Self { limits }
    }
}
#[async_trait::async_trait]
impl PipelineStage for GeneratePlanStage {
    fn name(&self) -> &'static str {
        "generate_plan"
    }

    async fn invoke(
        &self,
        ctx: &mut QueryExecutionContext,
        next: Next<'_>,
    ) -> Result<(), PipelineError> {
        if ctx.plan.is_none() && let Some(document) = ctx.document.clone() {
            match QueryPlan::select_operation(&document, ctx.request.operation_name.as_deref()) {
                Ok(operation) => {
                    let known_messages = ctx.document_messages.len();
                    let plan = QueryPlan::new(
                        document,
                        operation,
                        ctx.document_messages.clone(),
                        &self.limits,
                    );
                    ctx.messages.extend(plan.messages().iter().skip(known_messages).cloned());
                    ctx.notify(|observer| observer.plan_generated(ctx.cache_key(), &plan));
                    ctx.generated_plan = Some(Arc::new(plan.clone()));
                    ctx.plan = Some(plan);
                },
                Err(err) => {
                    tracing::debug!(%err, "no operation to plan");
                    ctx.messages.add(GraphMessage::from(&err));
                },
            }
        }
        next.run(ctx).await
    }
}
