use crate::execution::FieldScheduler;
use crate::execution::MonitorState;
use crate::execution::ResolvedVariables;
use crate::pipeline::Next;
use crate::pipeline::PipelineError;
use crate::pipeline::PipelineStage;
use crate::pipeline::QueryExecutionContext;
use std::sync::Arc;

/// Executes the operation's top-level fields.
///
/// Fault, timeout and cancellation messages are recorded on the context.
/// Faults are also returned as a [`PipelineError`], after the rest of the
/// chain has run.
#[derive(Clone, Debug)]
pub struct ExecuteOperationStage {
    scheduler: FieldScheduler,
}
impl ExecuteOperationStage {
    pub fn new(scheduler: FieldScheduler) -> Self {
        Self { scheduler }
    }
}
#[async_trait::async_trait]
impl PipelineStage for ExecuteOperationStage {
    fn name(&self) -> &'static str {
        "execute_operation"
    }

    async fn invoke(
        &self,
        ctx: &mut QueryExecutionContext,
        next: Next<'_>,
    ) -> Result<(), PipelineError> {
        let Some(plan) = &ctx.plan else {
            return next.run(ctx).await;
        };

        let variables = ctx.variables.clone().unwrap_or_else(|| Arc::new(ResolvedVariables::new()));
        let root_value = ctx.request.root_value.clone()
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));
        let mut outcome = self.scheduler
            .execute(plan, variables, root_value, &ctx.request.cancellation_token)
            .await;

        ctx.messages.extend(outcome.messages());
        match outcome.interruption() {
            Some(MonitorState::Cancelled) => {
                ctx.cancellation_reported = true;
                ctx.notify(|observer| observer.request_cancelled(ctx.cache_key()));
            },
            Some(MonitorState::TimedOut) =>
                ctx.notify(|observer| observer.request_timed_out(ctx.cache_key())),
            None => (),
        }

        let fault = PipelineError::from_faults(outcome.take_faults());
        ctx.outcome = Some(outcome);
        let result = next.run(ctx).await;
        match fault {
            Some(fault) => Err(fault),
            None => result,
        }
    }
}
