use crate::pipeline::Next;
use crate::pipeline::PipelineError;
use crate::pipeline::PipelineStage;
use crate::pipeline::QueryExecutionContext;
use crate::pipeline::QueryResponse;

/// Wraps the whole chain and turns whatever it left on the context into a
/// [`QueryResponse`], including when an earlier stage failed the request.
#[derive(Clone, Copy, Debug, Default)]
pub struct PackageResponseStage;
#[async_trait::async_trait]
impl PipelineStage for PackageResponseStage {
    fn name(&self) -> &'static str {
        "package_response"
    }

    fn always_invoked(&self) -> bool {
        true
    }

    async fn invoke(
        &self,
        ctx: &mut QueryExecutionContext,
        next: Next<'_>,
    ) -> Result<(), PipelineError> {
        let result = next.run(ctx).await;

        // Cancellation that arrived during the final stage still surfaces.
        if ctx.is_cancelled() {
            ctx.report_cancelled();
        }
        let data = ctx.outcome.as_ref().and_then(|outcome| outcome.data().cloned());
        let response = QueryResponse {
            data,
            errors: ctx.messages.snapshot(),
        };
        tracing::debug!(
            has_data = response.data.is_some(),
            errors = response.errors.len(),
            "packaged response",
        );
        ctx.response = Some(response);
        result
    }
}
