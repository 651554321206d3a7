use crate::error_codes;
use crate::messages::GraphMessage;
use crate::pipeline::Next;
use crate::pipeline::PipelineError;
use crate::pipeline::PipelineStage;
use crate::pipeline::QueryExecutionContext;

/// Rejects requests with no query text.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValidateRequestStage;
#[async_trait::async_trait]
impl PipelineStage for ValidateRequestStage {
    fn name(&self) -> &'static str {
        "validate_request"
    }

    async fn invoke(
        &self,
        ctx: &mut QueryExecutionContext,
        next: Next<'_>,
    ) -> Result<(), PipelineError> {
        if ctx.request.query_text.trim().is_empty() {
            ctx.messages.add(GraphMessage::critical(
                error_codes::INVALID_REQUEST,
                "The request does not contain any query text",
            ));
        }
        next.run(ctx).await
    }
}
