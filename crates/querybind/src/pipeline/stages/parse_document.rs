use crate::ast;
use crate::binding::BindError;
use crate::messages::GraphMessage;
use crate::pipeline::Next;
use crate::pipeline::PipelineError;
use crate::pipeline::PipelineStage;
use crate::pipeline::QueryExecutionContext;

/// Parses the request's query text into a syntax tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParseDocumentStage;
#[async_trait::async_trait]
impl PipelineStage for ParseDocumentStage {
    fn name(&self) -> &'static str {
        "parse_document"
    }

    async fn invoke(
        &self,
        ctx: &mut QueryExecutionContext,
        next: Next<'_>,
    ) -> Result<(), PipelineError> {
        if ctx.plan.is_none() && ctx.syntax_tree.is_none() {
            match ast::operation::parse(ctx.request.query_text.as_str()) {
                Ok(syntax_tree) => ctx.syntax_tree = Some(syntax_tree),
                Err(err) => {
                    let err = BindError::SyntaxError { message: err.to_string() };
                    tracing::debug!(%err, "failed to parse query text");
                    ctx.messages.add(GraphMessage::from(&err));
                },
            }
        }
        next.run(ctx).await
    }
}
