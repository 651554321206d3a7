use crate::binding::DocumentBuilder;
use crate::messages::GraphMessage;
use crate::pipeline::Next;
use crate::pipeline::PipelineError;
use crate::pipeline::PipelineStage;
use crate::pipeline::QueryExecutionContext;
use crate::validation::DocumentValidator;
use std::sync::Arc;

/// Binds the syntax tree against the schema and validates the result.
///
/// Binding and validation diagnostics both land on the context; a critical
/// one ends the request.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValidateDocumentStage;
#[async_trait::async_trait]
impl PipelineStage for ValidateDocumentStage {
    fn name(&self) -> &'static str {
        "validate_document"
    }

    async fn invoke(
        &self,
        ctx: &mut QueryExecutionContext,
        next: Next<'_>,
    ) -> Result<(), PipelineError> {
        if ctx.plan.is_none() && let Some(syntax_tree) = &ctx.syntax_tree {
            let document = DocumentBuilder::from_ast(ctx.schema.clone(), syntax_tree).build();
            let mut messages = document.messages();
            messages.extend(DocumentValidator::new(&document).validate().iter().map(GraphMessage::from));
            tracing::debug!(
                critical = messages.iter().filter(|msg| msg.is_critical()).count(),
                total = messages.len(),
                "bound and validated query document",
            );

            ctx.messages.extend(messages.iter().cloned());
            ctx.document_messages = messages;
            ctx.document = Some(Arc::new(document));
        }
        next.run(ctx).await
    }
}
