use crate::error_codes;
use crate::execution::AuthorizationOutcome;
use crate::execution::Authorizer;
use crate::messages::GraphMessage;
use crate::pipeline::Next;
use crate::pipeline::PipelineError;
use crate::pipeline::PipelineStage;
use crate::pipeline::QueryExecutionContext;
use crate::types::SecurityRequirement;
use std::sync::Arc;

/// Checks every secure field of the operation against the request's
/// principal.
///
/// All checks run concurrently and to completion; each denial is recorded,
/// and any denial ends the request.
#[derive(Clone, Debug)]
pub struct AuthorizeFieldsStage {
    authorizer: Arc<dyn Authorizer>,
}
impl AuthorizeFieldsStage {
    pub fn new(authorizer: Arc<dyn Authorizer>) -> Self {
        Self { authorizer }
    }
}
#[async_trait::async_trait]
impl PipelineStage for AuthorizeFieldsStage {
    fn name(&self) -> &'static str {
        "authorize_fields"
    }

    async fn invoke(
        &self,
        ctx: &mut QueryExecutionContext,
        next: Next<'_>,
    ) -> Result<(), PipelineError> {
        if let Some(plan) = &ctx.plan {
            let document = plan.document();
            let principal = ctx.request.principal.as_ref();
            let messages = &ctx.messages;
            let checks = plan.secure_fields().into_iter().filter_map(|field_id| {
                let part = document.part(field_id);
                let field_def = part.as_field()?.definition()?;
                let mut requirements: Vec<SecurityRequirement> = field_def.security().to_vec();
                if let Some(parent_t) = document.schema().find_graph_type(field_def.parent_type_name()) {
                    requirements.extend(parent_t.security().iter().cloned());
                }
                let coordinate = format!("{}.{}", field_def.parent_type_name(), field_def.name());
                let location = part.location().copied();
                let authorizer = self.authorizer.clone();
                Some(async move {
                    let outcome = authorizer.authorize(principal, &requirements).await;
                    if let AuthorizationOutcome::Denied { reason } = outcome {
                        tracing::debug!(
                            field = coordinate.as_str(),
                            reason = reason.as_str(),
                            "field access denied",
                        );
                        messages.add(
                            GraphMessage::critical(
                                error_codes::ACCESS_DENIED,
                                format!("Access to `{coordinate}` was denied: {reason}"),
                            ).with_location(location),
                        );
                    }
                })
            });
            futures::future::join_all(checks).await;
        }
        next.run(ctx).await
    }
}
