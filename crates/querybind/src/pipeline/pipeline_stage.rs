use crate::pipeline::PipelineError;
use crate::pipeline::QueryExecutionContext;
use std::sync::Arc;

type Result<T> = std::result::Result<T, PipelineError>;

/// One step of a [`QueryPipeline`](crate::pipeline::QueryPipeline).
///
/// A stage does its own work and then hands the context to the rest of the
/// chain through `next`. Stages that must act after the rest of the chain
/// (caching a generated plan, packaging a response) do so once
/// [`Next::run`] returns. A stage that has nothing to do (its input is
/// missing, or a cached plan already satisfies it) just calls through.
#[async_trait::async_trait]
pub trait PipelineStage: std::fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether this stage runs even once the context is cancelled or
    /// invalid.
    fn always_invoked(&self) -> bool {
        false
    }

    async fn invoke(&self, ctx: &mut QueryExecutionContext, next: Next<'_>) -> Result<()>;
}

/// The remainder of a pipeline, from the point of view of one stage.
#[derive(Clone, Copy, Debug)]
pub struct Next<'a> {
    pub(crate) stages: &'a [Arc<dyn PipelineStage>],
}
impl<'a> Next<'a> {
    pub(crate) fn new(stages: &'a [Arc<dyn PipelineStage>]) -> Self {
        Self { stages }
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Invoke the next stage. Short-circuits (successfully) at the end of
    /// the chain, and skips every remaining stage that is not
    /// [`PipelineStage::always_invoked`] once the context is cancelled or
    /// holds a critical message.
    pub async fn run(self, ctx: &mut QueryExecutionContext) -> Result<()> {
        let mut remaining = self.stages;
        while let Some((stage, rest)) = remaining.split_first() {
            if stage.always_invoked() {
                tracing::trace!(stage = stage.name(), "entering pipeline stage");
                return stage.invoke(ctx, Next::new(rest)).await;
            }
            if ctx.is_cancelled() {
                ctx.report_cancelled();
            }
            if ctx.is_valid() {
                tracing::trace!(stage = stage.name(), "entering pipeline stage");
                return stage.invoke(ctx, Next::new(rest)).await;
            }
            tracing::trace!(stage = stage.name(), "skipping pipeline stage");
            remaining = rest;
        }
        Ok(())
    }
}
