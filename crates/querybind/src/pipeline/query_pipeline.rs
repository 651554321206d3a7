use crate::pipeline::Next;
use crate::pipeline::PipelineError;
use crate::pipeline::PipelineStage;
use crate::pipeline::QueryExecutionContext;
use std::sync::Arc;

/// An ordered chain of [`PipelineStage`]s.
#[derive(Clone, Debug, Default)]
pub struct QueryPipeline {
    stages: Vec<Arc<dyn PipelineStage>>,
}
impl QueryPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stage(mut self, stage: impl PipelineStage + 'static) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    pub async fn run(&self, ctx: &mut QueryExecutionContext) -> Result<(), PipelineError> {
        Next::new(&self.stages).run(ctx).await
    }
}
