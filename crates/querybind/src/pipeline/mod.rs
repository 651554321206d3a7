mod pipeline_error;
mod pipeline_stage;
mod query_engine;
mod query_event_observer;
mod query_execution_context;
mod query_pipeline;
mod query_request;
mod query_response;
pub mod stages;
mod tracing_observer;

pub use pipeline_error::PipelineError;
pub use pipeline_stage::Next;
pub use pipeline_stage::PipelineStage;
pub use query_engine::QueryEngine;
pub use query_engine::QueryEngineBuilder;
pub use query_event_observer::QueryEventObserver;
pub use query_execution_context::QueryExecutionContext;
pub use query_pipeline::QueryPipeline;
pub use query_request::QueryRequest;
pub use query_response::QueryResponse;
pub use tracing_observer::TracingObserver;

#[cfg(test)]
mod tests;
