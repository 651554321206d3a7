use crate::ast;
use crate::document::QueryDocument;
use crate::error_codes;
use crate::execution::ExecutionOutcome;
use crate::execution::ResolvedVariables;
use crate::messages::GraphMessage;
use crate::messages::MessageCollection;
use crate::pipeline::QueryEventObserver;
use crate::pipeline::QueryRequest;
use crate::pipeline::QueryResponse;
use crate::plan::QueryPlan;
use crate::schema::SchemaLookup;
use std::sync::Arc;
use tokio::time::Instant;

/// Everything one request accumulates on its way through a
/// [`QueryPipeline`](crate::pipeline::QueryPipeline).
///
/// Stages communicate only through this context: each one reads what
/// earlier stages produced and records what it produces. Problems are
/// recorded as messages; a context holding a critical message is no longer
/// valid and the remaining stages are skipped.
#[derive(Debug)]
pub struct QueryExecutionContext {
    pub(crate) cache_key: String,
    pub(crate) cancellation_reported: bool,
    pub(crate) document: Option<Arc<QueryDocument>>,
    pub(crate) document_messages: Vec<GraphMessage>,
    pub(crate) generated_plan: Option<Arc<QueryPlan>>,
    pub(crate) messages: MessageCollection,
    pub(crate) observer: Option<Arc<dyn QueryEventObserver>>,
    pub(crate) outcome: Option<ExecutionOutcome>,
    pub(crate) plan: Option<QueryPlan>,
    pub(crate) plan_from_cache: bool,
    pub(crate) request: QueryRequest,
    pub(crate) response: Option<QueryResponse>,
    pub(crate) schema: Arc<dyn SchemaLookup>,
    pub(crate) started_at: Instant,
    pub(crate) syntax_tree: Option<ast::operation::Document>,
    pub(crate) variables: Option<Arc<ResolvedVariables>>,
}
impl QueryExecutionContext {
    pub fn new(
        schema: Arc<dyn SchemaLookup>,
        request: QueryRequest,
        cache_key: impl Into<String>,
    ) -> Self {
        Self {
            cache_key: cache_key.into(),
            cancellation_reported: false,
            document: None,
            document_messages: vec![],
            generated_plan: None,
            messages: MessageCollection::new(),
            observer: None,
            outcome: None,
            plan: None,
            plan_from_cache: false,
            request,
            response: None,
            schema,
            started_at: Instant::now(),
            syntax_tree: None,
            variables: None,
        }
    }

    pub fn with_observer(mut self, observer: Option<Arc<dyn QueryEventObserver>>) -> Self {
        self.observer = observer;
        self
    }

    pub fn cache_key(&self) -> &str {
        self.cache_key.as_str()
    }

    /// The bound document, when this request parsed one itself. `None` for
    /// requests served from a cached plan.
    pub fn document(&self) -> Option<&QueryDocument> {
        self.document.as_deref()
    }

    pub fn messages(&self) -> &MessageCollection {
        &self.messages
    }

    pub fn outcome(&self) -> Option<&ExecutionOutcome> {
        self.outcome.as_ref()
    }

    pub fn plan(&self) -> Option<&QueryPlan> {
        self.plan.as_ref()
    }

    pub fn plan_from_cache(&self) -> bool {
        self.plan_from_cache
    }

    pub fn request(&self) -> &QueryRequest {
        &self.request
    }

    pub fn response(&self) -> Option<&QueryResponse> {
        self.response.as_ref()
    }

    pub fn take_response(&mut self) -> Option<QueryResponse> {
        self.response.take()
    }

    pub fn schema(&self) -> &Arc<dyn SchemaLookup> {
        &self.schema
    }

    pub fn syntax_tree(&self) -> Option<&ast::operation::Document> {
        self.syntax_tree.as_ref()
    }

    pub fn variables(&self) -> Option<&ResolvedVariables> {
        self.variables.as_deref()
    }

    pub fn is_cancelled(&self) -> bool {
        self.request.cancellation_token.is_cancelled()
    }

    pub fn is_valid(&self) -> bool {
        !self.messages.has_critical()
    }

    /// Call `f` with the observer, if there is one.
    pub(crate) fn notify(&self, f: impl FnOnce(&dyn QueryEventObserver)) {
        if let Some(observer) = &self.observer {
            f(observer.as_ref());
        }
    }

    /// Record the caller's cancellation, once.
    pub(crate) fn report_cancelled(&mut self) {
        if self.cancellation_reported || self.messages.contains_code(error_codes::OPERATION_CANCELED) {
            return;
        }
        self.cancellation_reported = true;
        self.messages.add(GraphMessage::critical(
            error_codes::OPERATION_CANCELED,
            "The operation was cancelled before it completed",
        ));
        self.notify(|observer| observer.request_cancelled(self.cache_key()));
    }
}
