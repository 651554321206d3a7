use crate::config::EngineConfig;
use crate::execution::Authorizer;
use crate::execution::DirectiveRegistry;
use crate::execution::FieldScheduler;
use crate::execution::ResolverRegistry;
use crate::execution::RoleAuthorizer;
use crate::pipeline::PipelineError;
use crate::pipeline::QueryEventObserver;
use crate::pipeline::QueryExecutionContext;
use crate::pipeline::QueryPipeline;
use crate::pipeline::QueryRequest;
use crate::pipeline::QueryResponse;
use crate::pipeline::stages;
use crate::plan::InMemoryQueryPlanCache;
use crate::plan::QueryPlanCacheProvider;
use crate::plan::QueryPlanKeyManager;
use crate::plan::Sha256KeyManager;
use crate::schema::SchemaLookup;
use std::sync::Arc;

type Result<T> = std::result::Result<T, PipelineError>;

/// Executes requests against one schema through a fixed [`QueryPipeline`].
///
/// ```
/// use querybind::execution::ResolverContext;
/// use querybind::execution::ResolverError;
/// use querybind::execution::ResolverRegistry;
/// use querybind::pipeline::QueryEngineBuilder;
/// use querybind::pipeline::QueryRequest;
/// use querybind::schema::SchemaBuilder;
/// use std::sync::Arc;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let schema = SchemaBuilder::new()
///     .load_str(None, "type Query { hello: String }")
///     .unwrap()
///     .build()
///     .unwrap();
/// let resolvers = ResolverRegistry::new()
///     .with_resolver("Query", "hello", |_ctx: ResolverContext| async {
///         Ok::<_, ResolverError>(serde_json::json!("world"))
///     });
/// let engine = QueryEngineBuilder::new(Arc::new(schema))
///     .with_resolvers(resolvers)
///     .build();
///
/// let response = engine.execute(QueryRequest::new("{ hello }")).await.unwrap();
/// assert_eq!(response.to_json(), serde_json::json!({ "data": { "hello": "world" } }));
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct QueryEngine {
    config: EngineConfig,
    key_manager: Arc<dyn QueryPlanKeyManager>,
    observer: Option<Arc<dyn QueryEventObserver>>,
    pipeline: QueryPipeline,
    schema: Arc<dyn SchemaLookup>,
}
impl QueryEngine {
    pub fn builder(schema: Arc<dyn SchemaLookup>) -> QueryEngineBuilder {
        QueryEngineBuilder::new(schema)
    }

    pub fn cache_key(&self, request: &QueryRequest) -> String {
        self.key_manager.create_key(
            self.schema.identity(),
            request.query_text.as_str(),
            request.operation_name.as_deref(),
        )
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn new_context(&self, request: QueryRequest) -> QueryExecutionContext {
        let cache_key = self.cache_key(&request);
        QueryExecutionContext::new(self.schema.clone(), request, cache_key)
            .with_observer(self.observer.clone())
    }

    pub fn pipeline(&self) -> &QueryPipeline {
        &self.pipeline
    }

    /// Run `request` through the pipeline.
    ///
    /// Invalid, unauthorized, cancelled and timed-out requests still
    /// produce a response; their messages explain what happened. Only
    /// resolver faults produce an error, carrying the original resolver
    /// error(s). Use [`QueryEngine::run`] to keep the response (with its
    /// partial data) as well.
    pub async fn execute(&self, request: QueryRequest) -> Result<QueryResponse> {
        let mut ctx = self.new_context(request);
        self.run(&mut ctx).await?;
        Ok(ctx.take_response().unwrap_or_default())
    }

    /// Run a prepared context through the pipeline, leaving the response
    /// and everything produced on the way on `ctx`.
    pub async fn run(&self, ctx: &mut QueryExecutionContext) -> Result<()> {
        ctx.notify(|observer| observer.request_received(
            ctx.request.query_text.as_str(),
            ctx.request.operation_name.as_deref(),
        ));
        let result = self.pipeline.run(ctx).await;
        let elapsed = ctx.started_at.elapsed();
        ctx.notify(|observer| observer.request_completed(ctx.cache_key(), elapsed));
        result
    }
}

/// Assembles a [`QueryEngine`].
///
/// Unless replaced, the engine uses an [`InMemoryQueryPlanCache`] (when
/// caching is enabled), a [`Sha256KeyManager`], the built-in directives,
/// and a [`RoleAuthorizer`] without policies (when authorization is
/// enabled).
#[derive(Debug)]
pub struct QueryEngineBuilder {
    authorizer: Option<Arc<dyn Authorizer>>,
    cache: Option<Arc<dyn QueryPlanCacheProvider>>,
    config: EngineConfig,
    directives: DirectiveRegistry,
    key_manager: Arc<dyn QueryPlanKeyManager>,
    observer: Option<Arc<dyn QueryEventObserver>>,
    resolvers: ResolverRegistry,
    schema: Arc<dyn SchemaLookup>,
}
impl QueryEngineBuilder {
    pub fn new(schema: Arc<dyn SchemaLookup>) -> Self {
        Self {
            authorizer: None,
            cache: None,
            config: EngineConfig::default(),
            directives: DirectiveRegistry::new(),
            key_manager: Arc::new(Sha256KeyManager),
            observer: None,
            resolvers: ResolverRegistry::new(),
            schema,
        }
    }

    pub fn with_authorizer(mut self, authorizer: Arc<dyn Authorizer>) -> Self {
        self.authorizer = Some(authorizer);
        self
    }

    pub fn with_cache(mut self, cache: Arc<dyn QueryPlanCacheProvider>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_directives(mut self, directives: DirectiveRegistry) -> Self {
        self.directives = directives;
        self
    }

    pub fn with_key_manager(mut self, key_manager: Arc<dyn QueryPlanKeyManager>) -> Self {
        self.key_manager = key_manager;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn QueryEventObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn with_resolvers(mut self, resolvers: ResolverRegistry) -> Self {
        self.resolvers = resolvers;
        self
    }

    pub fn build(self) -> QueryEngine {
        let directives = Arc::new(self.directives);
        let execution = &self.config.execution;

        let mut pipeline = QueryPipeline::new()
            .with_stage(stages::PackageResponseStage)
            .with_stage(stages::ValidateRequestStage);
        if self.config.cache.enabled {
            let cache = self.cache.unwrap_or_else(|| Arc::new(InMemoryQueryPlanCache::new()));
            pipeline = pipeline.with_stage(stages::QueryPlanCacheStage::new(
                cache,
                self.config.cache.plan_expiration(),
            ));
        }
        pipeline = pipeline
            .with_stage(stages::ParseDocumentStage)
            .with_stage(stages::ValidateDocumentStage)
            .with_stage(stages::GeneratePlanStage::new(execution.plan_limits()))
            .with_stage(stages::SchemaDirectivesStage::new(directives.clone()))
            .with_stage(stages::ResolveVariablesStage)
            .with_stage(stages::ExecutionDirectivesStage::new(directives));
        if self.config.authorization.enabled {
            let authorizer = self.authorizer.unwrap_or_else(|| Arc::new(RoleAuthorizer::new()));
            pipeline = pipeline.with_stage(stages::AuthorizeFieldsStage::new(authorizer));
        }
        let scheduler = FieldScheduler::new(Arc::new(self.resolvers))
            .with_debug_mode(execution.debug_mode)
            .with_timeout(execution.timeout());
        pipeline = pipeline.with_stage(stages::ExecuteOperationStage::new(scheduler));

        tracing::debug!(stages = ?pipeline.stage_names(), "built query engine");
        QueryEngine {
            config: self.config,
            key_manager: self.key_manager,
            observer: self.observer,
            pipeline,
            schema: self.schema,
        }
    }
}
