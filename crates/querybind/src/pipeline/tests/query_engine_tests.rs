use crate::config::EngineConfig;
use crate::error_codes;
use crate::execution::Principal;
use crate::execution::ResolverContext;
use crate::execution::ResolverError;
use crate::execution::ResolverRegistry;
use crate::pipeline::PipelineError;
use crate::pipeline::QueryEngine;
use crate::pipeline::QueryEngineBuilder;
use crate::pipeline::QueryEventObserver;
use crate::pipeline::QueryRequest;
use crate::pipeline::QueryResponse;
use crate::plan::InMemoryQueryPlanCache;
use crate::plan::QueryPlan;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaLookup;
use parking_lot::Mutex;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn setup_schema() -> Arc<dyn SchemaLookup> {
    Arc::new(SchemaBuilder::new()
        .load_str(None, concat!(
            "type Query {\n",
            "  greeting(name: String = \"baker\"): String\n",
            "  slow(ms: Int!): String\n",
            "  donut(id: ID!): Donut\n",
            "  secret: String @authorize(roles: [\"baker\"])\n",
            "}\n",
            "type Mutation { first: Int, second: Int, third: Int }\n",
            "type Donut { name: String, filling: Filling }\n",
            "type Filling { flavor: String }\n",
        ))
        .unwrap()
        .build()
        .unwrap())
}

#[derive(Debug, thiserror::Error)]
#[error("the fryer is out of oil")]
struct FryerEmpty;

#[derive(Debug, Default)]
struct RecordingObserver {
    events: Mutex<Vec<String>>,
}
impl RecordingObserver {
    fn events(&self) -> Vec<String> {
        self.events.lock().clone()
    }

    fn record(&self, event: &str) {
        self.events.lock().push(event.to_string());
    }
}
impl QueryEventObserver for RecordingObserver {
    fn request_received(&self, _query_text: &str, _operation_name: Option<&str>) {
        self.record("received");
    }

    fn request_completed(&self, _cache_key: &str, _elapsed: Duration) {
        self.record("completed");
    }

    fn request_cancelled(&self, _cache_key: &str) {
        self.record("cancelled");
    }

    fn request_timed_out(&self, _cache_key: &str) {
        self.record("timed_out");
    }

    fn cache_hit(&self, _cache_key: &str) {
        self.record("cache_hit");
    }

    fn cache_miss(&self, _cache_key: &str) {
        self.record("cache_miss");
    }

    fn cache_added(&self, _cache_key: &str) {
        self.record("cache_added");
    }

    fn plan_generated(&self, _cache_key: &str, _plan: &QueryPlan) {
        self.record("plan_generated");
    }
}

fn counting_resolvers(calls: Arc<AtomicUsize>) -> ResolverRegistry {
    ResolverRegistry::new()
        .with_resolver("Query", "greeting", move |ctx: ResolverContext| {
            let calls = calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                let name = ctx.argument("name").and_then(|name| name.as_str()).unwrap_or("?");
                Ok::<_, ResolverError>(json!(format!("hello {name}")))
            }
        })
        .with_resolver("Query", "slow", |ctx: ResolverContext| async move {
            let ms = ctx.argument("ms").and_then(|ms| ms.as_u64()).unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(ms)).await;
            Ok::<_, ResolverError>(json!(format!("slept {ms}")))
        })
        .with_resolver("Query", "secret", |_ctx: ResolverContext| async {
            Ok::<_, ResolverError>(json!("the glaze is mostly sugar"))
        })
}

fn engine(calls: Arc<AtomicUsize>) -> QueryEngine {
    QueryEngineBuilder::new(setup_schema())
        .with_resolvers(counting_resolvers(calls))
        .build()
}

fn codes(response: &QueryResponse) -> Vec<&str> {
    response.errors.iter().map(|msg| msg.code()).collect()
}

#[test]
fn stages_are_chained_in_order() {
    let engine = QueryEngineBuilder::new(setup_schema()).build();
    assert_eq!(engine.pipeline().stage_names(), vec![
        "package_response",
        "validate_request",
        "query_plan_cache",
        "parse_document",
        "validate_document",
        "generate_plan",
        "schema_directives",
        "resolve_variables",
        "execution_directives",
        "authorize_fields",
        "execute_operation",
    ]);
}

#[test]
fn disabled_cache_and_authorization_drop_their_stages() {
    let config = EngineConfig::from_toml_str(concat!(
        "[cache]\n",
        "enabled = false\n",
        "[authorization]\n",
        "enabled = false\n",
    )).unwrap();
    let engine = QueryEngineBuilder::new(setup_schema()).with_config(config).build();
    let names = engine.pipeline().stage_names();
    assert!(!names.contains(&"query_plan_cache"));
    assert!(!names.contains(&"authorize_fields"));
    assert_eq!(names.len(), 9);
}

#[tokio::test]
async fn executes_a_simple_query() {
    let calls = Arc::new(AtomicUsize::new(0));
    let response = engine(calls.clone())
        .execute(QueryRequest::new("{ greeting hi: greeting(name: \"ada\") }"))
        .await
        .unwrap();

    assert!(response.is_success());
    assert_eq!(response.to_json(), json!({
        "data": { "greeting": "hello baker", "hi": "hello ada" },
    }));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn child_fields_resolve_from_the_root_value() {
    let request = QueryRequest::new("{ donut(id: 1) { name filling { flavor } } }")
        .with_root_value(json!({
            "donut": { "name": "Boston Cream", "filling": { "flavor": "custard" } },
        }));
    let response = engine(Arc::default()).execute(request).await.unwrap();

    assert_eq!(response.data, json!({
        "donut": { "name": "Boston Cream", "filling": { "flavor": "custard" } },
    }).as_object().cloned());
}

#[tokio::test]
async fn empty_query_text_is_rejected() {
    let calls = Arc::new(AtomicUsize::new(0));
    let response = engine(calls.clone()).execute(QueryRequest::new("   ")).await.unwrap();

    assert_eq!(codes(&response), vec![error_codes::INVALID_REQUEST]);
    assert!(response.data.is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn syntax_errors_stop_the_pipeline() {
    let engine = engine(Arc::default());
    let mut ctx = engine.new_context(QueryRequest::new("{ greeting"));
    engine.run(&mut ctx).await.unwrap();

    assert!(ctx.syntax_tree().is_none());
    assert!(ctx.document().is_none());
    let response = ctx.take_response().unwrap();
    assert_eq!(codes(&response), vec![error_codes::SYNTAX_ERROR]);
}

#[tokio::test]
async fn binding_errors_stop_before_execution() {
    let calls = Arc::new(AtomicUsize::new(0));
    let engine = engine(calls.clone());
    let mut ctx = engine.new_context(QueryRequest::new("{ greeting sprinkles }"));
    engine.run(&mut ctx).await.unwrap();

    assert!(ctx.document().is_some());
    assert!(ctx.plan().is_none());
    assert!(ctx.outcome().is_none());
    let response = ctx.take_response().unwrap();
    assert_eq!(codes(&response), vec![error_codes::INVALID_DOCUMENT]);
    assert!(response.errors[0].location().is_some());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn several_operations_need_an_operation_name() {
    let engine = engine(Arc::default());
    let text = "query A { greeting } query B { hi: greeting(name: \"bo\") }";

    let response = engine.execute(QueryRequest::new(text)).await.unwrap();
    assert_eq!(codes(&response), vec![error_codes::UNKNOWN_OPERATION]);

    let response = engine
        .execute(QueryRequest::new(text).with_operation_name("B"))
        .await
        .unwrap();
    assert_eq!(response.to_json(), json!({ "data": { "hi": "hello bo" } }));
}

#[tokio::test]
async fn cached_plans_skip_parsing_and_binding() {
    let cache = Arc::new(InMemoryQueryPlanCache::new());
    let observer = Arc::new(RecordingObserver::default());
    let engine = QueryEngineBuilder::new(setup_schema())
        .with_resolvers(counting_resolvers(Arc::default()))
        .with_cache(cache.clone())
        .with_observer(observer.clone())
        .build();

    let mut first = engine.new_context(QueryRequest::new("{ greeting }"));
    engine.run(&mut first).await.unwrap();
    assert!(!first.plan_from_cache());
    assert!(first.syntax_tree().is_some());

    let mut second = engine.new_context(QueryRequest::new("{ greeting }"));
    engine.run(&mut second).await.unwrap();
    assert!(second.plan_from_cache());
    assert!(second.syntax_tree().is_none());
    assert!(second.document().is_none());
    assert_eq!(first.take_response(), second.take_response());

    let stats = cache.stats();
    assert_eq!((stats.additions, stats.hits, stats.misses), (1, 1, 1));
    assert_eq!(observer.events(), vec![
        "received",
        "cache_miss",
        "plan_generated",
        "cache_added",
        "completed",
        "received",
        "cache_hit",
        "completed",
    ]);
}

#[tokio::test]
async fn plans_with_directives_are_not_cached() {
    let cache = Arc::new(InMemoryQueryPlanCache::new());
    let engine = QueryEngineBuilder::new(setup_schema())
        .with_resolvers(counting_resolvers(Arc::default()))
        .with_cache(cache.clone())
        .build();
    let text = "query ($quiet: Boolean!) { greeting @skip(if: $quiet) hi: greeting(name: \"cy\") }";

    let quiet = engine
        .execute(QueryRequest::new(text).with_variable("quiet", json!(true)))
        .await
        .unwrap();
    assert_eq!(quiet.to_json(), json!({ "data": { "hi": "hello cy" } }));

    let loud = engine
        .execute(QueryRequest::new(text).with_variable("quiet", json!(false)))
        .await
        .unwrap();
    assert_eq!(loud.to_json(), json!({
        "data": { "greeting": "hello baker", "hi": "hello cy" },
    }));
    assert_eq!(cache.stats().additions, 0);
}

#[tokio::test]
async fn invalid_variables_stop_before_execution() {
    let calls = Arc::new(AtomicUsize::new(0));
    let response = engine(calls.clone())
        .execute(QueryRequest::new("query ($id: ID!) { donut(id: $id) { name } }"))
        .await
        .unwrap();

    assert_eq!(codes(&response), vec![error_codes::INVALID_VARIABLE_VALUE]);
    assert!(response.data.is_none());
}

#[tokio::test]
async fn secure_fields_need_an_authorized_principal() {
    let engine = engine(Arc::default());

    let anonymous = engine.execute(QueryRequest::new("{ greeting secret }")).await.unwrap();
    assert_eq!(codes(&anonymous), vec![error_codes::ACCESS_DENIED]);
    assert!(anonymous.errors[0].message().contains("Query.secret"));
    assert!(anonymous.data.is_none());

    let customer = engine
        .execute(QueryRequest::new("{ secret }").with_principal(Principal::new("bob").with_role("customer")))
        .await
        .unwrap();
    assert_eq!(codes(&customer), vec![error_codes::ACCESS_DENIED]);

    let baker = engine
        .execute(QueryRequest::new("{ secret }").with_principal(Principal::new("ada").with_role("baker")))
        .await
        .unwrap();
    assert_eq!(baker.to_json(), json!({ "data": { "secret": "the glaze is mostly sugar" } }));
}

#[tokio::test]
async fn disabled_authorization_skips_checks() {
    let config = EngineConfig::from_toml_str("[authorization]\nenabled = false\n").unwrap();
    let engine = QueryEngineBuilder::new(setup_schema())
        .with_config(config)
        .with_resolvers(counting_resolvers(Arc::default()))
        .build();

    let response = engine.execute(QueryRequest::new("{ secret }")).await.unwrap();
    assert!(response.is_success());
}

#[tokio::test]
async fn over_limit_queries_are_too_complex() {
    let config = EngineConfig::from_toml_str("[execution]\nmax_query_depth = 2\n").unwrap();
    let engine = QueryEngineBuilder::new(setup_schema()).with_config(config).build();

    let response = engine
        .execute(QueryRequest::new("{ donut(id: 1) { filling { flavor } } }"))
        .await
        .unwrap();
    assert_eq!(codes(&response), vec![error_codes::QUERY_TOO_COMPLEX]);
    assert!(response.data.is_none());
}

#[tokio::test(start_paused = true)]
async fn timeouts_keep_completed_fields() {
    let config = EngineConfig::from_toml_str("[execution]\ntimeout_ms = 50\n").unwrap();
    let observer = Arc::new(RecordingObserver::default());
    let engine = QueryEngineBuilder::new(setup_schema())
        .with_config(config)
        .with_resolvers(counting_resolvers(Arc::default()))
        .with_observer(observer.clone())
        .build();

    let response = engine
        .execute(QueryRequest::new("{ a: slow(ms: 10) b: slow(ms: 200) }"))
        .await
        .unwrap();

    assert_eq!(response.data, json!({ "a": "slept 10" }).as_object().cloned());
    assert_eq!(codes(&response), vec![error_codes::REQUEST_TIMEOUT]);
    assert!(observer.events().contains(&"timed_out".to_string()));
}

#[tokio::test]
async fn cancelled_requests_report_once() {
    let observer = Arc::new(RecordingObserver::default());
    let engine = QueryEngineBuilder::new(setup_schema())
        .with_resolvers(counting_resolvers(Arc::default()))
        .with_observer(observer.clone())
        .build();
    let token = CancellationToken::new();
    token.cancel();

    let response = engine
        .execute(QueryRequest::new("{ greeting }").with_cancellation_token(token))
        .await
        .unwrap();

    assert_eq!(codes(&response), vec![error_codes::OPERATION_CANCELED]);
    assert!(response.data.is_none());
    let cancellations = observer.events().iter().filter(|event| *event == "cancelled").count();
    assert_eq!(cancellations, 1);
}

#[tokio::test]
async fn a_single_fault_is_returned_unwrapped() {
    let third_calls = Arc::new(AtomicUsize::new(0));
    let counter = third_calls.clone();
    let resolvers = ResolverRegistry::new()
        .with_resolver("Mutation", "first", |_ctx: ResolverContext| async {
            Ok::<_, ResolverError>(json!(1))
        })
        .with_resolver("Mutation", "second", |_ctx: ResolverContext| async {
            Err::<serde_json::Value, ResolverError>(Box::new(FryerEmpty))
        })
        .with_resolver("Mutation", "third", move |_ctx: ResolverContext| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<_, ResolverError>(json!(3))
            }
        });
    let engine = QueryEngineBuilder::new(setup_schema()).with_resolvers(resolvers).build();

    let mut ctx = engine.new_context(QueryRequest::new("mutation { first second third }"));
    let err = engine.run(&mut ctx).await.unwrap_err();

    let PipelineError::Fault(fault) = err else { panic!("expected a single fault") };
    assert!(fault.source.downcast_ref::<FryerEmpty>().is_some());
    assert_eq!(third_calls.load(Ordering::SeqCst), 0);

    let response = ctx.take_response().unwrap();
    assert_eq!(response.data, json!({ "first": 1 }).as_object().cloned());
    assert_eq!(codes(&response), vec![error_codes::EXECUTION_ERROR]);
    assert_eq!(response.to_json()["errors"][0]["path"], json!(["second"]));
}

#[tokio::test]
async fn several_faults_are_aggregated() {
    let failing = |_ctx: ResolverContext| async {
        Err::<serde_json::Value, ResolverError>(Box::new(FryerEmpty))
    };
    let resolvers = ResolverRegistry::new()
        .with_resolver("Query", "greeting", failing)
        .with_resolver("Query", "secret", failing);
    let config = EngineConfig::from_toml_str("[authorization]\nenabled = false\n").unwrap();
    let engine = QueryEngineBuilder::new(setup_schema())
        .with_config(config)
        .with_resolvers(resolvers)
        .build();

    let err = engine.execute(QueryRequest::new("{ greeting secret }")).await.unwrap_err();
    assert!(matches!(&err, PipelineError::AggregateFaults { faults } if faults.len() == 2));
    assert_eq!(err.faults().len(), 2);
}
