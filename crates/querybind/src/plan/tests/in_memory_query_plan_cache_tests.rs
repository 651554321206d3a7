use crate::binding::DocumentBuilder;
use crate::config::EngineConfig;
use crate::plan::CacheStats;
use crate::plan::InMemoryQueryPlanCache;
use crate::plan::PlanExpiration;
use crate::plan::PlanLimits;
use crate::plan::QueryPlan;
use crate::plan::QueryPlanCacheProvider;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaLookup;
use std::sync::Arc;
use std::time::Duration;

fn setup_schema() -> Arc<dyn SchemaLookup> {
    Arc::new(SchemaBuilder::new()
        .load_str(None, "type Query { hello: String, donuts: [String] }")
        .unwrap()
        .build()
        .unwrap())
}

fn plan(query: &str) -> Arc<QueryPlan> {
    let doc = DocumentBuilder::from_str(setup_schema(), query)
        .unwrap()
        .build();
    let operation = QueryPlan::select_operation(&doc, None).unwrap();
    let messages = doc.messages();
    Arc::new(QueryPlan::new(Arc::new(doc), operation, messages, &PlanLimits::default()))
}

#[tokio::test]
async fn hits_misses_and_additions_are_counted() {
    let cache = InMemoryQueryPlanCache::new();
    assert!(cache.try_get("k").is_none());
    assert!(cache.try_put("k", plan("{ hello }"), PlanExpiration::Sliding(Duration::from_secs(60))));
    assert!(cache.try_get("k").is_some());
    assert!(cache.try_get("k").is_some());

    assert_eq!(cache.stats(), CacheStats {
        additions: 1,
        entries: 1,
        hits: 2,
        misses: 1,
    });
}

#[tokio::test]
async fn non_cacheable_plans_are_refused() {
    let cache = InMemoryQueryPlanCache::new();
    let expiration = PlanExpiration::AbsoluteFromNow(Duration::from_secs(60));
    assert!(!cache.try_put("invalid", plan("{ nope }"), expiration));
    assert!(!cache.try_put("directive", plan("{ hello @skip(if: true) }"), expiration));
    assert!(cache.is_empty());
    assert_eq!(cache.stats().additions, 0);
}

#[tokio::test]
async fn cached_plan_is_the_same_instance() {
    let cache = InMemoryQueryPlanCache::new();
    let original = plan("{ donuts }");
    cache.try_put("k", original.clone(), PlanExpiration::Sliding(Duration::from_secs(5)));
    assert!(Arc::ptr_eq(&original, &cache.try_get("k").unwrap()));
}

#[tokio::test(start_paused = true)]
async fn absolute_expiration_ignores_reads() {
    let cache = InMemoryQueryPlanCache::new();
    cache.try_put("k", plan("{ hello }"), PlanExpiration::AbsoluteFromNow(Duration::from_secs(10)));

    tokio::time::advance(Duration::from_secs(6)).await;
    assert!(cache.try_get("k").is_some());
    tokio::time::advance(Duration::from_secs(6)).await;
    assert!(cache.try_get("k").is_none());
    assert!(cache.is_empty());
}

#[tokio::test(start_paused = true)]
async fn sliding_expiration_renews_on_read() {
    let cache = InMemoryQueryPlanCache::new();
    cache.try_put("k", plan("{ hello }"), PlanExpiration::Sliding(Duration::from_secs(10)));

    tokio::time::advance(Duration::from_secs(6)).await;
    assert!(cache.try_get("k").is_some());
    tokio::time::advance(Duration::from_secs(6)).await;
    assert!(cache.try_get("k").is_some());
    tokio::time::advance(Duration::from_secs(11)).await;
    assert!(cache.try_get("k").is_none());
}

#[tokio::test(start_paused = true)]
async fn purge_drops_only_expired_entries() {
    let cache = InMemoryQueryPlanCache::new();
    cache.try_put("short", plan("{ hello }"), PlanExpiration::AbsoluteFromNow(Duration::from_secs(1)));
    cache.try_put("long", plan("{ donuts }"), PlanExpiration::AbsoluteFromNow(Duration::from_secs(100)));

    tokio::time::advance(Duration::from_secs(2)).await;
    assert_eq!(cache.purge_expired(), 1);
    assert_eq!(cache.len(), 1);
    assert!(cache.try_get("long").is_some());
}

#[tokio::test]
async fn last_writer_wins() {
    let cache = InMemoryQueryPlanCache::new();
    let first = plan("{ hello }");
    let second = plan("{ hello }");
    let expiration = PlanExpiration::Sliding(Duration::from_secs(60));
    cache.try_put("k", first, expiration);
    cache.try_put("k", second.clone(), expiration);
    assert!(Arc::ptr_eq(&second, &cache.try_get("k").unwrap()));
    assert_eq!(cache.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn lifetimes_past_the_clock_range_never_expire() {
    let config = EngineConfig::from_toml_str("[cache]\nttl_secs = 9223372036854775807").unwrap();
    let cache = InMemoryQueryPlanCache::new();
    assert!(cache.try_put("sliding", plan("{ hello }"), config.cache.plan_expiration()));
    assert!(cache.try_put(
        "absolute",
        plan("{ donuts }"),
        PlanExpiration::AbsoluteFromNow(Duration::MAX),
    ));

    tokio::time::advance(Duration::from_secs(365 * 24 * 60 * 60)).await;
    assert!(cache.try_get("sliding").is_some());
    assert!(cache.try_get("sliding").is_some());
    assert!(cache.try_get("absolute").is_some());
    assert_eq!(cache.purge_expired(), 0);
    assert_eq!(cache.len(), 2);
}
