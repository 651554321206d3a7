use crate::pipeline::Next;
use crate::pipeline::PipelineError;
use crate::pipeline::PipelineStage;
use crate::pipeline::QueryExecutionContext;
use crate::plan::PlanExpiration;
use crate::plan::QueryPlanCacheProvider;
use std::sync::Arc;

/// Serves a previously generated plan for the request's cache key, and
/// offers the plan generated further down the chain to the cache once the
/// rest of the chain has run.
///
/// The plan offered is the one as generated, before any directive
/// restructured this request's copy.
#[derive(Clone, Debug)]
pub struct QueryPlanCacheStage {
    cache: Arc<dyn QueryPlanCacheProvider>,
    expiration: PlanExpiration,
}
impl QueryPlanCacheStage {
    pub fn new(cache: Arc<dyn QueryPlanCacheProvider>, expiration: PlanExpiration) -> Self {
        Self { cache, expiration }
    }
}
#[async_trait::async_trait]
impl PipelineStage for QueryPlanCacheStage {
    fn name(&self) -> &'static str {
        "query_plan_cache"
    }

    async fn invoke(
        &self,
        ctx: &mut QueryExecutionContext,
        next: Next<'_>,
    ) -> Result<(), PipelineError> {
        match self.cache.try_get(ctx.cache_key()) {
            Some(plan) => {
                ctx.notify(|observer| observer.cache_hit(ctx.cache_key()));
                ctx.messages.extend(plan.messages().iter().cloned());
                ctx.plan = Some(plan.as_ref().clone());
                ctx.plan_from_cache = true;
            },
            None => ctx.notify(|observer| observer.cache_miss(ctx.cache_key())),
        }

        let result = next.run(ctx).await;

        if !ctx.plan_from_cache
            && let Some(plan) = ctx.generated_plan.clone()
            && self.cache.try_put(ctx.cache_key(), plan, self.expiration) {
            ctx.notify(|observer| observer.cache_added(ctx.cache_key()));
        }
        result
    }
}
