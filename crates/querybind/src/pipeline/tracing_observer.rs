use crate::pipeline::QueryEventObserver;
use crate::plan::QueryPlan;
use std::time::Duration;

/// A [`QueryEventObserver`] that emits each notification as a `tracing`
/// event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;
impl QueryEventObserver for TracingObserver {
    fn request_received(&self, query_text: &str, operation_name: Option<&str>) {
        tracing::debug!(
            operation_name,
            query_len = query_text.len(),
            "request received",
        );
    }

    fn request_completed(&self, cache_key: &str, elapsed: Duration) {
        tracing::info!(cache_key, elapsed_ms = elapsed.as_millis() as u64, "request completed");
    }

    fn request_cancelled(&self, cache_key: &str) {
        tracing::warn!(cache_key, "request cancelled");
    }

    fn request_timed_out(&self, cache_key: &str) {
        tracing::warn!(cache_key, "request timed out");
    }

    fn cache_hit(&self, cache_key: &str) {
        tracing::debug!(cache_key, "query plan cache hit");
    }

    fn cache_miss(&self, cache_key: &str) {
        tracing::debug!(cache_key, "query plan cache miss");
    }

    fn cache_added(&self, cache_key: &str) {
        tracing::debug!(cache_key, "query plan cached");
    }

    fn plan_generated(&self, cache_key: &str, plan: &QueryPlan) {
        tracing::debug!(
            cache_key,
            cacheable = plan.is_cacheable(),
            field_count = plan.field_count(),
            max_depth = plan.max_depth(),
            "query plan generated",
        );
    }
}
