use crate::plan::QueryPlan;
use std::time::Duration;

/// Receives fire-and-forget notifications as requests move through a
/// [`QueryEngine`](crate::pipeline::QueryEngine).
///
/// Every method defaults to doing nothing. Notifications are informational
/// only; nothing an observer does affects the outcome of a request.
pub trait QueryEventObserver: std::fmt::Debug + Send + Sync {
    fn request_received(&self, _query_text: &str, _operation_name: Option<&str>) {}

    fn request_completed(&self, _cache_key: &str, _elapsed: Duration) {}

    fn request_cancelled(&self, _cache_key: &str) {}

    fn request_timed_out(&self, _cache_key: &str) {}

    fn cache_hit(&self, _cache_key: &str) {}

    fn cache_miss(&self, _cache_key: &str) {}

    fn cache_added(&self, _cache_key: &str) {}

    fn plan_generated(&self, _cache_key: &str, _plan: &QueryPlan) {}
}
