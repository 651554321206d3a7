use crate::plan::PlanExpiration;
use crate::plan::QueryPlan;
use std::sync::Arc;

/// A concurrent store of generated plans.
///
/// Racing `try_put`s for one key are allowed; the last writer wins.
pub trait QueryPlanCacheProvider: std::fmt::Debug + Send + Sync {
    fn try_get(&self, key: &str) -> Option<Arc<QueryPlan>>;

    /// Returns whether the plan was stored. Plans that are not both valid
    /// and cacheable are never stored.
    fn try_put(&self, key: &str, plan: Arc<QueryPlan>, expiration: PlanExpiration) -> bool;
}
