mod in_memory_query_plan_cache;
mod plan_error;
mod plan_expiration;
mod plan_limits;
mod query_plan;
mod query_plan_cache_provider;
mod query_plan_key_manager;
mod sha256_key_manager;

pub use in_memory_query_plan_cache::CacheStats;
pub use in_memory_query_plan_cache::InMemoryQueryPlanCache;
pub use plan_error::PlanError;
pub use plan_expiration::PlanExpiration;
pub use plan_limits::PlanLimits;
pub use query_plan::QueryPlan;
pub use query_plan_cache_provider::QueryPlanCacheProvider;
pub use query_plan_key_manager::QueryPlanKeyManager;
pub use sha256_key_manager::Sha256KeyManager;

#[cfg(test)]
mod tests;
