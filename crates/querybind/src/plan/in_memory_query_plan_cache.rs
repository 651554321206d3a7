use crate::plan::PlanExpiration;
use crate::plan::QueryPlan;
use crate::plan::QueryPlanCacheProvider;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use tokio::time::Instant;

/// Point-in-time counters of an [`InMemoryQueryPlanCache`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CacheStats {
    pub additions: u64,
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug)]
struct CacheEntry {
    expiration: PlanExpiration,
    /// `None` when the lifetime reaches past what an [`Instant`] can hold.
    expires_at: Option<Instant>,
    plan: Arc<QueryPlan>,
}
impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

/// A process-local [`QueryPlanCacheProvider`].
///
/// Expired entries are dropped lazily, when they are next looked up, or in
/// bulk via [`InMemoryQueryPlanCache::purge_expired`].
#[derive(Debug, Default)]
pub struct InMemoryQueryPlanCache {
    additions: AtomicU64,
    entries: RwLock<HashMap<String, CacheEntry>>,
    hits: AtomicU64,
    misses: AtomicU64,
}
impl InMemoryQueryPlanCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Drop every expired entry, returning how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        before - entries.len()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            additions: self.additions.load(Ordering::Relaxed),
            entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    fn record_miss(&self, key: &str) -> Option<Arc<QueryPlan>> {
        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(key, "query plan cache miss");
        None
    }
}
impl QueryPlanCacheProvider for InMemoryQueryPlanCache {
    fn try_get(&self, key: &str) -> Option<Arc<QueryPlan>> {
        let now = Instant::now();
        let mut entries = self.entries.write();
        let Some(entry) = entries.get_mut(key) else {
            return self.record_miss(key);
        };

        if entry.is_expired(now) {
            entries.remove(key);
            return self.record_miss(key);
        }

        if let PlanExpiration::Sliding(duration) = entry.expiration {
            entry.expires_at = now.checked_add(duration);
        }
        self.hits.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(key, "query plan cache hit");
        Some(entry.plan.clone())
    }

    fn try_put(&self, key: &str, plan: Arc<QueryPlan>, expiration: PlanExpiration) -> bool {
        if !plan.is_valid() || !plan.is_cacheable() {
            tracing::trace!(key, "refusing to cache a non-cacheable query plan");
            return false;
        }

        let entry = CacheEntry {
            expiration,
            expires_at: Instant::now().checked_add(expiration.duration()),
            plan,
        };
        self.entries.write().insert(key.to_string(), entry);
        self.additions.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(key, ?expiration, "cached query plan");
        true
    }
}
