use crate::plan::PlanLimits;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExecutionConfig {
    /// Run every operation's top-level fields one at a time, as mutations
    /// always are.
    pub debug_mode: bool,
    pub max_field_count: usize,
    pub max_query_depth: usize,
    /// Wall-clock limit for executing an operation's fields. `0` disables
    /// it.
    pub timeout_ms: u64,
}
impl ExecutionConfig {
    pub fn plan_limits(&self) -> PlanLimits {
        PlanLimits {
            max_depth: self.max_query_depth,
            max_field_count: self.max_field_count,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}
impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            debug_mode: false,
            max_field_count: 0,
            max_query_depth: 0,
            timeout_ms: 30_000,
        }
    }
}
