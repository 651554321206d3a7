use crate::plan::PlanExpiration;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpirationPolicy {
    Absolute,
    #[default]
    Sliding,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    pub enabled: bool,
    pub expiration: ExpirationPolicy,
    pub ttl_secs: u64,
}
impl CacheConfig {
    pub fn plan_expiration(&self) -> PlanExpiration {
        let ttl = Duration::from_secs(self.ttl_secs);
        match self.expiration {
            ExpirationPolicy::Absolute => PlanExpiration::AbsoluteFromNow(ttl),
            ExpirationPolicy::Sliding => PlanExpiration::Sliding(ttl),
        }
    }
}
impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            expiration: ExpirationPolicy::default(),
            ttl_secs: 300,
        }
    }
}
