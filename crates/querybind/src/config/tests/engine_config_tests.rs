use crate::config::ConfigError;
use crate::config::EngineConfig;
use crate::config::ExpirationPolicy;
use crate::plan::PlanExpiration;
use crate::plan::PlanLimits;
use std::time::Duration;

#[test]
fn empty_config_uses_defaults() {
    let config = EngineConfig::from_toml_str("").unwrap();
    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.execution.timeout(), Some(Duration::from_secs(30)));
    assert!(!config.execution.debug_mode);
    assert!(config.cache.enabled);
    assert_eq!(config.cache.plan_expiration(), PlanExpiration::Sliding(Duration::from_secs(300)));
    assert!(config.authorization.enabled);
}

#[test]
fn full_config() {
    let config = EngineConfig::from_toml_str(r#"
        [execution]
        timeout_ms = 250
        debug_mode = true
        max_query_depth = 8
        max_field_count = 120

        [cache]
        enabled = false
        expiration = "absolute"
        ttl_secs = 60

        [authorization]
        enabled = false
    "#).unwrap();

    assert_eq!(config.execution.timeout(), Some(Duration::from_millis(250)));
    assert!(config.execution.debug_mode);
    assert_eq!(config.execution.plan_limits(), PlanLimits { max_depth: 8, max_field_count: 120 });
    assert!(!config.cache.enabled);
    assert_eq!(config.cache.expiration, ExpirationPolicy::Absolute);
    assert_eq!(
        config.cache.plan_expiration(),
        PlanExpiration::AbsoluteFromNow(Duration::from_secs(60)),
    );
    assert!(!config.authorization.enabled);
}

#[test]
fn zero_timeout_disables_it() {
    let config = EngineConfig::from_toml_str("[execution]\ntimeout_ms = 0\n").unwrap();
    assert_eq!(config.execution.timeout(), None);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = EngineConfig::from_toml_str("[execution]\ntimeout = 5\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { path: None, .. }));
}

#[test]
fn bad_expiration_policy_is_rejected() {
    assert!(EngineConfig::from_toml_str("[cache]\nexpiration = \"forever\"\n").is_err());
}

#[test]
fn missing_file() {
    let err = EngineConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, ConfigError::FileReadError { .. }));
}
