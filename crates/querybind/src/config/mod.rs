mod authorization_config;
mod cache_config;
mod config_error;
mod engine_config;
mod execution_config;

pub use authorization_config::AuthorizationConfig;
pub use cache_config::CacheConfig;
pub use cache_config::ExpirationPolicy;
pub use config_error::ConfigError;
pub use engine_config::EngineConfig;
pub use execution_config::ExecutionConfig;

#[cfg(test)]
mod tests;
