use crate::config::AuthorizationConfig;
use crate::config::CacheConfig;
use crate::config::ConfigError;
use crate::config::ExecutionConfig;
use std::path::Path;

type Result<T> = std::result::Result<T, ConfigError>;

/// Settings for a [`QueryEngine`](crate::pipeline::QueryEngine), usually
/// loaded from TOML:
///
/// ```toml
/// [execution]
/// timeout_ms = 30000
/// debug_mode = false
/// max_query_depth = 0
/// max_field_count = 0
///
/// [cache]
/// enabled = true
/// expiration = "sliding"
/// ttl_secs = 300
///
/// [authorization]
/// enabled = true
/// ```
///
/// Every section and key is optional.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub authorization: AuthorizationConfig,
    pub cache: CacheConfig,
    pub execution: ExecutionConfig,
}
impl EngineConfig {
    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = std::fs::read_to_string(file_path)
            .map_err(|err| ConfigError::FileReadError {
                path: file_path.to_path_buf(),
                message: err.to_string(),
            })?;
        Self::parse(Some(file_path), content.as_str())
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(None, content)
    }

    fn parse(file_path: Option<&Path>, content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|err| ConfigError::ParseError {
                path: file_path.map(Path::to_path_buf),
                message: err.to_string(),
            })?;
        tracing::debug!(?config, "loaded engine config");
        Ok(config)
    }
}
