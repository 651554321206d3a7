#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthorizationConfig {
    /// When disabled, security requirements on fields are not checked.
    pub enabled: bool,
}
impl Default for AuthorizationConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
