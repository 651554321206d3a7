/// Derives plan cache keys.
///
/// Implementations must be pure: the same inputs always produce the same
/// key, and changing any input produces a different key.
pub trait QueryPlanKeyManager: std::fmt::Debug + Send + Sync {
    fn create_key(
        &self,
        schema_identity: &str,
        query_text: &str,
        operation_name: Option<&str>,
    ) -> String;
}
