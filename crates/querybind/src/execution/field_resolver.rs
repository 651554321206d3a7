use crate::execution::ResolverError;
use crate::response_path::ResponsePath;
use indexmap::IndexMap;
use std::future::Future;
use tokio_util::sync::CancellationToken;

pub type ResolverResult = std::result::Result<serde_json::Value, ResolverError>;

/// Everything a resolver is handed for one invocation.
#[derive(Clone, Debug)]
pub struct ResolverContext {
    pub(crate) arguments: IndexMap<String, serde_json::Value>,
    pub(crate) cancellation_token: CancellationToken,
    pub(crate) field_name: String,
    pub(crate) parent_type_name: String,
    pub(crate) path: ResponsePath,
    pub(crate) source: serde_json::Value,
}
impl ResolverContext {
    /// Argument values with variables substituted and schema defaults
    /// applied for omitted arguments.
    pub fn arguments(&self) -> &IndexMap<String, serde_json::Value> {
        &self.arguments
    }

    pub fn argument(&self, name: &str) -> Option<&serde_json::Value> {
        self.arguments.get(name)
    }

    /// Cancelled once the request is cancelled or times out. Resolvers doing
    /// long-running work should stop when it fires.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation_token
    }

    pub fn field_name(&self) -> &str {
        self.field_name.as_str()
    }

    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }

    pub fn path(&self) -> &ResponsePath {
        &self.path
    }

    /// The resolved value of the parent field (or the request's root value
    /// for top-level fields).
    pub fn source(&self) -> &serde_json::Value {
        &self.source
    }
}

/// Produces the value of one field. The executor treats it as an opaque,
/// possibly suspending, callable.
#[async_trait::async_trait]
pub trait FieldResolver: Send + Sync {
    async fn resolve(&self, ctx: ResolverContext) -> ResolverResult;
}

#[async_trait::async_trait]
impl<F, Fut> FieldResolver for F
where
    F: Fn(ResolverContext) -> Fut + Send + Sync,
    Fut: Future<Output = ResolverResult> + Send,
{
    async fn resolve(&self, ctx: ResolverContext) -> ResolverResult {
        (self)(ctx).await
    }
}
