use crate::execution::Principal;
use crate::types::SecurityRequirement;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AuthorizationOutcome {
    Allowed,
    Denied {
        reason: String,
    },
}
impl AuthorizationOutcome {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Decides whether a principal satisfies a field's security requirements.
///
/// Invoked once per secure field per execution; checks for different fields
/// may run concurrently.
#[async_trait::async_trait]
pub trait Authorizer: std::fmt::Debug + Send + Sync {
    async fn authorize(
        &self,
        principal: Option<&Principal>,
        requirements: &[SecurityRequirement],
    ) -> AuthorizationOutcome;
}
