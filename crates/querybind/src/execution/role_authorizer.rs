use crate::execution::AuthorizationOutcome;
use crate::execution::Authorizer;
use crate::execution::Principal;
use crate::types::SecurityRequirement;
use std::collections::HashMap;

/// An [`Authorizer`] that grants access by role membership.
///
/// Every requirement must hold. A requirement listing roles needs the
/// principal to have at least one of them; a named policy is looked up and
/// checked the same way. Unknown policies deny. Any requirement needs an
/// authenticated principal.
#[derive(Clone, Debug, Default)]
pub struct RoleAuthorizer {
    policies: HashMap<String, Vec<String>>,
}
impl RoleAuthorizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(
        mut self,
        policy: impl Into<String>,
        roles: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.policies.insert(policy.into(), roles.into_iter().map(Into::into).collect());
        self
    }

    fn check(&self, principal: &Principal, requirement: &SecurityRequirement) -> Result<(), String> {
        if !requirement.roles.is_empty()
            && !requirement.roles.iter().any(|role| principal.has_role(role)) {
            return Err(format!(
                "`{}` lacks any of the roles [{}]",
                principal.name(),
                requirement.roles.join(", "),
            ));
        }

        if let Some(policy) = &requirement.policy {
            let Some(policy_roles) = self.policies.get(policy) else {
                return Err(format!("Unknown authorization policy `{policy}`"));
            };
            if !policy_roles.iter().any(|role| principal.has_role(role)) {
                return Err(format!(
                    "`{}` does not satisfy policy `{policy}`",
                    principal.name(),
                ));
            }
        }
        Ok(())
    }
}
#[async_trait::async_trait]
impl Authorizer for RoleAuthorizer {
    async fn authorize(
        &self,
        principal: Option<&Principal>,
        requirements: &[SecurityRequirement],
    ) -> AuthorizationOutcome {
        if requirements.is_empty() {
            return AuthorizationOutcome::Allowed;
        }
        let Some(principal) = principal else {
            return AuthorizationOutcome::Denied {
                reason: "Authentication is required".to_string(),
            };
        };
        for requirement in requirements {
            if let Err(reason) = self.check(principal, requirement) {
                return AuthorizationOutcome::Denied { reason };
            }
        }
        AuthorizationOutcome::Allowed
    }
}
