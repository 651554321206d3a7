mod argument_values;
mod authorizer;
mod collected_field;
mod conditional_directive;
mod directive_error;
mod directive_executor;
mod directive_registry;
mod execution_fault;
mod execution_monitor;
mod execution_outcome;
mod field_executor;
mod field_resolver;
mod field_scheduler;
mod field_status;
mod principal;
mod resolved_variables;
mod resolver_registry;
mod role_authorizer;
mod variable_resolution_error;

pub use authorizer::AuthorizationOutcome;
pub use authorizer::Authorizer;
pub use conditional_directive::ConditionalDirective;
pub use directive_error::DirectiveError;
pub use directive_executor::DirectiveExecutor;
pub use directive_executor::DirectiveInvocation;
pub use directive_executor::DirectiveOutcome;
pub use directive_executor::DirectivePhase;
pub use directive_registry::DirectiveRegistry;
pub use execution_fault::ExecutionFault;
pub use execution_fault::ResolverError;
pub use execution_monitor::ExecutionMonitor;
pub use execution_monitor::MonitorState;
pub use execution_outcome::ExecutionOutcome;
pub use field_resolver::FieldResolver;
pub use field_resolver::ResolverContext;
pub use field_resolver::ResolverResult;
pub use field_scheduler::FieldScheduler;
pub use field_status::FieldStatus;
pub use principal::Principal;
pub use resolved_variables::ResolvedVariables;
pub use resolver_registry::ResolverRegistry;
pub use role_authorizer::RoleAuthorizer;
pub use variable_resolution_error::VariableResolutionError;

#[cfg(test)]
mod tests;
