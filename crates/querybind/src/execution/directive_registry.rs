use crate::execution::ConditionalDirective;
use crate::execution::DirectiveError;
use crate::execution::DirectiveExecutor;
use crate::execution::DirectiveInvocation;
use crate::execution::DirectiveOutcome;
use crate::execution::DirectivePhase;
use crate::execution::ResolvedVariables;
use crate::execution::argument_values::resolve_arguments;
use crate::plan::QueryPlan;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Maps directive names to the executors that apply them. `@skip` and
/// `@include` are registered from the start.
#[derive(Clone)]
pub struct DirectiveRegistry {
    executors: HashMap<String, Arc<dyn DirectiveExecutor>>,
}
impl DirectiveRegistry {
    pub fn new() -> Self {
        Self::empty()
            .with_executor("include", ConditionalDirective::include())
            .with_executor("skip", ConditionalDirective::skip())
    }

    pub fn empty() -> Self {
        Self {
            executors: HashMap::new(),
        }
    }

    pub fn find(&self, directive_name: &str) -> Option<&Arc<dyn DirectiveExecutor>> {
        self.executors.get(directive_name)
    }

    pub fn register(
        &mut self,
        directive_name: impl Into<String>,
        executor: impl DirectiveExecutor + 'static,
    ) -> &mut Self {
        self.executors.insert(directive_name.into(), Arc::new(executor));
        self
    }

    pub fn with_executor(
        mut self,
        directive_name: impl Into<String>,
        executor: impl DirectiveExecutor + 'static,
    ) -> Self {
        self.register(directive_name, executor);
        self
    }

    /// Run the executor of every `phase` directive applied within `plan`'s
    /// operation (including inside the fragments it spreads), one at a time
    /// in declaration order. Directives whose target an earlier directive
    /// removed are passed over, as are directives nothing is registered for.
    ///
    /// Returns whether any directive altered the document. The first failing
    /// directive stops the rest.
    pub async fn apply(
        &self,
        plan: &mut QueryPlan,
        phase: DirectivePhase,
        variables: &ResolvedVariables,
    ) -> Result<bool, DirectiveError> {
        let directive_ids = plan.document().all_directives(plan.operation());
        let mut altered = false;
        for directive_id in directive_ids {
            let document = plan.document();
            if !document.is_attached(directive_id) {
                continue;
            }
            let Some(directive) = document.part(directive_id).as_directive() else { continue };
            let Some(executor) = self.find(directive.name()) else {
                tracing::trace!(directive = directive.name(), "no executor registered");
                continue;
            };
            if executor.phase() != phase {
                continue;
            }
            let Some(target) = document.parent(directive_id) else { continue };

            let executor = executor.clone();
            let name = directive.name().to_string();
            let location = document.part(directive_id).location().copied();
            let arguments = resolve_arguments(
                document,
                directive_id,
                directive.definition().map(|def| def.arguments()),
                variables,
            );

            tracing::trace!(directive = name.as_str(), %target, ?phase, "applying directive");
            let outcome = executor.execute(DirectiveInvocation {
                arguments,
                directive: directive_id,
                document: plan.document_mut(),
                location,
                name,
                target,
            }).await?;
            altered |= outcome == DirectiveOutcome::DocumentAltered;
        }

        if phase == DirectivePhase::SchemaGeneration {
            plan.schema_directives_applied = true;
        }
        Ok(altered)
    }
}
impl Default for DirectiveRegistry {
    fn default() -> Self {
        Self::new()
    }
}
impl fmt::Debug for DirectiveRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.executors.keys().map(String::as_str).collect();
        names.sort();
        f.debug_struct("DirectiveRegistry")
            .field("executors", &names)
            .finish()
    }
}
