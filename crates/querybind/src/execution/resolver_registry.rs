use crate::execution::FieldResolver;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Maps `(type name, field name)` to the resolver for that field.
///
/// A field with no registered resolver is resolved by looking its name up
/// on the parent value.
#[derive(Clone, Default)]
pub struct ResolverRegistry {
    resolvers: HashMap<(String, String), Arc<dyn FieldResolver>>,
}
impl ResolverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, type_name: &str, field_name: &str) -> Option<&Arc<dyn FieldResolver>> {
        self.resolvers.get(&(type_name.to_string(), field_name.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    /// Replaces any resolver previously registered for the same field.
    pub fn register(
        &mut self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        resolver: impl FieldResolver + 'static,
    ) -> &mut Self {
        self.resolvers.insert((type_name.into(), field_name.into()), Arc::new(resolver));
        self
    }

    pub fn with_resolver(
        mut self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        resolver: impl FieldResolver + 'static,
    ) -> Self {
        self.register(type_name, field_name, resolver);
        self
    }
}
impl fmt::Debug for ResolverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<String> = self.resolvers.keys()
            .map(|(type_name, field_name)| format!("{type_name}.{field_name}"))
            .collect();
        fields.sort();
        f.debug_struct("ResolverRegistry")
            .field("resolvers", &fields)
            .finish()
    }
}
