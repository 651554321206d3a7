use crate::document::OperationKind;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaLookup;
use crate::types::DirectiveDefinition;
use crate::types::GraphType;
use indexmap::IndexMap;

/// Represents a fully typechecked and immutable GraphQL schema.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directive_defs: IndexMap<String, DirectiveDefinition>,
    pub(crate) identity: String,
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: String,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphType>,
}
impl Schema {
    /// Returns all directives defined within this [`Schema`].
    ///
    /// [^note] This map includes both directives defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in directives like
    /// `@skip`.
    pub fn all_directives(&self) -> &IndexMap<String, DirectiveDefinition> {
        &self.directive_defs
    }

    /// Returns all types defined within this [`Schema`], built-in scalars
    /// included.
    pub fn all_types(&self) -> &IndexMap<String, GraphType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    pub fn mutation_type(&self) -> Option<&GraphType> {
        self.root_type(OperationKind::Mutation)
    }

    /// Returns this [`Schema`]'s Query root operation type.
    ///
    /// [^note] Prefer this over looking up a type named `"Query"`: the root
    /// type name may be overridden by a `schema { query: ... }` definition.
    pub fn query_type(&self) -> Option<&GraphType> {
        self.root_type(OperationKind::Query)
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one
    /// was defined).
    pub fn subscription_type(&self) -> Option<&GraphType> {
        self.root_type(OperationKind::Subscription)
    }
}
impl SchemaLookup for Schema {
    fn identity(&self) -> &str {
        self.identity.as_str()
    }

    fn find_directive(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directive_defs.get(name)
    }

    fn find_graph_type(&self, name: &str) -> Option<&GraphType> {
        self.types.get(name)
    }

    fn root_type_name(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Query => Some(self.query_type.as_str()),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }
    }
}
