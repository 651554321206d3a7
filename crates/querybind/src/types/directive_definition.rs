use crate::ast;
use crate::loc;
use crate::types::DirectiveLocation;
use crate::types::InputValueDefinition;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Represents a defined directive.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub(crate) arguments: IndexMap<String, InputValueDefinition>,
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) locations: Vec<DirectiveLocation>,
    pub(crate) name: String,
    pub(crate) repeatable: bool,
}
impl DirectiveDefinition {
    pub(crate) fn from_ast(def: &ast::schema::DirectiveDefinition) -> Self {
        Self {
            arguments: def.arguments.iter()
                .map(|arg| (arg.name.to_string(), InputValueDefinition::from_ast(arg)))
                .collect(),
            def_location: loc::SchemaDefLocation::from_ast_position(&def.position),
            locations: def.locations.iter().map(DirectiveLocation::from).collect(),
            name: def.name.to_string(),
            repeatable: def.repeatable,
        }
    }

    pub(crate) fn builtin(
        name: &str,
        arguments: Vec<InputValueDefinition>,
        locations: Vec<DirectiveLocation>,
    ) -> Self {
        Self {
            arguments: arguments.into_iter()
                .map(|arg| (arg.name.to_string(), arg))
                .collect(),
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            locations,
            name: name.to_string(),
            repeatable: false,
        }
    }

    /// `@skip(if: Boolean!)` and `@include(if: Boolean!)` share a shape.
    pub(crate) fn builtin_conditional(name: &str) -> Self {
        Self::builtin(
            name,
            vec![InputValueDefinition::new("if", TypeAnnotation::named("Boolean", false))],
            vec![
                DirectiveLocation::Field,
                DirectiveLocation::FragmentSpread,
                DirectiveLocation::InlineFragment,
            ],
        )
    }

    pub fn arguments(&self) -> &IndexMap<String, InputValueDefinition> {
        &self.arguments
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn is_allowed_at(&self, location: &DirectiveLocation) -> bool {
        self.locations.contains(location)
    }

    pub fn locations(&self) -> &[DirectiveLocation] {
        &self.locations
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn repeatable(&self) -> bool {
        self.repeatable
    }
}
