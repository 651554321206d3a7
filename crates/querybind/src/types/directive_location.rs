use crate::ast;
use std::fmt;

/// Where a directive may be applied. Only the executable locations matter to
/// document binding; every type-system location is folded into
/// [`DirectiveLocation::TypeSystem`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum DirectiveLocation {
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    Mutation,
    Query,
    Subscription,
    VariableDefinition,
    TypeSystem(String),
}
impl DirectiveLocation {
    pub fn is_executable(&self) -> bool {
        !matches!(self, Self::TypeSystem(_))
    }
}
impl std::convert::From<&ast::schema::DirectiveLocation> for DirectiveLocation {
    fn from(value: &ast::schema::DirectiveLocation) -> Self {
        use ast::schema::DirectiveLocation as AstLoc;
        match value {
            AstLoc::Field => Self::Field,
            AstLoc::FragmentDefinition => Self::FragmentDefinition,
            AstLoc::FragmentSpread => Self::FragmentSpread,
            AstLoc::InlineFragment => Self::InlineFragment,
            AstLoc::Mutation => Self::Mutation,
            AstLoc::Query => Self::Query,
            AstLoc::Subscription => Self::Subscription,
            AstLoc::VariableDefinition => Self::VariableDefinition,
            other => Self::TypeSystem(format!("{other:?}")),
        }
    }
}
impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Field => "FIELD",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::Mutation => "MUTATION",
            Self::Query => "QUERY",
            Self::Subscription => "SUBSCRIPTION",
            Self::VariableDefinition => "VARIABLE_DEFINITION",
            Self::TypeSystem(name) => name.as_str(),
        };
        write!(f, "{name}")
    }
}
