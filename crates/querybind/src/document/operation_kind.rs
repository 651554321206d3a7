use crate::types::DirectiveLocation;
use std::fmt;

/// Which root operation type an [`OperationPart`](crate::document::OperationPart)
/// executes against.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    pub fn default_root_type_name(&self) -> &'static str {
        match self {
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        }
    }

    pub fn directive_location(&self) -> DirectiveLocation {
        match self {
            Self::Mutation => DirectiveLocation::Mutation,
            Self::Query => DirectiveLocation::Query,
            Self::Subscription => DirectiveLocation::Subscription,
        }
    }
}
impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mutation => write!(f, "mutation"),
            Self::Query => write!(f, "query"),
            Self::Subscription => write!(f, "subscription"),
        }
    }
}
