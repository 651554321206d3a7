use std::fmt;

/// The closed set of node kinds a bound document is built from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PartKind {
    Argument,
    Directive,
    Document,
    Field,
    FragmentSpread,
    InlineFragment,
    NamedFragment,
    Operation,
    SelectionSet,
    Variable,
}
impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Argument => "argument",
            Self::Directive => "directive",
            Self::Document => "document",
            Self::Field => "field",
            Self::FragmentSpread => "fragment spread",
            Self::InlineFragment => "inline fragment",
            Self::NamedFragment => "fragment",
            Self::Operation => "operation",
            Self::SelectionSet => "selection set",
            Self::Variable => "variable",
        };
        write!(f, "{name}")
    }
}
