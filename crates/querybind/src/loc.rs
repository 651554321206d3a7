use crate::ast;
use std::fmt;

/// A line/column position within the text of an executable document.
///
/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), but
/// serializable so it can be reported back in a response.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}
impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub(crate) fn from_ast_position(pos: &ast::AstPos) -> Self {
        Self {
            line: pos.line,
            column: pos.column,
        }
    }
}
impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Where a schema element was defined.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SchemaDefLocation {
    GraphQLBuiltIn,
    Schema(SourceLocation),
}
impl SchemaDefLocation {
    pub(crate) fn from_ast_position(pos: &ast::AstPos) -> Self {
        Self::Schema(SourceLocation::from_ast_position(pos))
    }
}
