use crate::types::DirectiveDefinition;
use crate::types::DirectiveLocation;

/// An applied `@directive`.
///
/// Children: [`ArgumentPart`](crate::document::ArgumentPart)s.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectivePart {
    pub(crate) definition: Option<DirectiveDefinition>,
    pub(crate) location: DirectiveLocation,
    pub(crate) name: String,
}
impl DirectivePart {
    pub fn definition(&self) -> Option<&DirectiveDefinition> {
        self.definition.as_ref()
    }

    /// The kind of document location this directive was applied at.
    pub fn location(&self) -> &DirectiveLocation {
        &self.location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
