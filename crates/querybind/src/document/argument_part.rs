use crate::document::SuppliedValue;
use crate::types::InputValueDefinition;

/// A named argument supplied to a field or directive.
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentPart {
    pub(crate) definition: Option<InputValueDefinition>,
    pub(crate) name: String,
    pub(crate) value: SuppliedValue,
}
impl ArgumentPart {
    /// The schema argument this was matched to. An argument the schema does
    /// not declare is still kept (with no definition) so tooling can see it.
    pub fn definition(&self) -> Option<&InputValueDefinition> {
        self.definition.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self) -> &SuppliedValue {
        &self.value
    }
}
