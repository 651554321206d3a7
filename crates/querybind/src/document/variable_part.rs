use crate::document::SuppliedValue;
use crate::types::TypeAnnotation;

/// An operation-scoped `$name: Type = default` declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct VariablePart {
    pub(crate) default_value: Option<SuppliedValue>,
    pub(crate) is_referenced: bool,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl VariablePart {
    pub fn default_value(&self) -> Option<&SuppliedValue> {
        self.default_value.as_ref()
    }

    pub fn is_referenced(&self) -> bool {
        self.is_referenced
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
