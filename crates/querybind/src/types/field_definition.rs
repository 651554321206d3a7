use crate::loc;
use crate::types::InputValueDefinition;
use crate::types::SecurityRequirement;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Represents a defined field on an [`ObjectType`](crate::types::ObjectType)
/// or [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub(crate) arguments: IndexMap<String, InputValueDefinition>,
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) name: String,
    pub(crate) parent_type_name: String,
    pub(crate) security: Vec<SecurityRequirement>,
    pub(crate) type_annotation: TypeAnnotation,
}
impl FieldDefinition {
    pub fn arguments(&self) -> &IndexMap<String, InputValueDefinition> {
        &self.arguments
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The name of the object or interface type that declares this field.
    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }

    pub fn security(&self) -> &[SecurityRequirement] {
        &self.security
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
