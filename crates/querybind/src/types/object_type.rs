use crate::loc;
use crate::types::FieldDefinition;
use crate::types::SecurityRequirement;
use indexmap::IndexMap;

/// Information associated with [`GraphType::Object`](crate::types::GraphType::Object).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType {
    pub def_location: loc::SchemaDefLocation,
    pub fields: IndexMap<String, FieldDefinition>,
    pub interfaces: Vec<String>,
    pub name: String,
    pub security: Vec<SecurityRequirement>,
}
