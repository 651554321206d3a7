use crate::loc;
use crate::types::FieldDefinition;
use crate::types::SecurityRequirement;
use indexmap::IndexMap;

/// Information associated with [`GraphType::Interface`](crate::types::GraphType::Interface).
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType {
    pub def_location: loc::SchemaDefLocation,
    pub fields: IndexMap<String, FieldDefinition>,
    /// Names of every object type declaring `implements <this interface>`,
    /// in schema declaration order.
    pub implementations: Vec<String>,
    pub name: String,
    pub security: Vec<SecurityRequirement>,
}
