use crate::loc;
use crate::types::InputValueDefinition;
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub def_location: loc::SchemaDefLocation,
    pub fields: IndexMap<String, InputValueDefinition>,
    pub name: String,
}
