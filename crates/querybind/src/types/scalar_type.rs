use crate::loc;

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub def_location: loc::SchemaDefLocation,
    pub name: String,
}
impl ScalarType {
    pub(crate) fn builtin(name: &str) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            name: name.to_string(),
        }
    }
}
