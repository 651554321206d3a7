use crate::loc;

#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub def_location: loc::SchemaDefLocation,
    pub name: String,
    pub values: Vec<String>,
}
impl EnumType {
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}
