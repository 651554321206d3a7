mod directive_definition;
mod directive_location;
mod enum_type;
mod field_definition;
mod graph_type;
mod input_object_type;
mod input_value_definition;
mod interface_type;
mod object_type;
mod scalar_type;
mod security_requirement;
mod type_annotation;
mod union_type;

pub use directive_definition::DirectiveDefinition;
pub use directive_location::DirectiveLocation;
pub use enum_type::EnumType;
pub use field_definition::FieldDefinition;
pub use graph_type::GraphType;
pub use graph_type::GraphTypeKind;
pub use input_object_type::InputObjectType;
pub use input_value_definition::InputValueDefinition;
pub use interface_type::InterfaceType;
pub use object_type::ObjectType;
pub use scalar_type::ScalarType;
pub use security_requirement::SecurityRequirement;
pub use type_annotation::TypeAnnotation;
pub use union_type::UnionType;

#[cfg(test)]
mod tests;
