use crate::loc;
use crate::types::EnumType;
use crate::types::FieldDefinition;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::SecurityRequirement;
use crate::types::UnionType;
use indexmap::IndexMap;

/// Represents a defined GraphQL type.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphType {
    Enum(EnumType),
    InputObject(InputObjectType),
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}
impl GraphType {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        match self {
            Self::Enum(t) => &t.def_location,
            Self::InputObject(t) => &t.def_location,
            Self::Interface(t) => &t.def_location,
            Self::Object(t) => &t.def_location,
            Self::Scalar(t) => &t.def_location,
            Self::Union(t) => &t.def_location,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Enum(t) => t.name.as_str(),
            Self::InputObject(t) => t.name.as_str(),
            Self::Interface(t) => t.name.as_str(),
            Self::Object(t) => t.name.as_str(),
            Self::Scalar(t) => t.name.as_str(),
            Self::Union(t) => t.name.as_str(),
        }
    }

    pub fn kind(&self) -> GraphTypeKind {
        self.into()
    }

    /// The output fields selectable on this type. Only objects and
    /// interfaces have any.
    pub fn fields(&self) -> Option<&IndexMap<String, FieldDefinition>> {
        match self {
            Self::Interface(t) => Some(&t.fields),
            Self::Object(t) => Some(&t.fields),
            _ => None,
        }
    }

    pub fn find_field(&self, field_name: &str) -> Option<&FieldDefinition> {
        self.fields().and_then(|fields| fields.get(field_name))
    }

    /// Unions, interfaces, and objects can carry a selection set.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Object(_) | Self::Union(_))
    }

    /// Unions and interfaces need to be narrowed to a concrete object type
    /// at execution time.
    pub fn is_abstract(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Union(_))
    }

    /// Scalars, enums, and input objects may appear in input positions.
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Enum(_) | Self::InputObject(_) | Self::Scalar(_))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Enum(_) | Self::Scalar(_))
    }

    /// Security requirements declared on the type itself. They apply to
    /// every field selected from it.
    pub fn security(&self) -> &[SecurityRequirement] {
        match self {
            Self::Interface(t) => &t.security,
            Self::Object(t) => &t.security,
            _ => &[],
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(t) = self {
            Some(t)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphTypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl std::convert::From<&GraphType> for GraphTypeKind {
    fn from(value: &GraphType) -> Self {
        match value {
            GraphType::Enum(_) => Self::Enum,
            GraphType::InputObject(_) => Self::InputObject,
            GraphType::Interface(_) => Self::Interface,
            GraphType::Object(_) => Self::Object,
            GraphType::Scalar(_) => Self::Scalar,
            GraphType::Union(_) => Self::Union,
        }
    }
}
