use crate::ast;
use std::fmt;

/// Represents the annotated type of a
/// [`FieldDefinition`](crate::types::FieldDefinition), an argument, or an
/// operation variable (e.g. `[String!]!`).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeAnnotation {
    List {
        inner: Box<TypeAnnotation>,
        nullable: bool,
    },
    Named {
        name: String,
        nullable: bool,
    },
}
impl TypeAnnotation {
    pub fn named(name: impl Into<String>, nullable: bool) -> Self {
        Self::Named {
            name: name.into(),
            nullable,
        }
    }

    pub fn list(inner: TypeAnnotation, nullable: bool) -> Self {
        Self::List {
            inner: Box::new(inner),
            nullable,
        }
    }

    pub(crate) fn from_ast_type(ast_type: &ast::operation::Type) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(ast_type: &ast::operation::Type, nullable: bool) -> Self {
        match ast_type {
            ast::operation::Type::ListType(inner) =>
                Self::List {
                    inner: Box::new(Self::from_ast_type_impl(inner, true)),
                    nullable,
                },

            ast::operation::Type::NamedType(name) =>
                Self::Named {
                    name: name.to_string(),
                    nullable,
                },

            ast::operation::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }

    /// Recursively unwrap any list wrappers and return the name of the
    /// innermost named type.
    pub fn innermost_name(&self) -> &str {
        match self {
            Self::List { inner, .. } => inner.innermost_name(),
            Self::Named { name, .. } => name.as_str(),
        }
    }

    /// The element type if this annotation is a list.
    pub fn list_item(&self) -> Option<&TypeAnnotation> {
        match self {
            Self::List { inner, .. } => Some(inner),
            Self::Named { .. } => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List { .. })
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            Self::List { nullable, .. } => *nullable,
            Self::Named { nullable, .. } => *nullable,
        }
    }

    /// The same annotation with its outermost nullability flag replaced.
    pub fn with_nullable(&self, nullable: bool) -> Self {
        match self {
            Self::List { inner, .. } => Self::List {
                inner: inner.clone(),
                nullable,
            },
            Self::Named { name, .. } => Self::Named {
                name: name.clone(),
                nullable,
            },
        }
    }

    /// Whether a variable declared with this type may be used in a position
    /// expecting `location_type`.
    ///
    /// https://spec.graphql.org/October2021/#AreTypesCompatible()
    pub fn is_compatible_variable_for(&self, location_type: &TypeAnnotation) -> bool {
        if !location_type.nullable() {
            if self.nullable() {
                return false;
            }
            return self.with_nullable(true)
                .is_compatible_variable_for(&location_type.with_nullable(true));
        }

        if !self.nullable() {
            return self.with_nullable(true).is_compatible_variable_for(location_type);
        }

        match (self, location_type) {
            (Self::List { inner: var_inner, .. }, Self::List { inner: loc_inner, .. }) =>
                var_inner.is_compatible_variable_for(loc_inner),
            (Self::Named { name: var_name, .. }, Self::Named { name: loc_name, .. }) =>
                var_name == loc_name,
            _ => false,
        }
    }
}
impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List { inner, nullable } => {
                write!(f, "[{inner}]")?;
                if !nullable {
                    write!(f, "!")?;
                }
            },
            Self::Named { name, nullable } => {
                write!(f, "{name}")?;
                if !nullable {
                    write!(f, "!")?;
                }
            },
        }
        Ok(())
    }
}
