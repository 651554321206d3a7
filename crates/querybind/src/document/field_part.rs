use crate::types::FieldDefinition;

pub const TYPENAME_FIELD_NAME: &str = "__typename";

/// What a [`FieldPart`] resolved to when it was bound.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldBinding {
    /// A field declared by the schema.
    Schema(FieldDefinition),

    /// A synthetic `__typename` field answering for one concrete object type.
    TypeName {
        concrete_type: String,
    },

    /// No schema counterpart was found. The part exists so diagnostics can
    /// point at it but it never executes.
    Unbound,
}

/// A single requested field.
///
/// Children, in order: [`ArgumentPart`](crate::document::ArgumentPart)s,
/// [`DirectivePart`](crate::document::DirectivePart)s, then an optional
/// selection set.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldPart {
    pub(crate) alias: Option<String>,
    pub(crate) binding: FieldBinding,
    pub(crate) name: String,
}
impl FieldPart {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn binding(&self) -> &FieldBinding {
        &self.binding
    }

    /// The schema definition this field is bound to (if any).
    pub fn definition(&self) -> Option<&FieldDefinition> {
        match &self.binding {
            FieldBinding::Schema(field_def) => Some(field_def),
            _ => None,
        }
    }

    pub fn is_bound(&self) -> bool {
        !matches!(self.binding, FieldBinding::Unbound)
    }

    pub fn is_typename(&self) -> bool {
        matches!(self.binding, FieldBinding::TypeName { .. })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// If an alias was specified for this selection, return the alias.
    /// Otherwise return the name of the field.
    pub fn response_key(&self) -> &str {
        self.alias().unwrap_or(self.name.as_str())
    }
}
