use crate::document::OperationKind;

/// A query, mutation, or subscription definition.
///
/// Children, in order: [`VariablePart`](crate::document::VariablePart)s,
/// [`DirectivePart`](crate::document::DirectivePart)s, then the root
/// selection set.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationPart {
    pub(crate) kind: OperationKind,
    pub(crate) name: Option<String>,
    pub(crate) root_type: Option<String>,
}
impl OperationPart {
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// `None` for an anonymous operation.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The schema type this operation's root selection set is bound against.
    /// `None` when the schema does not define a root type for this kind of
    /// operation; such an operation can never be executed.
    pub fn root_type(&self) -> Option<&str> {
        self.root_type.as_deref()
    }

    pub fn is_bound(&self) -> bool {
        self.root_type.is_some()
    }
}
