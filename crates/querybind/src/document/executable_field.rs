use crate::document::PartId;

/// One entry of a flattened selection set: the
/// [`FieldPart`](crate::document::FieldPart) to execute and the concrete or
/// narrowed type it was selected against.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ExecutableField {
    pub field: PartId,
    pub target_type: String,
}
