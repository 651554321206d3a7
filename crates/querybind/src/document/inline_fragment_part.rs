/// `... on Type { ... }` (or `... { ... }` when no type condition is given).
///
/// Children, in order: [`DirectivePart`](crate::document::DirectivePart)s,
/// then the selection set.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragmentPart {
    pub(crate) type_condition: Option<String>,
}
impl InlineFragmentPart {
    pub fn type_condition(&self) -> Option<&str> {
        self.type_condition.as_deref()
    }
}
