use crate::document::PartId;

/// A `...Name` reference site.
///
/// Children: [`DirectivePart`](crate::document::DirectivePart)s.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpreadPart {
    pub(crate) fragment: Option<PartId>,
    pub(crate) fragment_name: String,
}
impl FragmentSpreadPart {
    /// The [`NamedFragmentPart`](crate::document::NamedFragmentPart) this
    /// spread resolved to. `None` if no fragment of that name is declared.
    pub fn fragment(&self) -> Option<PartId> {
        self.fragment
    }

    pub fn fragment_name(&self) -> &str {
        self.fragment_name.as_str()
    }
}
