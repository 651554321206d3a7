/// A `fragment Name on Type { ... }` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedFragmentPart {
    pub(crate) is_referenced: bool,
    pub(crate) name: String,
    pub(crate) reference_count: u32,
    pub(crate) type_condition: String,
}
impl NamedFragmentPart {
    /// Whether any operation in the document reaches this fragment, directly
    /// or through other fragments.
    pub fn is_referenced(&self) -> bool {
        self.is_referenced
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The number of spreads anywhere in the document that resolved to this
    /// fragment.
    pub fn reference_count(&self) -> u32 {
        self.reference_count
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}
