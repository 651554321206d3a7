use std::fmt;

/// Index of a [`DocumentPart`](crate::document::DocumentPart) within the
/// [`QueryDocument`](crate::document::QueryDocument) that owns it.
///
/// Ids are only meaningful for the document that issued them.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Serialize)]
#[serde(transparent)]
pub struct PartId(pub(crate) u32);
impl PartId {
    pub(crate) const ROOT: PartId = PartId(0);

    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }
}
impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
