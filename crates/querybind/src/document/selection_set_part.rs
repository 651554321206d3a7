use crate::document::ExecutableField;
use std::sync::OnceLock;

/// An ordered set of selections (fields, inline fragments, and fragment
/// spreads) scoped to a single graph type.
#[derive(Clone, Debug, Default)]
pub struct SelectionSetPart {
    pub(crate) executable_fields: OnceLock<Vec<ExecutableField>>,
    pub(crate) scope_type: Option<String>,
}
impl SelectionSetPart {
    pub(crate) fn new(scope_type: Option<String>) -> Self {
        Self {
            executable_fields: OnceLock::new(),
            scope_type,
        }
    }

    /// The name of the graph type every selection in this set is made
    /// against, if it could be resolved.
    pub fn scope_type(&self) -> Option<&str> {
        self.scope_type.as_deref()
    }
}
impl PartialEq for SelectionSetPart {
    fn eq(&self, other: &Self) -> bool {
        self.scope_type == other.scope_type
    }
}
