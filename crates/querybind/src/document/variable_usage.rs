use crate::loc::SourceLocation;
use crate::types::TypeAnnotation;

/// A `$name` occurrence found somewhere within a supplied value.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableUsage {
    /// The type expected where the variable was used (if known).
    pub location_type: Option<TypeAnnotation>,
    /// Whether the argument or input field the variable fills has a default
    /// of its own.
    pub location_has_default: bool,
    pub name: String,
    pub source_location: Option<SourceLocation>,
}
