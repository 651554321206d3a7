mod argument_part;
mod directive_part;
mod document_part;
mod executable_field;
mod field_part;
mod fragment_spread_part;
mod inline_fragment_part;
mod named_fragment_part;
mod operation_kind;
mod operation_part;
mod part_id;
mod part_kind;
mod query_document;
mod selection_set_part;
mod supplied_value;
mod variable_part;
mod variable_usage;

pub use argument_part::ArgumentPart;
pub use directive_part::DirectivePart;
pub use document_part::DocumentPart;
pub use document_part::PartData;
pub use executable_field::ExecutableField;
pub use field_part::FieldBinding;
pub use field_part::FieldPart;
pub use field_part::TYPENAME_FIELD_NAME;
pub use fragment_spread_part::FragmentSpreadPart;
pub use inline_fragment_part::InlineFragmentPart;
pub use named_fragment_part::NamedFragmentPart;
pub use operation_kind::OperationKind;
pub use operation_part::OperationPart;
pub use part_id::PartId;
pub use part_kind::PartKind;
pub use query_document::QueryDocument;
pub use selection_set_part::SelectionSetPart;
pub use supplied_value::ScalarValue;
pub use supplied_value::SuppliedValue;
pub use supplied_value::ValueKind;
pub use variable_part::VariablePart;
pub use variable_usage::VariableUsage;
