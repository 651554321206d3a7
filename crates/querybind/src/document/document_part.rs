use crate::document::ArgumentPart;
use crate::document::DirectivePart;
use crate::document::FieldPart;
use crate::document::FragmentSpreadPart;
use crate::document::InlineFragmentPart;
use crate::document::NamedFragmentPart;
use crate::document::OperationPart;
use crate::document::PartId;
use crate::document::PartKind;
use crate::document::SelectionSetPart;
use crate::document::VariablePart;
use crate::loc::SourceLocation;

/// Kind-specific payload of a [`DocumentPart`].
#[derive(Clone, Debug, PartialEq)]
pub enum PartData {
    Argument(ArgumentPart),
    Directive(DirectivePart),
    Document,
    Field(FieldPart),
    FragmentSpread(FragmentSpreadPart),
    InlineFragment(InlineFragmentPart),
    NamedFragment(NamedFragmentPart),
    Operation(OperationPart),
    SelectionSet(SelectionSetPart),
    Variable(VariablePart),
}
impl PartData {
    pub fn kind(&self) -> PartKind {
        match self {
            Self::Argument(_) => PartKind::Argument,
            Self::Directive(_) => PartKind::Directive,
            Self::Document => PartKind::Document,
            Self::Field(_) => PartKind::Field,
            Self::FragmentSpread(_) => PartKind::FragmentSpread,
            Self::InlineFragment(_) => PartKind::InlineFragment,
            Self::NamedFragment(_) => PartKind::NamedFragment,
            Self::Operation(_) => PartKind::Operation,
            Self::SelectionSet(_) => PartKind::SelectionSet,
            Self::Variable(_) => PartKind::Variable,
        }
    }
}

/// A node of the bound document graph.
///
/// Ownership flows top-down: a part's `children` are owned by it, while
/// `parent` is a plain back-reference that is assigned once, when the part
/// is attached.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentPart {
    pub(crate) children: Vec<PartId>,
    pub(crate) data: PartData,
    pub(crate) location: Option<SourceLocation>,
    pub(crate) parent: Option<PartId>,
}
impl DocumentPart {
    pub(crate) fn new(data: PartData, location: Option<SourceLocation>) -> Self {
        Self {
            children: vec![],
            data,
            location,
            parent: None,
        }
    }

    pub fn children(&self) -> &[PartId] {
        &self.children
    }

    pub fn data(&self) -> &PartData {
        &self.data
    }

    pub fn kind(&self) -> PartKind {
        self.data.kind()
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn parent(&self) -> Option<PartId> {
        self.parent
    }

    pub fn as_argument(&self) -> Option<&ArgumentPart> {
        if let PartData::Argument(arg) = &self.data { Some(arg) } else { None }
    }

    pub fn as_directive(&self) -> Option<&DirectivePart> {
        if let PartData::Directive(directive) = &self.data { Some(directive) } else { None }
    }

    pub fn as_field(&self) -> Option<&FieldPart> {
        if let PartData::Field(field) = &self.data { Some(field) } else { None }
    }

    pub fn as_fragment_spread(&self) -> Option<&FragmentSpreadPart> {
        if let PartData::FragmentSpread(spread) = &self.data { Some(spread) } else { None }
    }

    pub fn as_inline_fragment(&self) -> Option<&InlineFragmentPart> {
        if let PartData::InlineFragment(inline) = &self.data { Some(inline) } else { None }
    }

    pub fn as_named_fragment(&self) -> Option<&NamedFragmentPart> {
        if let PartData::NamedFragment(frag) = &self.data { Some(frag) } else { None }
    }

    pub fn as_operation(&self) -> Option<&OperationPart> {
        if let PartData::Operation(op) = &self.data { Some(op) } else { None }
    }

    pub fn as_selection_set(&self) -> Option<&SelectionSetPart> {
        if let PartData::SelectionSet(set) = &self.data { Some(set) } else { None }
    }

    pub fn as_variable(&self) -> Option<&VariablePart> {
        if let PartData::Variable(var) = &self.data { Some(var) } else { None }
    }
}
