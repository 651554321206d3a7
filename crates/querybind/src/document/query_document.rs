use crate::binding::BindError;
use crate::document::DocumentPart;
use crate::document::ExecutableField;
use crate::document::FieldBinding;
use crate::document::PartData;
use crate::document::PartId;
use crate::document::PartKind;
use crate::document::VariableUsage;
use crate::loc::SourceLocation;
use crate::messages::GraphMessage;
use crate::schema::SchemaLookup;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use std::sync::OnceLock;

/// A schema-bound executable document.
///
/// Every node lives in a single arena owned by the document and is addressed
/// by [`PartId`]. The root ([`PartKind::Document`]) owns the operations and
/// named fragments, in declaration order.
///
/// Documents are produced by
/// [`DocumentBuilder`](crate::binding::DocumentBuilder) and are read-only
/// afterwards except for [`QueryDocument::remove_part`] and
/// [`QueryDocument::attach_part`], which directives use to restructure the
/// document during execution. Either call drops every cached
/// [`QueryDocument::executable_fields`] result.
#[derive(Clone)]
pub struct QueryDocument {
    pub(crate) bind_errors: Vec<BindError>,
    pub(crate) parts: Vec<DocumentPart>,
    pub(crate) schema: Arc<dyn SchemaLookup>,
}
impl QueryDocument {
    pub(crate) fn new(schema: Arc<dyn SchemaLookup>) -> Self {
        Self {
            bind_errors: vec![],
            parts: vec![DocumentPart::new(PartData::Document, None)],
            schema,
        }
    }

    pub fn root(&self) -> PartId {
        PartId::ROOT
    }

    pub fn schema(&self) -> &Arc<dyn SchemaLookup> {
        &self.schema
    }

    /// Diagnostics produced while binding this document against its schema.
    pub fn bind_errors(&self) -> &[BindError] {
        &self.bind_errors
    }

    pub fn messages(&self) -> Vec<GraphMessage> {
        self.bind_errors.iter().map(GraphMessage::from).collect()
    }

    pub fn has_critical_messages(&self) -> bool {
        !self.bind_errors.is_empty()
    }

    /// # Panics
    ///
    /// If `id` was not issued by this document.
    pub fn part(&self, id: PartId) -> &DocumentPart {
        match self.parts.get(id.index()) {
            Some(part) => part,
            None => panic!("{id} does not belong to this document"),
        }
    }

    pub(crate) fn part_mut(&mut self, id: PartId) -> &mut DocumentPart {
        match self.parts.get_mut(id.index()) {
            Some(part) => part,
            None => panic!("{id} does not belong to this document"),
        }
    }

    pub fn parent(&self, id: PartId) -> Option<PartId> {
        self.part(id).parent
    }

    pub fn children(&self, id: PartId) -> &[PartId] {
        &self.part(id).children
    }

    pub fn children_of_kind(
        &self,
        id: PartId,
        kind: PartKind,
    ) -> impl Iterator<Item = PartId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(move |child| self.part(*child).kind() == kind)
    }

    pub fn arguments_of(&self, id: PartId) -> Vec<PartId> {
        self.children_of_kind(id, PartKind::Argument).collect()
    }

    pub fn directives_of(&self, id: PartId) -> Vec<PartId> {
        self.children_of_kind(id, PartKind::Directive).collect()
    }

    /// The selection set owned by an operation, field, inline fragment, or
    /// named fragment.
    pub fn selection_set_of(&self, id: PartId) -> Option<PartId> {
        self.children_of_kind(id, PartKind::SelectionSet).next()
    }

    pub fn variables_of(&self, operation: PartId) -> Vec<PartId> {
        self.children_of_kind(operation, PartKind::Variable).collect()
    }

    pub fn find_variable(&self, operation: PartId, name: &str) -> Option<PartId> {
        self.children_of_kind(operation, PartKind::Variable)
            .find(|var| self.part(*var).as_variable().is_some_and(|v| v.name() == name))
    }

    pub fn operations(&self) -> Vec<PartId> {
        self.children_of_kind(PartId::ROOT, PartKind::Operation).collect()
    }

    pub fn find_operation(&self, name: &str) -> Option<PartId> {
        self.children_of_kind(PartId::ROOT, PartKind::Operation)
            .find(|op| self.part(*op).as_operation().and_then(|op| op.name()) == Some(name))
    }

    pub fn named_fragments(&self) -> Vec<PartId> {
        self.children_of_kind(PartId::ROOT, PartKind::NamedFragment).collect()
    }

    /// The first-declared fragment with the given name.
    pub fn find_fragment(&self, name: &str) -> Option<PartId> {
        self.children_of_kind(PartId::ROOT, PartKind::NamedFragment)
            .find(|frag| {
                self.part(*frag).as_named_fragment().is_some_and(|f| f.name() == name)
            })
    }

    /// Whether `id` is reachable from the document root.
    pub fn is_attached(&self, id: PartId) -> bool {
        let mut current = id;
        loop {
            if current == PartId::ROOT {
                return true;
            }
            match self.part(current).parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// The operation or named fragment that (transitively) contains `id`.
    pub fn definition_of(&self, id: PartId) -> Option<PartId> {
        let mut current = id;
        loop {
            match self.part(current).kind() {
                PartKind::NamedFragment | PartKind::Operation => return Some(current),
                PartKind::Document => return None,
                _ => current = self.part(current).parent?,
            }
        }
    }

    /// Every directive applied to `id` or anything beneath it, following
    /// fragment spreads into the fragments they reference (including the
    /// directives on those fragment definitions). Declaration order.
    pub fn all_directives(&self, id: PartId) -> Vec<PartId> {
        let mut directives = vec![];
        self.walk(id, /* follow_spreads = */ true, &mut HashSet::new(), &mut |part_id, part| {
            if part.kind() == PartKind::Directive {
                directives.push(part_id);
            }
        });
        directives
    }

    /// Every field beneath `id`, following fragment spreads. Each field part
    /// is listed once.
    pub fn all_fields(&self, id: PartId) -> Vec<PartId> {
        let mut fields = vec![];
        self.walk(id, /* follow_spreads = */ true, &mut HashSet::new(), &mut |part_id, part| {
            if part.kind() == PartKind::Field {
                fields.push(part_id);
            }
        });
        fields
    }

    /// Named fragments reachable from `id` through spreads, transitively.
    pub fn reachable_fragments(&self, id: PartId) -> Vec<PartId> {
        let mut fragments = vec![];
        self.walk(id, /* follow_spreads = */ true, &mut HashSet::new(), &mut |part_id, part| {
            if part.kind() == PartKind::NamedFragment {
                fragments.push(part_id);
            }
        });
        fragments
    }

    /// Fields beneath `operation` whose schema field or declaring type
    /// carries security requirements.
    pub fn secure_fields(&self, operation: PartId) -> Vec<PartId> {
        self.all_fields(operation)
            .into_iter()
            .filter(|field_id| {
                let Some(field_def) = self.part(*field_id).as_field().and_then(|f| f.definition()) else {
                    return false;
                };
                !field_def.security().is_empty()
                    || self.schema.find_graph_type(field_def.parent_type_name())
                        .is_some_and(|parent_t| !parent_t.security().is_empty())
            })
            .collect()
    }

    /// Every `$variable` used in arguments beneath `id`.
    pub fn variable_usages(&self, id: PartId, follow_spreads: bool) -> Vec<VariableUsage> {
        let mut usages = vec![];
        self.walk(id, follow_spreads, &mut HashSet::new(), &mut |_, part| {
            if let Some(arg) = part.as_argument() {
                let has_default = arg.definition().is_some_and(|def| def.has_default());
                usages.extend(arg.value().variable_usages(has_default));
            }
        });
        usages
    }

    fn walk(
        &self,
        id: PartId,
        follow_spreads: bool,
        visited_fragments: &mut HashSet<PartId>,
        visitor: &mut dyn FnMut(PartId, &DocumentPart),
    ) {
        let part = self.part(id);
        visitor(id, part);

        if follow_spreads
            && let Some(fragment) = part.as_fragment_spread().and_then(|s| s.fragment())
            && visited_fragments.insert(fragment) {
            self.walk(fragment, follow_spreads, visited_fragments, visitor);
        }

        for child in &part.children {
            // Variable declarations are never part of a selection.
            if self.part(*child).kind() == PartKind::Variable {
                visitor(*child, self.part(*child));
                continue;
            }
            self.walk(*child, follow_spreads, visited_fragments, visitor);
        }
    }

    /// The flattened, ordered list of fields that execute for
    /// `selection_set`.
    ///
    /// Directly declared fields are emitted in order. Inline fragments and
    /// fragment spreads are expanded in place when their type condition can
    /// apply within the selection set's scope, with their fields narrowed to
    /// that type condition. Unbound fields never appear. The result is
    /// computed once and cached until the document is next restructured.
    ///
    /// # Panics
    ///
    /// If `selection_set` is not a selection set part.
    pub fn executable_fields(&self, selection_set: PartId) -> &[ExecutableField] {
        let Some(set) = self.part(selection_set).as_selection_set() else {
            panic!("{selection_set} is not a selection set");
        };
        set.executable_fields.get_or_init(|| {
            let mut fields = vec![];
            if let Some(scope_type) = set.scope_type() {
                self.flatten_into(selection_set, scope_type, &mut vec![], &mut fields);
            }
            fields
        })
    }

    fn flatten_into(
        &self,
        selection_set: PartId,
        scope_type: &str,
        visiting: &mut Vec<PartId>,
        fields: &mut Vec<ExecutableField>,
    ) {
        for child in self.children(selection_set) {
            match &self.part(*child).data {
                PartData::Field(field) => match &field.binding {
                    FieldBinding::Schema(_) => fields.push(ExecutableField {
                        field: *child,
                        target_type: scope_type.to_string(),
                    }),
                    FieldBinding::TypeName { concrete_type } =>
                        if self.schema.types_overlap(concrete_type, scope_type) {
                            fields.push(ExecutableField {
                                field: *child,
                                target_type: concrete_type.to_string(),
                            });
                        },
                    FieldBinding::Unbound => (),
                },

                PartData::InlineFragment(inline) => {
                    let type_condition = inline.type_condition().unwrap_or(scope_type);
                    if let Some(nested) = self.selection_set_of(*child)
                        && self.schema.types_overlap(type_condition, scope_type) {
                        let narrowed = self.narrow(scope_type, type_condition);
                        self.flatten_into(nested, narrowed, visiting, fields);
                    }
                },

                PartData::FragmentSpread(spread) => {
                    let Some(fragment) = spread.fragment() else { continue };
                    if visiting.contains(&fragment) {
                        continue;
                    }
                    let Some(named) = self.part(fragment).as_named_fragment() else { continue };
                    let type_condition = named.type_condition();
                    if let Some(nested) = self.selection_set_of(fragment)
                        && self.schema.types_overlap(type_condition, scope_type) {
                        let narrowed = self.narrow(scope_type, type_condition);
                        visiting.push(fragment);
                        self.flatten_into(nested, narrowed, visiting, fields);
                        visiting.pop();
                    }
                },

                _ => (),
            }
        }
    }

    fn narrow<'a>(&self, scope_type: &'a str, type_condition: &'a str) -> &'a str {
        if self.schema.is_possible_type(type_condition, scope_type) {
            scope_type
        } else {
            type_condition
        }
    }

    /// Create a new, detached part. It joins the document once passed to
    /// [`QueryDocument::attach_part`].
    pub fn add_part(&mut self, data: PartData, location: Option<SourceLocation>) -> PartId {
        let id = PartId(self.parts.len() as u32);
        self.parts.push(DocumentPart::new(data, location));
        id
    }

    /// Attach the detached part `child` beneath `parent`, at `index` among
    /// the parent's children (or last).
    ///
    /// # Panics
    ///
    /// If `child` is the document root or already has a parent.
    pub fn attach_part(&mut self, parent: PartId, child: PartId, index: Option<usize>) {
        if child == PartId::ROOT {
            panic!("the document root cannot be attached beneath another part");
        }
        if let Some(existing) = self.part(child).parent {
            panic!("{child} is already attached beneath {existing}");
        }
        self.part_mut(child).parent = Some(parent);
        let siblings = &mut self.part_mut(parent).children;
        let index = index.unwrap_or(siblings.len()).min(siblings.len());
        siblings.insert(index, child);
        self.invalidate_executable_fields();
    }

    /// Detach `id` (and with it, its whole subtree) from its parent.
    ///
    /// # Panics
    ///
    /// If `id` is the document root or is already detached.
    pub fn remove_part(&mut self, id: PartId) {
        let Some(parent) = self.part(id).parent else {
            panic!("{id} is not attached to a parent");
        };
        self.part_mut(parent).children.retain(|child| *child != id);
        self.part_mut(id).parent = None;
        self.invalidate_executable_fields();
    }

    fn invalidate_executable_fields(&mut self) {
        for part in self.parts.iter_mut() {
            if let PartData::SelectionSet(set) = &mut part.data {
                set.executable_fields = OnceLock::new();
            }
        }
    }
}
impl fmt::Debug for QueryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryDocument")
            .field("bind_errors", &self.bind_errors)
            .field("parts", &self.parts.len())
            .field("schema", &self.schema.identity())
            .finish()
    }
}
