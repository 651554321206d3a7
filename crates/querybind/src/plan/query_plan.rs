use crate::document::OperationPart;
use crate::document::PartId;
use crate::document::QueryDocument;
use crate::error_codes;
use crate::messages::GraphMessage;
use crate::plan::PlanError;
use crate::plan::PlanLimits;
use std::sync::Arc;

/// A reusable, cacheable wrapper around one bound operation of a
/// [`QueryDocument`].
///
/// Cloning a plan is cheap; the document is shared until something (an
/// execution-phase directive) needs to restructure it, at which point the
/// clone gets its own copy (see [`QueryPlan::document_mut`]).
#[derive(Clone, Debug)]
pub struct QueryPlan {
    pub(crate) document: Arc<QueryDocument>,
    pub(crate) field_count: usize,
    pub(crate) max_depth: usize,
    pub(crate) messages: Vec<GraphMessage>,
    pub(crate) operation: PartId,
    pub(crate) schema_directives_applied: bool,
}
impl QueryPlan {
    /// Wrap `operation` of `document`. `messages` are the diagnostics
    /// produced while binding and validating the document; a critical one
    /// makes the plan invalid. Exceeding `limits` adds a critical
    /// `QUERY_TOO_COMPLEX` message.
    pub fn new(
        document: Arc<QueryDocument>,
        operation: PartId,
        mut messages: Vec<GraphMessage>,
        limits: &PlanLimits,
    ) -> Self {
        let (max_depth, field_count) = match document.selection_set_of(operation) {
            Some(root_set) => measure(&document, root_set, &mut vec![]),
            None => (0, 0),
        };

        if limits.max_depth > 0 && max_depth > limits.max_depth {
            messages.push(GraphMessage::critical(
                error_codes::QUERY_TOO_COMPLEX,
                format!(
                    "Query depth of {max_depth} exceeds the maximum allowed depth of {}",
                    limits.max_depth,
                ),
            ));
        }
        if limits.max_field_count > 0 && field_count > limits.max_field_count {
            messages.push(GraphMessage::critical(
                error_codes::QUERY_TOO_COMPLEX,
                format!(
                    "Query selects {field_count} fields which exceeds the maximum of {}",
                    limits.max_field_count,
                ),
            ));
        }

        Self {
            document,
            field_count,
            max_depth,
            messages,
            operation,
            schema_directives_applied: false,
        }
    }

    /// Pick the operation a request asked for. Without a name, the document
    /// must hold exactly one operation.
    pub fn select_operation(
        document: &QueryDocument,
        operation_name: Option<&str>,
    ) -> Result<PartId, PlanError> {
        match operation_name {
            Some(operation_name) => document.find_operation(operation_name)
                .ok_or_else(|| PlanError::UnknownOperation {
                    operation_name: operation_name.to_string(),
                }),
            None => match document.operations().as_slice() {
                [] => Err(PlanError::NoOperations),
                [operation] => Ok(*operation),
                _ => Err(PlanError::OperationNameRequired),
            },
        }
    }

    pub fn document(&self) -> &QueryDocument {
        &self.document
    }

    /// Mutable access for directives that restructure the document. The
    /// document is copied first if any other plan (such as the cached
    /// original) still shares it.
    pub fn document_mut(&mut self) -> &mut QueryDocument {
        Arc::make_mut(&mut self.document)
    }

    pub(crate) fn shared_document(&self) -> Arc<QueryDocument> {
        self.document.clone()
    }

    pub fn field_count(&self) -> usize {
        self.field_count
    }

    /// Whether the plan can be stored and reused: it must be valid, and its
    /// operation must carry no applied directives (anywhere, including in
    /// the fragments it spreads), since directives may restructure the
    /// document differently on each execution.
    pub fn is_cacheable(&self) -> bool {
        self.is_valid() && self.document.all_directives(self.operation).is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.operation_part().is_bound()
            && !self.messages.iter().any(GraphMessage::is_critical)
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn messages(&self) -> &[GraphMessage] {
        &self.messages
    }

    pub fn operation(&self) -> PartId {
        self.operation
    }

    pub fn operation_part(&self) -> &OperationPart {
        match self.document.part(self.operation).as_operation() {
            Some(op) => op,
            None => panic!("{} is not an operation", self.operation),
        }
    }

    pub fn root_selection_set(&self) -> Option<PartId> {
        self.document.selection_set_of(self.operation)
    }

    pub fn schema_directives_applied(&self) -> bool {
        self.schema_directives_applied
    }

    /// Fields of this plan's operation that require authorization.
    pub fn secure_fields(&self) -> Vec<PartId> {
        self.document.secure_fields(self.operation)
    }
}

/// (depth, field count) of everything beneath `selection_set`. A selection
/// set already on the current path (possible only in a document with
/// fragment cycles) is not descended into again.
fn measure(
    document: &QueryDocument,
    selection_set: PartId,
    path: &mut Vec<PartId>,
) -> (usize, usize) {
    if path.contains(&selection_set) {
        return (0, 0);
    }
    path.push(selection_set);

    let mut max_child_depth = 0;
    let mut field_count = 0;
    for exec_field in document.executable_fields(selection_set) {
        field_count += 1;
        if let Some(child_set) = document.selection_set_of(exec_field.field) {
            let (child_depth, child_count) = measure(document, child_set, path);
            max_child_depth = max_child_depth.max(child_depth);
            field_count += child_count;
        }
    }

    path.pop();
    (max_child_depth + 1, field_count)
}
