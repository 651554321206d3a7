use crate::ast;
use crate::binding::BindError;
use crate::document::ArgumentPart;
use crate::document::DirectivePart;
use crate::document::FieldBinding;
use crate::document::FieldPart;
use crate::document::FragmentSpreadPart;
use crate::document::InlineFragmentPart;
use crate::document::NamedFragmentPart;
use crate::document::OperationKind;
use crate::document::OperationPart;
use crate::document::PartData;
use crate::document::PartId;
use crate::document::QueryDocument;
use crate::document::ScalarValue;
use crate::document::SelectionSetPart;
use crate::document::SuppliedValue;
use crate::document::TYPENAME_FIELD_NAME;
use crate::document::ValueKind;
use crate::document::VariablePart;
use crate::loc::SourceLocation;
use crate::schema::SchemaLookup;
use crate::types::DirectiveLocation;
use crate::types::GraphType;
use crate::types::InputValueDefinition;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

/// Binds a parsed executable document against a schema, producing a
/// [`QueryDocument`].
///
/// Binding happens in two passes. [`DocumentBuilder::from_ast`] walks the
/// syntax tree once, depth-first, resolving every name against the schema.
/// [`DocumentBuilder::build`] then resolves fragment spreads against the
/// document's named fragments (which may be declared after their first use)
/// and computes fragment and variable reference tracking.
///
/// Problems with the document itself never fail the build; they are recorded
/// as [`BindError`]s on the resulting document.
///
/// ```
/// use querybind::binding::DocumentBuilder;
/// use querybind::schema::SchemaBuilder;
/// use std::sync::Arc;
///
/// let schema = SchemaBuilder::new()
///     .load_str(None, "type Query { hello: String }")
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let document = DocumentBuilder::from_str(Arc::new(schema), "{ hello }")
///     .unwrap()
///     .build();
/// assert!(document.bind_errors().is_empty());
/// ```
#[derive(Debug)]
pub struct DocumentBuilder {
    current_operation: Option<PartId>,
    document: QueryDocument,
    schema: Arc<dyn SchemaLookup>,
}
impl DocumentBuilder {
    pub fn from_ast(
        schema: Arc<dyn SchemaLookup>,
        ast_doc: &ast::operation::Document,
    ) -> Self {
        let mut builder = Self {
            current_operation: None,
            document: QueryDocument::new(schema.clone()),
            schema,
        };

        for def in &ast_doc.definitions {
            match def {
                ast::operation::Definition::Fragment(frag_def) =>
                    builder.visit_fragment_definition(frag_def),
                ast::operation::Definition::Operation(op_def) =>
                    builder.visit_operation(op_def),
            }
        }

        builder
    }

    /// Parse `content` and run the first binding pass over it. Only a syntax
    /// error fails here.
    pub fn from_str(
        schema: Arc<dyn SchemaLookup>,
        content: impl AsRef<str>,
    ) -> Result<Self, BindError> {
        let ast_doc = ast::operation::parse(content.as_ref())
            .map_err(|err| BindError::SyntaxError {
                message: err.to_string(),
            })?;
        Ok(Self::from_ast(schema, &ast_doc))
    }

    pub fn build(mut self) -> QueryDocument {
        self.resolve_fragment_spreads();
        self.mark_referenced_fragments();
        self.mark_referenced_variables();

        tracing::trace!(
            parts = self.document.parts.len(),
            bind_errors = self.document.bind_errors.len(),
            "bound query document",
        );
        self.document
    }

    fn resolve_fragment_spreads(&mut self) {
        let mut fragments_by_name = HashMap::new();
        for frag_id in self.document.named_fragments() {
            if let Some(frag) = self.document.part(frag_id).as_named_fragment() {
                fragments_by_name.entry(frag.name().to_string()).or_insert(frag_id);
            }
        }

        let spread_ids: Vec<PartId> = (0..self.document.parts.len())
            .map(|idx| PartId(idx as u32))
            .filter(|id| self.document.part(*id).as_fragment_spread().is_some())
            .collect();

        for spread_id in spread_ids {
            let resolved = match &mut self.document.part_mut(spread_id).data {
                PartData::FragmentSpread(spread) => {
                    spread.fragment = fragments_by_name.get(spread.fragment_name()).copied();
                    spread.fragment
                },
                _ => None,
            };
            if let Some(frag_id) = resolved
                && let PartData::NamedFragment(frag) = &mut self.document.part_mut(frag_id).data {
                frag.reference_count += 1;
            }
        }
    }

    fn mark_referenced_fragments(&mut self) {
        for op_id in self.document.operations() {
            for frag_id in self.document.reachable_fragments(op_id) {
                if let PartData::NamedFragment(frag) = &mut self.document.part_mut(frag_id).data {
                    frag.is_referenced = true;
                }
            }
        }
    }

    /// Usages written inside named fragments can only be matched to a
    /// declaration once it is known which operations reach the fragment.
    fn mark_referenced_variables(&mut self) {
        for op_id in self.document.operations() {
            for usage in self.document.variable_usages(op_id, /* follow_spreads = */ true) {
                if let Some(var_id) = self.document.find_variable(op_id, usage.name.as_str())
                    && let PartData::Variable(var) = &mut self.document.part_mut(var_id).data {
                    var.is_referenced = true;
                }
            }
        }
    }

    fn push_part(
        &mut self,
        parent: PartId,
        data: PartData,
        location: Option<SourceLocation>,
    ) -> PartId {
        let id = self.document.add_part(data, location);
        self.document.part_mut(id).parent = Some(parent);
        self.document.part_mut(parent).children.push(id);
        id
    }

    fn record(&mut self, err: BindError) {
        self.document.bind_errors.push(err);
    }

    fn check_type_condition(
        &mut self,
        type_name: &str,
        location: SourceLocation,
    ) -> Option<String> {
        match self.schema.find_graph_type(type_name) {
            Some(graph_type) if graph_type.is_composite() => Some(type_name.to_string()),
            Some(_) => {
                self.record(BindError::NonCompositeTypeCondition {
                    type_name: type_name.to_string(),
                    location,
                });
                None
            },
            None => {
                self.record(BindError::UndefinedTypeCondition {
                    type_name: type_name.to_string(),
                    location,
                });
                None
            },
        }
    }

    fn visit_operation(&mut self, op_def: &ast::operation::OperationDefinition) {
        use ast::operation::OperationDefinition;
        let (kind, name, position, var_defs, directives, selection_set) = match op_def {
            OperationDefinition::Mutation(mutation) => (
                OperationKind::Mutation,
                mutation.name.clone(),
                mutation.position,
                mutation.variable_definitions.as_slice(),
                mutation.directives.as_slice(),
                &mutation.selection_set,
            ),
            OperationDefinition::Query(query) => (
                OperationKind::Query,
                query.name.clone(),
                query.position,
                query.variable_definitions.as_slice(),
                query.directives.as_slice(),
                &query.selection_set,
            ),
            OperationDefinition::SelectionSet(selection_set) => (
                OperationKind::Query,
                None,
                selection_set.span.0,
                &[][..],
                &[][..],
                selection_set,
            ),
            OperationDefinition::Subscription(subscription) => (
                OperationKind::Subscription,
                subscription.name.clone(),
                subscription.position,
                subscription.variable_definitions.as_slice(),
                subscription.directives.as_slice(),
                &subscription.selection_set,
            ),
        };
        let location = SourceLocation::from_ast_position(&position);

        let root_type = self.schema.root_type_name(kind).map(str::to_string);
        if root_type.is_none() {
            self.record(BindError::UndefinedRootOperationType {
                operation: kind,
                location,
            });
        }

        let op_id = self.push_part(PartId::ROOT, PartData::Operation(OperationPart {
            kind,
            name,
            root_type: root_type.clone(),
        }), Some(location));
        self.current_operation = Some(op_id);

        let mut seen_vars = HashSet::new();
        for var_def in var_defs {
            self.visit_variable_definition(op_id, var_def, &mut seen_vars);
        }
        self.visit_directives(op_id, directives, kind.directive_location());
        self.visit_selection_set(op_id, selection_set, root_type);

        self.current_operation = None;
    }

    fn visit_variable_definition(
        &mut self,
        op_id: PartId,
        var_def: &ast::operation::VariableDefinition,
        seen_vars: &mut HashSet<String>,
    ) {
        let location = SourceLocation::from_ast_position(&var_def.position);
        if !seen_vars.insert(var_def.name.to_string()) {
            self.record(BindError::DuplicateVariable {
                variable_name: var_def.name.to_string(),
                location,
            });
        }

        let type_annotation = TypeAnnotation::from_ast_type(&var_def.var_type);
        let type_name = type_annotation.innermost_name();
        match self.schema.find_graph_type(type_name) {
            Some(graph_type) if graph_type.is_input() => (),
            Some(_) => self.record(BindError::NonInputVariableType {
                variable_name: var_def.name.to_string(),
                type_name: type_name.to_string(),
                location,
            }),
            None => self.record(BindError::UndefinedVariableType {
                variable_name: var_def.name.to_string(),
                type_name: type_name.to_string(),
                location,
            }),
        }

        let default_value = var_def.default_value.as_ref().map(|value| {
            self.bind_value(value, Some(type_annotation.clone()), location)
        });
        self.push_part(op_id, PartData::Variable(VariablePart {
            default_value,
            is_referenced: false,
            name: var_def.name.to_string(),
            type_annotation,
        }), Some(location));
    }

    fn visit_fragment_definition(&mut self, frag_def: &ast::operation::FragmentDefinition) {
        let location = SourceLocation::from_ast_position(&frag_def.position);
        let ast::operation::TypeCondition::On(type_name) = &frag_def.type_condition;
        let scope_type = self.check_type_condition(type_name, location);

        let frag_id = self.push_part(PartId::ROOT, PartData::NamedFragment(NamedFragmentPart {
            is_referenced: false,
            name: frag_def.name.to_string(),
            reference_count: 0,
            type_condition: type_name.to_string(),
        }), Some(location));

        self.visit_directives(frag_id, &frag_def.directives, DirectiveLocation::FragmentDefinition);
        self.visit_selection_set(frag_id, &frag_def.selection_set, scope_type);
    }

    fn visit_selection_set(
        &mut self,
        parent: PartId,
        selection_set: &ast::operation::SelectionSet,
        scope_type: Option<String>,
    ) {
        let set_id = self.push_part(
            parent,
            PartData::SelectionSet(SelectionSetPart::new(scope_type.clone())),
            Some(SourceLocation::from_ast_position(&selection_set.span.0)),
        );

        for selection in &selection_set.items {
            match selection {
                ast::operation::Selection::Field(field) =>
                    self.visit_field(set_id, field, scope_type.as_deref()),
                ast::operation::Selection::FragmentSpread(spread) =>
                    self.visit_fragment_spread(set_id, spread),
                ast::operation::Selection::InlineFragment(inline) =>
                    self.visit_inline_fragment(set_id, inline, scope_type.as_deref()),
            }
        }
    }

    fn visit_field(
        &mut self,
        set_id: PartId,
        field: &ast::operation::Field,
        scope_type: Option<&str>,
    ) {
        let location = SourceLocation::from_ast_position(&field.position);

        if field.name == TYPENAME_FIELD_NAME {
            self.visit_typename_field(set_id, field, scope_type, location);
            return;
        }

        let field_def = scope_type.and_then(|scope| {
            self.schema.find_field(scope, field.name.as_str()).cloned()
        });
        if let Some(scope) = scope_type && field_def.is_none() {
            self.record(BindError::UndefinedField {
                type_name: scope.to_string(),
                field_name: field.name.to_string(),
                location,
            });
        }

        let field_id = self.push_part(set_id, PartData::Field(FieldPart {
            alias: field.alias.clone(),
            binding: match &field_def {
                Some(field_def) => FieldBinding::Schema(field_def.clone()),
                None => FieldBinding::Unbound,
            },
            name: field.name.to_string(),
        }), Some(location));

        self.visit_arguments(
            field_id,
            &field.arguments,
            field_def.as_ref().map(|def| def.arguments()),
            field.name.as_str(),
            location,
        );
        self.visit_directives(field_id, &field.directives, DirectiveLocation::Field);

        let has_selections = !field.selection_set.items.is_empty();
        let Some(field_def) = field_def else {
            if has_selections {
                self.visit_selection_set(field_id, &field.selection_set, None);
            }
            return;
        };

        let type_name = field_def.type_annotation().innermost_name();
        let is_composite = self.schema.find_graph_type(type_name)
            .is_some_and(GraphType::is_composite);
        match (has_selections, is_composite) {
            (true, true) => self.visit_selection_set(
                field_id,
                &field.selection_set,
                Some(type_name.to_string()),
            ),
            (true, false) => {
                self.record(BindError::LeafFieldSelectionSet {
                    field_name: field.name.to_string(),
                    type_name: type_name.to_string(),
                    location,
                });
                self.visit_selection_set(field_id, &field.selection_set, None);
            },
            (false, true) => self.record(BindError::MissingSelectionSet {
                field_name: field.name.to_string(),
                type_name: type_name.to_string(),
                location,
            }),
            (false, false) => (),
        }
    }

    /// `__typename` has no schema counterpart. Within an abstract scope it
    /// expands to one synthetic field per concrete type the scope can resolve
    /// to, so whichever branch resolves at execution time finds its own.
    fn visit_typename_field(
        &mut self,
        set_id: PartId,
        field: &ast::operation::Field,
        scope_type: Option<&str>,
        location: SourceLocation,
    ) {
        let concrete_types: Vec<String> = match scope_type {
            Some(scope) if self.schema.find_graph_type(scope).is_some_and(GraphType::is_abstract) =>
                self.schema.possible_types(scope).into_iter().map(str::to_string).collect(),
            Some(scope) => vec![scope.to_string()],
            None => vec![],
        };

        if !field.selection_set.items.is_empty() {
            self.record(BindError::LeafFieldSelectionSet {
                field_name: field.name.to_string(),
                type_name: "String".to_string(),
                location,
            });
        }

        let bindings = if concrete_types.is_empty() {
            vec![FieldBinding::Unbound]
        } else {
            concrete_types.into_iter()
                .map(|concrete_type| FieldBinding::TypeName { concrete_type })
                .collect()
        };
        for binding in bindings {
            let field_id = self.push_part(set_id, PartData::Field(FieldPart {
                alias: field.alias.clone(),
                binding,
                name: field.name.to_string(),
            }), Some(location));
            self.visit_arguments(field_id, &field.arguments, Some(&IndexMap::new()), TYPENAME_FIELD_NAME, location);
            self.visit_directives(field_id, &field.directives, DirectiveLocation::Field);
        }
    }

    fn visit_inline_fragment(
        &mut self,
        set_id: PartId,
        inline: &ast::operation::InlineFragment,
        scope_type: Option<&str>,
    ) {
        let location = SourceLocation::from_ast_position(&inline.position);
        let type_condition = inline.type_condition.as_ref()
            .map(|ast::operation::TypeCondition::On(type_name)| type_name.to_string());
        let nested_scope = match &type_condition {
            Some(type_name) => self.check_type_condition(type_name, location),
            None => scope_type.map(str::to_string),
        };

        let inline_id = self.push_part(set_id, PartData::InlineFragment(InlineFragmentPart {
            type_condition,
        }), Some(location));
        self.visit_directives(inline_id, &inline.directives, DirectiveLocation::InlineFragment);
        self.visit_selection_set(inline_id, &inline.selection_set, nested_scope);
    }

    fn visit_fragment_spread(
        &mut self,
        set_id: PartId,
        spread: &ast::operation::FragmentSpread,
    ) {
        let location = SourceLocation::from_ast_position(&spread.position);
        let spread_id = self.push_part(set_id, PartData::FragmentSpread(FragmentSpreadPart {
            fragment: None,
            fragment_name: spread.fragment_name.to_string(),
        }), Some(location));
        self.visit_directives(spread_id, &spread.directives, DirectiveLocation::FragmentSpread);
    }

    fn visit_directives(
        &mut self,
        parent: PartId,
        directives: &[ast::operation::Directive],
        location: DirectiveLocation,
    ) {
        for directive in directives {
            let directive_location = SourceLocation::from_ast_position(&directive.position);
            let definition = self.schema.find_directive(directive.name.as_str()).cloned();
            let directive_id = self.push_part(parent, PartData::Directive(DirectivePart {
                definition: definition.clone(),
                location: location.clone(),
                name: directive.name.to_string(),
            }), Some(directive_location));

            self.visit_arguments(
                directive_id,
                &directive.arguments,
                definition.as_ref().map(|def| def.arguments()),
                format!("@{}", directive.name).as_str(),
                directive_location,
            );
        }
    }

    /// `arg_defs` is `None` when the owner itself could not be bound, in
    /// which case its arguments are kept but not checked.
    fn visit_arguments(
        &mut self,
        parent: PartId,
        arguments: &[(String, ast::operation::Value)],
        arg_defs: Option<&IndexMap<String, InputValueDefinition>>,
        target_name: &str,
        location: SourceLocation,
    ) {
        let mut seen = HashSet::new();
        for (arg_name, ast_value) in arguments {
            if !seen.insert(arg_name.as_str()) {
                self.record(BindError::DuplicateArgument {
                    argument_name: arg_name.to_string(),
                    location,
                });
            }

            let definition = arg_defs.and_then(|defs| defs.get(arg_name.as_str())).cloned();
            if arg_defs.is_some() && definition.is_none() {
                self.record(BindError::UnknownArgument {
                    argument_name: arg_name.to_string(),
                    target_name: target_name.to_string(),
                    location,
                });
            }

            let bound_type = definition.as_ref().map(|def| def.type_annotation().clone());
            let value = self.bind_value(ast_value, bound_type, location);
            self.push_part(parent, PartData::Argument(ArgumentPart {
                definition,
                name: arg_name.to_string(),
                value,
            }), Some(location));
        }

        let Some(arg_defs) = arg_defs else { return };
        for (arg_name, arg_def) in arg_defs {
            if !arg_def.type_annotation().nullable()
                && !arg_def.has_default()
                && !seen.contains(arg_name.as_str()) {
                self.record(BindError::MissingRequiredArgument {
                    argument_name: arg_name.to_string(),
                    target_name: target_name.to_string(),
                    location,
                });
            }
        }
    }

    /// Values carry the input type they are bound against. The type flows
    /// downward from the owning argument or variable: list items take the
    /// list's item type and input object fields take their field's type.
    fn bind_value(
        &mut self,
        ast_value: &ast::operation::Value,
        bound_type: Option<TypeAnnotation>,
        location: SourceLocation,
    ) -> SuppliedValue {
        use ast::operation::Value;
        let kind = match ast_value {
            Value::Boolean(b) => ValueKind::Scalar(ScalarValue::Boolean(*b)),
            Value::Enum(name) => ValueKind::Enum(name.to_string()),
            Value::Float(f) => ValueKind::Scalar(ScalarValue::Float(*f)),
            Value::Int(n) => ValueKind::Scalar(ScalarValue::Int(n.as_i64().unwrap_or_default())),
            Value::List(items) => {
                let item_type = bound_type.as_ref()
                    .map(|list_type| list_type.list_item().unwrap_or(list_type).clone());
                ValueKind::List(
                    items.iter()
                        .map(|item| self.bind_value(item, item_type.clone(), location))
                        .collect(),
                )
            },
            Value::Null => ValueKind::Null,
            Value::Object(fields) => {
                let input_fields = bound_type.as_ref()
                    .and_then(|input_type| self.schema.find_graph_type(input_type.innermost_name()))
                    .and_then(GraphType::as_input_object)
                    .map(|input_t| input_t.fields.clone());
                ValueKind::Complex(
                    fields.iter()
                        .map(|(name, value)| {
                            let field_type = input_fields.as_ref()
                                .and_then(|fields| fields.get(name.as_str()))
                                .map(|field_def| field_def.type_annotation().clone());
                            (name.to_string(), self.bind_value(value, field_type, location))
                        })
                        .collect(),
                )
            },
            Value::String(s) => ValueKind::Scalar(ScalarValue::String(s.to_string())),
            Value::Variable(name) => ValueKind::VariableUsage {
                name: name.to_string(),
                variable: self.bind_variable_usage(name.as_str()),
            },
        };

        SuppliedValue {
            bound_type,
            kind,
            location: Some(location),
        }
    }

    fn bind_variable_usage(&mut self, name: &str) -> Option<PartId> {
        let op_id = self.current_operation?;
        let var_id = self.document.find_variable(op_id, name)?;
        if let PartData::Variable(var) = &mut self.document.part_mut(var_id).data {
            var.is_referenced = true;
        }
        Some(var_id)
    }
}
