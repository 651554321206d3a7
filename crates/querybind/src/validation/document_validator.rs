use crate::document::PartData;
use crate::document::PartId;
use crate::document::PartKind;
use crate::document::QueryDocument;
use crate::validation::ValidationError;
use std::collections::HashMap;
use std::collections::HashSet;

/// Enforces document-wide rules that binding alone cannot: unique operation
/// and fragment naming, cycle-free fragment spreads, resolvable spreads,
/// variable usage against declarations, and directive placement.
///
/// Validation only reads the document, so it can be run again after
/// execution-time directives have restructured it.
#[derive(Debug)]
pub struct DocumentValidator<'doc> {
    document: &'doc QueryDocument,
}
impl<'doc> DocumentValidator<'doc> {
    pub fn new(document: &'doc QueryDocument) -> Self {
        Self { document }
    }

    /// Every problem found, critical or not, in document order per rule.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = vec![];
        self.validate_operation_names(&mut errors);
        self.validate_fragment_names(&mut errors);
        self.validate_fragment_spreads(&mut errors);
        errors.extend(self.validate_no_cycles());
        self.validate_variables(&mut errors);
        self.validate_directives(PartId::ROOT, &mut errors);

        tracing::trace!(
            critical = errors.iter().filter(|err| err.is_critical()).count(),
            total = errors.len(),
            "validated query document",
        );
        errors
    }

    fn validate_operation_names(&self, errors: &mut Vec<ValidationError>) {
        let mut seen_names = HashSet::new();
        let mut seen_anonymous = false;
        for op_id in self.document.operations() {
            let location = self.document.part(op_id).location().copied();
            let Some(op) = self.document.part(op_id).as_operation() else { continue };
            match op.name() {
                Some(name) =>
                    if !seen_names.insert(name) {
                        errors.push(ValidationError::DuplicateOperationName {
                            operation_name: name.to_string(),
                            location,
                        });
                    },
                None => {
                    if seen_anonymous {
                        errors.push(ValidationError::MultipleAnonymousOperations { location });
                    }
                    seen_anonymous = true;
                },
            }
        }
    }

    fn validate_fragment_names(&self, errors: &mut Vec<ValidationError>) {
        let mut seen_names = HashSet::new();
        for frag_id in self.document.named_fragments() {
            let location = self.document.part(frag_id).location().copied();
            let Some(frag) = self.document.part(frag_id).as_named_fragment() else { continue };
            if !seen_names.insert(frag.name()) {
                errors.push(ValidationError::DuplicateFragmentName {
                    fragment_name: frag.name().to_string(),
                    location,
                });
            } else if !frag.is_referenced() {
                errors.push(ValidationError::UnreferencedFragment {
                    fragment_name: frag.name().to_string(),
                    location,
                });
            }
        }
    }

    fn validate_fragment_spreads(&self, errors: &mut Vec<ValidationError>) {
        for definition in self.definitions() {
            for spread_id in self.spreads_within(definition) {
                let Some(spread) = self.document.part(spread_id).as_fragment_spread() else {
                    continue;
                };
                if spread.fragment().is_none() {
                    errors.push(ValidationError::UndefinedFragment {
                        fragment_name: spread.fragment_name().to_string(),
                        location: self.document.part(spread_id).location().copied(),
                    });
                }
            }
        }
    }

    /// Phase-shifted cycles (A -> B -> A and B -> A -> B) are reported once.
    fn validate_no_cycles(&self) -> Vec<ValidationError> {
        let mut cycles = vec![];
        let mut seen_normalized = HashSet::new();
        for frag_id in self.document.named_fragments() {
            self.check_fragment_cycles(
                frag_id,
                &mut vec![],
                &mut cycles,
                &mut seen_normalized,
            );
        }
        cycles
    }

    fn check_fragment_cycles(
        &self,
        frag_id: PartId,
        path: &mut Vec<PartId>,
        errors: &mut Vec<ValidationError>,
        seen_normalized: &mut HashSet<Vec<String>>,
    ) {
        if let Some(cycle_start) = path.iter().position(|visiting| *visiting == frag_id) {
            let mut cycle_path: Vec<String> = path[cycle_start..].iter()
                .map(|id| self.fragment_name(*id))
                .collect();
            cycle_path.push(self.fragment_name(frag_id));

            let normalized = normalize_cycle(&cycle_path);
            if seen_normalized.insert(normalized.clone()) {
                errors.push(ValidationError::FragmentCycle {
                    location: self.document.find_fragment(normalized[0].as_str())
                        .and_then(|id| self.document.part(id).location().copied()),
                    cycle_path: normalized_with_repeat(normalized),
                });
            }
            return;
        }

        path.push(frag_id);
        for spread_id in self.spreads_within(frag_id) {
            if let Some(target) = self.document.part(spread_id)
                .as_fragment_spread()
                .and_then(|spread| spread.fragment()) {
                self.check_fragment_cycles(target, path, errors, seen_normalized);
            }
        }
        path.pop();
    }

    fn validate_variables(&self, errors: &mut Vec<ValidationError>) {
        for op_id in self.document.operations() {
            let operation_name = self.document.part(op_id)
                .as_operation()
                .and_then(|op| op.name())
                .unwrap_or("<anonymous>")
                .to_string();

            let usages = self.document.variable_usages(op_id, /* follow_spreads = */ true);
            let mut used_names = HashSet::new();
            for usage in &usages {
                used_names.insert(usage.name.as_str());
                let Some(var_id) = self.document.find_variable(op_id, usage.name.as_str()) else {
                    errors.push(ValidationError::UndefinedVariable {
                        variable_name: usage.name.to_string(),
                        operation_name: operation_name.to_string(),
                        location: usage.source_location,
                    });
                    continue;
                };
                let Some(var) = self.document.part(var_id).as_variable() else { continue };
                let Some(location_type) = &usage.location_type else { continue };

                // A default on either side stands in for a missing value, so
                // a nullable variable may then fill a non-null position.
                let has_non_null_default = var.default_value().is_some_and(|value| !value.is_null());
                let effective_location_type =
                    if !location_type.nullable() && (has_non_null_default || usage.location_has_default) {
                        location_type.with_nullable(true)
                    } else {
                        location_type.clone()
                    };
                if !var.type_annotation().is_compatible_variable_for(&effective_location_type) {
                    errors.push(ValidationError::IncompatibleVariableUsage {
                        variable_name: usage.name.to_string(),
                        variable_type: var.type_annotation().clone(),
                        location_type: location_type.clone(),
                        location: usage.source_location,
                    });
                }
            }

            for var_id in self.document.variables_of(op_id) {
                let Some(var) = self.document.part(var_id).as_variable() else { continue };
                if !used_names.contains(var.name()) {
                    errors.push(ValidationError::UnusedVariable {
                        variable_name: var.name().to_string(),
                        operation_name: operation_name.to_string(),
                        location: self.document.part(var_id).location().copied(),
                    });
                }
            }
        }
    }

    fn validate_directives(&self, part_id: PartId, errors: &mut Vec<ValidationError>) {
        let mut applied: HashMap<&str, u32> = HashMap::new();
        for child in self.document.children(part_id) {
            let PartData::Directive(directive) = self.document.part(*child).data() else {
                self.validate_directives(*child, errors);
                continue;
            };
            let location = self.document.part(*child).location().copied();

            let Some(definition) = directive.definition() else {
                errors.push(ValidationError::UnknownDirective {
                    directive_name: directive.name().to_string(),
                    location,
                });
                continue;
            };

            if !definition.is_allowed_at(directive.location()) {
                errors.push(ValidationError::MisplacedDirective {
                    directive_name: directive.name().to_string(),
                    directive_location: directive.location().clone(),
                    location,
                });
            }

            let count = applied.entry(directive.name()).or_default();
            *count += 1;
            if *count == 2 && !definition.repeatable() {
                errors.push(ValidationError::DuplicateDirective {
                    directive_name: directive.name().to_string(),
                    location,
                });
            }
        }
    }

    fn definitions(&self) -> Vec<PartId> {
        self.document.children(PartId::ROOT).to_vec()
    }

    fn fragment_name(&self, frag_id: PartId) -> String {
        self.document.part(frag_id)
            .as_named_fragment()
            .map(|frag| frag.name().to_string())
            .unwrap_or_default()
    }

    /// Fragment spreads written within `id`'s subtree, not following them.
    fn spreads_within(&self, id: PartId) -> Vec<PartId> {
        let mut spreads = vec![];
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            if self.document.part(current).kind() == PartKind::FragmentSpread {
                spreads.push(current);
            }
            pending.extend(self.document.children(current).iter().rev());
        }
        spreads
    }
}

/// Rotate a cycle (given with its first element repeated at the end) so it
/// starts at its lexicographically smallest fragment name, without the
/// repeat.
fn normalize_cycle(cycle: &[String]) -> Vec<String> {
    if cycle.is_empty() {
        return vec![];
    }
    let cycle_without_repeat = &cycle[..cycle.len() - 1];
    let min_idx = cycle_without_repeat
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(idx, _)| idx)
        .unwrap_or(0);

    let mut normalized = Vec::with_capacity(cycle_without_repeat.len());
    normalized.extend_from_slice(&cycle_without_repeat[min_idx..]);
    normalized.extend_from_slice(&cycle_without_repeat[..min_idx]);
    normalized
}

fn normalized_with_repeat(mut normalized: Vec<String>) -> Vec<String> {
    if let Some(first) = normalized.first().cloned() {
        normalized.push(first);
    }
    normalized
}
