use crate::ast;
use crate::document::PartId;
use crate::document::QueryDocument;
use crate::document::ValueKind;
use crate::execution::ResolvedVariables;
use crate::types::InputValueDefinition;
use indexmap::IndexMap;

/// The argument values written on a field or directive part, with variables
/// substituted. Arguments fed by a variable that has no value are left out,
/// and omitted arguments take their schema default (if any).
pub(crate) fn resolve_arguments(
    document: &QueryDocument,
    part_id: PartId,
    definitions: Option<&IndexMap<String, InputValueDefinition>>,
    variables: &ResolvedVariables,
) -> IndexMap<String, serde_json::Value> {
    let mut arguments = IndexMap::new();
    for arg_id in document.arguments_of(part_id) {
        let Some(arg) = document.part(arg_id).as_argument() else { continue };
        if let ValueKind::VariableUsage { name, .. } = arg.value().kind()
            && !variables.contains(name) {
            continue;
        }
        arguments.insert(arg.name().to_string(), arg.value().to_json(variables.values()));
    }

    for (name, arg_def) in definitions.into_iter().flatten() {
        if !arguments.contains_key(name)
            && let Some(default_value) = arg_def.default_value() {
            arguments.insert(name.to_string(), ast_value_to_json(default_value, variables));
        }
    }
    arguments
}

pub(crate) fn ast_value_to_json(
    value: &ast::operation::Value,
    variables: &ResolvedVariables,
) -> serde_json::Value {
    use ast::operation::Value;
    match value {
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Enum(name) => serde_json::Value::String(name.to_string()),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Int(num) => num.as_i64()
            .map(serde_json::Value::from)
            .unwrap_or(serde_json::Value::Null),
        Value::List(items) => serde_json::Value::Array(
            items.iter().map(|item| ast_value_to_json(item, variables)).collect(),
        ),
        Value::Null => serde_json::Value::Null,
        Value::Object(fields) => serde_json::Value::Object(
            fields.iter()
                .map(|(name, field_value)| (name.to_string(), ast_value_to_json(field_value, variables)))
                .collect(),
        ),
        Value::String(s) => serde_json::Value::String(s.to_string()),
        Value::Variable(name) => variables.get(name)
            .cloned()
            .unwrap_or(serde_json::Value::Null),
    }
}
