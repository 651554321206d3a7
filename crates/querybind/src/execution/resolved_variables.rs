use crate::document::PartId;
use crate::document::QueryDocument;
use crate::execution::VariableResolutionError;
use crate::schema::SchemaLookup;
use crate::types::GraphType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, Vec<VariableResolutionError>>;

/// The variable values one execution of an operation runs with.
///
/// Holds a value for every declared variable that was either supplied at
/// runtime or has a default. A nullable variable that was neither is absent
/// (not `null`), so arguments it feeds count as omitted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedVariables {
    values: IndexMap<String, serde_json::Value>,
}
impl ResolvedVariables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the variables `operation` declares against runtime-supplied
    /// `supplied` values. Supplied values win over defaults; values for
    /// undeclared variables are ignored.
    pub fn resolve(
        document: &QueryDocument,
        operation: PartId,
        supplied: &IndexMap<String, serde_json::Value>,
    ) -> Result<Self> {
        let schema = document.schema().as_ref();
        let mut errors = vec![];
        let mut values = IndexMap::new();
        for var_id in document.variables_of(operation) {
            let Some(var) = document.part(var_id).as_variable() else { continue };
            let location = document.part(var_id).location().copied();
            let type_annotation = var.type_annotation();

            match supplied.get(var.name()) {
                Some(serde_json::Value::Null) if !type_annotation.nullable() =>
                    errors.push(VariableResolutionError::MissingValue {
                        variable_name: var.name().to_string(),
                        type_annotation: type_annotation.clone(),
                        location,
                    }),

                Some(value) =>
                    if value_matches(schema, type_annotation, value) {
                        values.insert(var.name().to_string(), value.clone());
                    } else {
                        errors.push(VariableResolutionError::InvalidValue {
                            variable_name: var.name().to_string(),
                            type_annotation: type_annotation.clone(),
                            value: value.to_string(),
                            location,
                        });
                    },

                None => match var.default_value() {
                    Some(default) => {
                        values.insert(var.name().to_string(), default.to_json(&IndexMap::new()));
                    },
                    None if !type_annotation.nullable() =>
                        errors.push(VariableResolutionError::MissingValue {
                            variable_name: var.name().to_string(),
                            type_annotation: type_annotation.clone(),
                            location,
                        }),
                    None => (),
                },
            }
        }

        if errors.is_empty() {
            Ok(Self { values })
        } else {
            Err(errors)
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.values.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: serde_json::Value) {
        self.values.insert(name.into(), value);
    }

    pub fn values(&self) -> &IndexMap<String, serde_json::Value> {
        &self.values
    }
}

/// Whether `value` can be coerced to `type_annotation`. A single value is
/// accepted where a list is expected.
fn value_matches(
    schema: &dyn SchemaLookup,
    type_annotation: &TypeAnnotation,
    value: &serde_json::Value,
) -> bool {
    if value.is_null() {
        return type_annotation.nullable();
    }

    if let Some(item_type) = type_annotation.list_item() {
        return match value {
            serde_json::Value::Array(items) =>
                items.iter().all(|item| value_matches(schema, item_type, item)),
            single => value_matches(schema, item_type, single),
        };
    }

    match schema.find_graph_type(type_annotation.innermost_name()) {
        Some(GraphType::Scalar(scalar_t)) => match scalar_t.name.as_str() {
            "Boolean" => value.is_boolean(),
            "Float" => value.is_number(),
            "ID" => value.is_string() || value.is_i64() || value.is_u64(),
            "Int" => value.as_i64().is_some_and(|int| i32::try_from(int).is_ok()),
            "String" => value.is_string(),
            _ => true,
        },

        Some(GraphType::Enum(enum_t)) =>
            value.as_str().is_some_and(|enum_value| enum_t.has_value(enum_value)),

        Some(GraphType::InputObject(input_t)) => {
            let Some(fields) = value.as_object() else { return false };
            fields.keys().all(|name| input_t.fields.contains_key(name))
                && input_t.fields.values().all(|field_def| match fields.get(field_def.name()) {
                    Some(field_value) =>
                        value_matches(schema, field_def.type_annotation(), field_value),
                    None => field_def.type_annotation().nullable() || field_def.has_default(),
                })
        },

        _ => false,
    }
}
