use crate::document::PartId;
use crate::document::VariableUsage;
use crate::loc::SourceLocation;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// A literal scalar appearing in a document.
#[derive(Clone, Debug, PartialEq)]
pub enum ScalarValue {
    Boolean(bool),
    Float(f64),
    Int(i64),
    String(String),
}
impl ScalarValue {
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Boolean(b) => serde_json::Value::Bool(*b),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Self::Int(i) => serde_json::Value::from(*i),
            Self::String(s) => serde_json::Value::String(s.to_string()),
        }
    }
}

#[derive(Clone, Debug)]
pub enum ValueKind {
    Complex(IndexMap<String, SuppliedValue>),
    Enum(String),
    List(Vec<SuppliedValue>),
    Null,
    Scalar(ScalarValue),
    VariableUsage {
        name: String,
        /// The declaring [`VariablePart`](crate::document::VariablePart).
        /// Only set for usages written directly within an operation; usages
        /// inside a named fragment are resolved by name per operation.
        variable: Option<PartId>,
    },
}

/// A value attached to an argument, a variable default, or nested inside
/// another list or complex value.
///
/// Equality is structural and kind-aware: source locations and bound types
/// are ignored, scalars compare by literal, lists element-wise, and complex
/// values by their field sets (independent of field order).
#[derive(Clone, Debug)]
pub struct SuppliedValue {
    pub(crate) bound_type: Option<TypeAnnotation>,
    pub(crate) kind: ValueKind,
    pub(crate) location: Option<SourceLocation>,
}
impl SuppliedValue {
    pub fn new(kind: ValueKind) -> Self {
        Self {
            bound_type: None,
            kind,
            location: None,
        }
    }

    /// The input type this value was bound against, propagated down from the
    /// owning argument, variable, list, or input object.
    pub fn bound_type(&self) -> Option<&TypeAnnotation> {
        self.bound_type.as_ref()
    }

    pub fn kind(&self) -> &ValueKind {
        &self.kind
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn is_null(&self) -> bool {
        matches!(self.kind, ValueKind::Null)
    }

    /// Convert to JSON, substituting variable usages with values looked up
    /// in `variables`. An unknown variable becomes `null`.
    pub fn to_json(
        &self,
        variables: &IndexMap<String, serde_json::Value>,
    ) -> serde_json::Value {
        match &self.kind {
            ValueKind::Complex(fields) => serde_json::Value::Object(
                fields.iter()
                    .map(|(name, value)| (name.to_string(), value.to_json(variables)))
                    .collect(),
            ),
            ValueKind::Enum(name) => serde_json::Value::String(name.to_string()),
            ValueKind::List(items) => serde_json::Value::Array(
                items.iter().map(|item| item.to_json(variables)).collect(),
            ),
            ValueKind::Null => serde_json::Value::Null,
            ValueKind::Scalar(scalar) => scalar.to_json(),
            ValueKind::VariableUsage { name, .. } =>
                variables.get(name).cloned().unwrap_or(serde_json::Value::Null),
        }
    }

    /// Every variable usage nested anywhere within this value.
    pub fn variable_usages(&self, location_has_default: bool) -> Vec<VariableUsage> {
        let mut usages = vec![];
        self.collect_variable_usages(location_has_default, &mut usages);
        usages
    }

    fn collect_variable_usages(
        &self,
        location_has_default: bool,
        usages: &mut Vec<VariableUsage>,
    ) {
        match &self.kind {
            ValueKind::Complex(fields) =>
                for value in fields.values() {
                    value.collect_variable_usages(false, usages);
                },
            ValueKind::List(items) =>
                for item in items {
                    item.collect_variable_usages(false, usages);
                },
            ValueKind::VariableUsage { name, .. } => usages.push(VariableUsage {
                location_type: self.bound_type.clone(),
                location_has_default,
                name: name.to_string(),
                source_location: self.location,
            }),
            ValueKind::Enum(_) | ValueKind::Null | ValueKind::Scalar(_) => (),
        }
    }
}
impl PartialEq for SuppliedValue {
    fn eq(&self, other: &Self) -> bool {
        match (&self.kind, &other.kind) {
            (ValueKind::Complex(a), ValueKind::Complex(b)) =>
                a.len() == b.len()
                    && a.iter().all(|(name, value)| b.get(name) == Some(value)),
            (ValueKind::Enum(a), ValueKind::Enum(b)) => a == b,
            (ValueKind::List(a), ValueKind::List(b)) => a == b,
            (ValueKind::Null, ValueKind::Null) => true,
            (ValueKind::Scalar(a), ValueKind::Scalar(b)) => a == b,
            (
                ValueKind::VariableUsage { name: a, .. },
                ValueKind::VariableUsage { name: b, .. },
            ) => a == b,
            _ => false,
        }
    }
}
