use crate::document::OperationKind;
use crate::types::DirectiveDefinition;
use crate::types::FieldDefinition;
use crate::types::GraphType;

/// Read-only view of a schema that the binder, validator, and executor query
/// (possibly concurrently) while working on a document.
pub trait SchemaLookup: std::fmt::Debug + Send + Sync {
    /// A stable identifier for this schema. It participates in query plan
    /// cache keys so plans bound against different schemas never collide.
    fn identity(&self) -> &str;

    fn find_directive(&self, name: &str) -> Option<&DirectiveDefinition>;

    fn find_graph_type(&self, name: &str) -> Option<&GraphType>;

    /// The name of the root type operations of `kind` execute against, if the
    /// schema defines one.
    fn root_type_name(&self, kind: OperationKind) -> Option<&str>;

    fn root_type(&self, kind: OperationKind) -> Option<&GraphType> {
        self.root_type_name(kind)
            .and_then(|type_name| self.find_graph_type(type_name))
    }

    fn find_field(&self, type_name: &str, field_name: &str) -> Option<&FieldDefinition> {
        self.find_graph_type(type_name)
            .and_then(|graph_type| graph_type.find_field(field_name))
    }

    /// The concrete object types a value of `type_name` may resolve to.
    ///
    /// For an object type this is the type itself; for an interface, every
    /// implementing object; for a union, every member. Anything else has no
    /// possible types.
    fn possible_types(&self, type_name: &str) -> Vec<&str> {
        match self.find_graph_type(type_name) {
            Some(GraphType::Object(obj_t)) => vec![obj_t.name.as_str()],
            Some(GraphType::Interface(iface_t)) =>
                iface_t.implementations.iter().map(String::as_str).collect(),
            Some(GraphType::Union(union_t)) =>
                union_t.members.iter().map(String::as_str).collect(),
            _ => vec![],
        }
    }

    /// Whether a value whose concrete type is `concrete_type_name` satisfies
    /// `type_name` (i.e. is the type itself or one of its possible types).
    fn is_possible_type(&self, type_name: &str, concrete_type_name: &str) -> bool {
        type_name == concrete_type_name
            || self.possible_types(type_name).contains(&concrete_type_name)
    }

    /// Whether some concrete object type satisfies both `type_a` and `type_b`.
    /// Used to decide whether a type condition can ever apply within a scope.
    fn types_overlap(&self, type_a: &str, type_b: &str) -> bool {
        if type_a == type_b {
            return true;
        }
        let possible_b = self.possible_types(type_b);
        self.possible_types(type_a)
            .iter()
            .any(|concrete| possible_b.contains(concrete))
    }
}
