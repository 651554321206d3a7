use crate::ast;
use crate::document::OperationKind;
use crate::loc;
use crate::schema::Schema;
use crate::types::DirectiveDefinition;
use crate::types::DirectiveLocation;
use crate::types::EnumType;
use crate::types::FieldDefinition;
use crate::types::GraphType;
use crate::types::InputObjectType;
use crate::types::InputValueDefinition;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::SecurityRequirement;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use indexmap::IndexMap;
use sha2::Digest;
use sha2::Sha256;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const BUILTIN_SCALAR_NAMES: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];
const BUILTIN_DIRECTIVE_NAMES: [&str; 4] = ["authorize", "deprecated", "include", "skip"];

/// Utility for building a [`Schema`] from one or more SDL sources.
///
/// ```
/// use querybind::schema::SchemaBuilder;
///
/// let schema = SchemaBuilder::new()
///     .load_str(None, "type Query { hello: String }")
///     .unwrap()
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    directive_defs: IndexMap<String, DirectiveDefinition>,
    identity: Option<String>,
    mutation_type: Option<String>,
    query_type: Option<String>,
    sources: Vec<String>,
    subscription_type: Option<String>,
    types: IndexMap<String, GraphType>,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Typecheck everything loaded so far and produce an immutable
    /// [`Schema`].
    pub fn build(mut self) -> Result<Schema> {
        self.inject_builtins();
        self.link_interface_implementations()?;
        self.check_type_references()?;

        let query_type = self.query_type.take()
            .or_else(|| self.default_root_type(OperationKind::Query))
            .ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type = self.mutation_type.take()
            .or_else(|| self.default_root_type(OperationKind::Mutation));
        let subscription_type = self.subscription_type.take()
            .or_else(|| self.default_root_type(OperationKind::Subscription));

        for (kind, type_name) in [
            (OperationKind::Query, Some(&query_type)),
            (OperationKind::Mutation, mutation_type.as_ref()),
            (OperationKind::Subscription, subscription_type.as_ref()),
        ] {
            let Some(type_name) = type_name else { continue };
            if !matches!(self.types.get(type_name), Some(GraphType::Object(_))) {
                return Err(SchemaBuildError::InvalidRootOperationType {
                    operation: kind,
                    type_name: type_name.to_string(),
                });
            }
        }

        let identity = self.identity.take()
            .unwrap_or_else(|| identity_from_sources(&self.sources));
        tracing::debug!(
            identity = identity.as_str(),
            type_count = self.types.len(),
            "built schema",
        );

        Ok(Schema {
            directive_defs: self.directive_defs,
            identity,
            mutation_type,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    /// Read and load the SDL found in `file_path`.
    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = std::fs::read_to_string(file_path)
            .map_err(|err| SchemaBuildError::SchemaFileReadError {
                path: file_path.to_path_buf(),
                message: err.to_string(),
            })?;
        self.load_str(Some(file_path), content.as_str())
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            self = self.load_file(file_path)?;
        }
        Ok(self)
    }

    /// Parse `content` as SDL and merge its definitions into this builder.
    /// `file_path` is only used to give parse errors some context.
    pub fn load_str(
        mut self,
        file_path: Option<&Path>,
        content: &str,
    ) -> Result<Self> {
        let doc = ast::schema::parse(content)
            .map_err(|err| SchemaBuildError::SchemaParseError {
                file: file_path.map(Path::to_path_buf),
                message: err.to_string(),
            })?;

        for def in doc.definitions {
            self.visit_definition(def)?;
        }
        self.sources.push(content.to_string());

        Ok(self)
    }

    /// Override the identity that is otherwise derived from a hash of every
    /// loaded SDL source.
    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    fn check_type_references(&self) -> Result<()> {
        for graph_type in self.types.values() {
            let Some(fields) = graph_type.fields() else {
                if let GraphType::Union(union_t) = graph_type {
                    for member in &union_t.members {
                        if !matches!(self.types.get(member), Some(GraphType::Object(_))) {
                            return Err(SchemaBuildError::InvalidUnionMember {
                                union_name: union_t.name.to_string(),
                                member_name: member.to_string(),
                            });
                        }
                    }
                } else if let GraphType::InputObject(input_t) = graph_type {
                    for input_field in input_t.fields.values() {
                        self.check_input_reference(input_t.name.as_str(), input_field)?;
                    }
                }
                continue;
            };

            for field in fields.values() {
                let referenced = field.type_annotation.innermost_name();
                if !self.types.contains_key(referenced) {
                    return Err(SchemaBuildError::UndefinedTypeReference {
                        referencing_type: graph_type.name().to_string(),
                        referenced_type: referenced.to_string(),
                        def_location: field.def_location.clone(),
                    });
                }
                for arg in field.arguments.values() {
                    self.check_input_reference(graph_type.name(), arg)?;
                }
            }
        }
        Ok(())
    }

    fn check_input_reference(
        &self,
        referencing_type: &str,
        input_val: &InputValueDefinition,
    ) -> Result<()> {
        let referenced = input_val.type_annotation.innermost_name();
        match self.types.get(referenced) {
            Some(graph_type) if graph_type.is_input() => Ok(()),
            Some(_) => Err(SchemaBuildError::NonInputTypeInInputPosition {
                referencing_type: referencing_type.to_string(),
                input_name: input_val.name.to_string(),
                referenced_type: referenced.to_string(),
            }),
            None => Err(SchemaBuildError::UndefinedTypeReference {
                referencing_type: referencing_type.to_string(),
                referenced_type: referenced.to_string(),
                def_location: input_val.def_location.clone(),
            }),
        }
    }

    fn check_for_conflicting_type(
        &self,
        name: &str,
        def_location: &loc::SchemaDefLocation,
    ) -> Result<()> {
        if let Some(conflicting_type) = self.types.get(name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: name.to_string(),
                def1: conflicting_type.def_location().clone(),
                def2: def_location.clone(),
            });
        }
        Ok(())
    }

    fn default_root_type(&self, kind: OperationKind) -> Option<String> {
        let type_name = kind.default_root_type_name();
        self.types.contains_key(type_name).then(|| type_name.to_string())
    }

    fn inject_builtins(&mut self) {
        for scalar_name in BUILTIN_SCALAR_NAMES {
            if !self.types.contains_key(scalar_name) {
                self.types.insert(
                    scalar_name.to_string(),
                    GraphType::Scalar(ScalarType::builtin(scalar_name)),
                );
            }
        }

        let builtin_directives = [
            DirectiveDefinition::builtin_conditional("skip"),
            DirectiveDefinition::builtin_conditional("include"),
            DirectiveDefinition::builtin(
                "deprecated",
                vec![InputValueDefinition::new(
                    "reason",
                    TypeAnnotation::named("String", true),
                )],
                vec![
                    DirectiveLocation::TypeSystem("FieldDefinition".to_string()),
                    DirectiveLocation::TypeSystem("EnumValue".to_string()),
                ],
            ),
            DirectiveDefinition::builtin(
                SecurityRequirement::DIRECTIVE_NAME,
                vec![
                    InputValueDefinition::new(
                        "policy",
                        TypeAnnotation::named("String", true),
                    ),
                    InputValueDefinition::new(
                        "roles",
                        TypeAnnotation::list(TypeAnnotation::named("String", false), true),
                    ),
                ],
                vec![
                    DirectiveLocation::TypeSystem("Object".to_string()),
                    DirectiveLocation::TypeSystem("Interface".to_string()),
                    DirectiveLocation::TypeSystem("FieldDefinition".to_string()),
                ],
            ),
        ];
        for directive_def in builtin_directives {
            self.directive_defs.insert(directive_def.name.to_string(), directive_def);
        }
    }

    fn link_interface_implementations(&mut self) -> Result<()> {
        let mut implementations: Vec<(String, String)> = vec![];
        for graph_type in self.types.values() {
            if let GraphType::Object(obj_t) = graph_type {
                for iface_name in &obj_t.interfaces {
                    implementations.push((iface_name.to_string(), obj_t.name.to_string()));
                }
            }
        }

        for (iface_name, obj_name) in implementations {
            match self.types.get_mut(iface_name.as_str()) {
                Some(GraphType::Interface(iface_t)) => {
                    if !iface_t.implementations.contains(&obj_name) {
                        iface_t.implementations.push(obj_name);
                    }
                },
                _ => return Err(SchemaBuildError::UndefinedInterface {
                    type_name: obj_name,
                    interface_name: iface_name,
                }),
            }
        }
        Ok(())
    }

    fn visit_definition(&mut self, def: ast::schema::Definition) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_directive_definition(directive_def),
            Definition::SchemaDefinition(schema_def) =>
                self.visit_schemablock_definition(schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_type_definition(type_def),
            Definition::TypeExtension(type_ext) =>
                self.visit_type_extension(type_ext),
        }
    }

    fn visit_directive_definition(
        &mut self,
        def: ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let location = loc::SourceLocation::from_ast_position(&def.position);
        if BUILTIN_DIRECTIVE_NAMES.contains(&def.name.as_str()) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                directive_name: def.name,
                location,
            });
        }

        if let Some(existing) = self.directive_defs.get(def.name.as_str()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name.to_string(),
                location1: existing.def_location.clone(),
                location2: loc::SchemaDefLocation::Schema(location),
            });
        }

        self.directive_defs.insert(
            def.name.to_string(),
            DirectiveDefinition::from_ast(&def),
        );
        Ok(())
    }

    fn visit_schemablock_definition(
        &mut self,
        def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let location = loc::SourceLocation::from_ast_position(&def.position);
        for (kind, type_name) in [
            (OperationKind::Query, def.query),
            (OperationKind::Mutation, def.mutation),
            (OperationKind::Subscription, def.subscription),
        ] {
            let Some(type_name) = type_name else { continue };
            let slot = match kind {
                OperationKind::Mutation => &mut self.mutation_type,
                OperationKind::Query => &mut self.query_type,
                OperationKind::Subscription => &mut self.subscription_type,
            };
            if slot.is_some() {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation: kind,
                    location,
                });
            }
            *slot = Some(type_name);
        }
        Ok(())
    }

    fn visit_type_definition(&mut self, def: ast::schema::TypeDefinition) -> Result<()> {
        use ast::schema::TypeDefinition;
        let graph_type = match def {
            TypeDefinition::Enum(enum_def) => GraphType::Enum(EnumType {
                def_location: loc::SchemaDefLocation::from_ast_position(&enum_def.position),
                name: enum_def.name.to_string(),
                values: enum_def.values.iter().map(|val| val.name.to_string()).collect(),
            }),

            TypeDefinition::InputObject(input_def) => GraphType::InputObject(InputObjectType {
                def_location: loc::SchemaDefLocation::from_ast_position(&input_def.position),
                fields: input_values_from_ast(&input_def.name, &input_def.fields)?,
                name: input_def.name.to_string(),
            }),

            TypeDefinition::Interface(iface_def) => GraphType::Interface(InterfaceType {
                def_location: loc::SchemaDefLocation::from_ast_position(&iface_def.position),
                fields: fields_from_ast(&iface_def.name, &iface_def.fields)?,
                implementations: vec![],
                name: iface_def.name.to_string(),
                security: SecurityRequirement::from_ast_directives(&iface_def.directives),
            }),

            TypeDefinition::Object(obj_def) => GraphType::Object(ObjectType {
                def_location: loc::SchemaDefLocation::from_ast_position(&obj_def.position),
                fields: fields_from_ast(&obj_def.name, &obj_def.fields)?,
                interfaces: obj_def.implements_interfaces.clone(),
                name: obj_def.name.to_string(),
                security: SecurityRequirement::from_ast_directives(&obj_def.directives),
            }),

            TypeDefinition::Scalar(scalar_def) => GraphType::Scalar(ScalarType {
                def_location: loc::SchemaDefLocation::from_ast_position(&scalar_def.position),
                name: scalar_def.name.to_string(),
            }),

            TypeDefinition::Union(union_def) => GraphType::Union(UnionType {
                def_location: loc::SchemaDefLocation::from_ast_position(&union_def.position),
                members: union_def.types.clone(),
                name: union_def.name.to_string(),
            }),
        };

        self.check_for_conflicting_type(graph_type.name(), graph_type.def_location())?;
        self.types.insert(graph_type.name().to_string(), graph_type);
        Ok(())
    }

    fn visit_type_extension(&mut self, ext: ast::schema::TypeExtension) -> Result<()> {
        use ast::schema::TypeExtension;
        let (type_name, position) = match &ext {
            TypeExtension::Enum(ext) => (ext.name.as_str(), ext.position),
            TypeExtension::InputObject(ext) => (ext.name.as_str(), ext.position),
            TypeExtension::Interface(ext) => (ext.name.as_str(), ext.position),
            TypeExtension::Object(ext) => (ext.name.as_str(), ext.position),
            TypeExtension::Scalar(ext) => (ext.name.as_str(), ext.position),
            TypeExtension::Union(ext) => (ext.name.as_str(), ext.position),
        };
        let location = loc::SourceLocation::from_ast_position(&position);
        let type_name = type_name.to_string();

        let Some(graph_type) = self.types.get_mut(type_name.as_str()) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name,
                location,
            });
        };

        match (graph_type, ext) {
            (GraphType::Enum(enum_t), TypeExtension::Enum(ext)) => {
                for val in ext.values {
                    if enum_t.has_value(val.name.as_str()) {
                        return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                            enum_name: type_name,
                            value_name: val.name,
                            location: loc::SourceLocation::from_ast_position(&val.position),
                        });
                    }
                    enum_t.values.push(val.name);
                }
            },

            (GraphType::InputObject(input_t), TypeExtension::InputObject(ext)) =>
                merge_fields(
                    &type_name,
                    &mut input_t.fields,
                    input_values_from_ast(&type_name, &ext.fields)?,
                )?,

            (GraphType::Interface(iface_t), TypeExtension::Interface(ext)) => {
                merge_fields(
                    &type_name,
                    &mut iface_t.fields,
                    fields_from_ast(&type_name, &ext.fields)?,
                )?;
                iface_t.security.extend(SecurityRequirement::from_ast_directives(&ext.directives));
            },

            (GraphType::Object(obj_t), TypeExtension::Object(ext)) => {
                merge_fields(
                    &type_name,
                    &mut obj_t.fields,
                    fields_from_ast(&type_name, &ext.fields)?,
                )?;
                for iface_name in ext.implements_interfaces {
                    if !obj_t.interfaces.contains(&iface_name) {
                        obj_t.interfaces.push(iface_name);
                    }
                }
                obj_t.security.extend(SecurityRequirement::from_ast_directives(&ext.directives));
            },

            // Scalar extensions can only add directives, none of which carry
            // meaning for binding.
            (GraphType::Scalar(_), TypeExtension::Scalar(_)) => (),

            (GraphType::Union(union_t), TypeExtension::Union(ext)) => {
                for member in ext.types {
                    if !union_t.members.contains(&member) {
                        union_t.members.push(member);
                    }
                }
            },

            _ => return Err(SchemaBuildError::InvalidExtensionType {
                type_name,
                location,
            }),
        }
        Ok(())
    }
}

fn fields_from_ast(
    type_name: &str,
    ast_fields: &[ast::schema::Field],
) -> Result<IndexMap<String, FieldDefinition>> {
    let mut fields = IndexMap::new();
    for ast_field in ast_fields {
        if fields.contains_key(ast_field.name.as_str()) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: type_name.to_string(),
                field_name: ast_field.name.to_string(),
                location: loc::SourceLocation::from_ast_position(&ast_field.position),
            });
        }
        fields.insert(ast_field.name.to_string(), FieldDefinition {
            arguments: input_values_from_ast(type_name, &ast_field.arguments)?,
            def_location: loc::SchemaDefLocation::from_ast_position(&ast_field.position),
            name: ast_field.name.to_string(),
            parent_type_name: type_name.to_string(),
            security: SecurityRequirement::from_ast_directives(&ast_field.directives),
            type_annotation: TypeAnnotation::from_ast_type(&ast_field.field_type),
        });
    }
    Ok(fields)
}

fn identity_from_sources(sources: &[String]) -> String {
    let mut hasher = Sha256::new();
    for source in sources {
        hasher.update((source.len() as u64).to_le_bytes());
        hasher.update(source.as_bytes());
    }
    let digest = hasher.finalize();
    format!("schema-{}", hex::encode(&digest[..8]))
}

fn input_values_from_ast(
    type_name: &str,
    ast_values: &[ast::schema::InputValue],
) -> Result<IndexMap<String, InputValueDefinition>> {
    let mut values = IndexMap::new();
    for ast_value in ast_values {
        if values.contains_key(ast_value.name.as_str()) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: type_name.to_string(),
                field_name: ast_value.name.to_string(),
                location: loc::SourceLocation::from_ast_position(&ast_value.position),
            });
        }
        values.insert(ast_value.name.to_string(), InputValueDefinition::from_ast(ast_value));
    }
    Ok(values)
}

fn merge_fields<V>(
    type_name: &str,
    existing: &mut IndexMap<String, V>,
    additions: IndexMap<String, V>,
) -> Result<()> {
    for (field_name, field) in additions {
        if existing.contains_key(field_name.as_str()) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: type_name.to_string(),
                field_name,
                location: loc::SourceLocation::default(),
            });
        }
        existing.insert(field_name, field);
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SchemaBuildError {
    #[error("Directive `@{directive_name}` is defined more than once")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::SchemaDefLocation,
        location2: loc::SchemaDefLocation,
    },

    #[error("Enum `{enum_name}` defines the value `{value_name}` more than once (at {location})")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_name: String,
        location: loc::SourceLocation,
    },

    #[error("Type `{type_name}` defines `{field_name}` more than once (at {location})")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        location: loc::SourceLocation,
    },

    #[error("The {operation} root operation type is defined more than once (at {location})")]
    DuplicateOperationDefinition {
        operation: OperationKind,
        location: loc::SourceLocation,
    },

    #[error("Type `{type_name}` is defined more than once")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error("Attempted to extend `{type_name}` which is not defined (at {location})")]
    ExtensionOfUndefinedType {
        type_name: String,
        location: loc::SourceLocation,
    },

    #[error("Extension of `{type_name}` does not match the kind of its definition (at {location})")]
    InvalidExtensionType {
        type_name: String,
        location: loc::SourceLocation,
    },

    #[error("The {operation} root operation type `{type_name}` is not a defined object type")]
    InvalidRootOperationType {
        operation: OperationKind,
        type_name: String,
    },

    #[error("Union `{union_name}` includes `{member_name}` which is not an object type")]
    InvalidUnionMember {
        union_name: String,
        member_name: String,
    },

    #[error("No query root operation type was defined")]
    NoQueryOperationTypeDefined,

    #[error(
        "`{referencing_type}.{input_name}` is declared with the output type \
        `{referenced_type}`"
    )]
    NonInputTypeInInputPosition {
        referencing_type: String,
        input_name: String,
        referenced_type: String,
    },

    #[error("Built-in directive `@{directive_name}` cannot be redefined (at {location})")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error("Failed to read schema file {path:?}: {message}")]
    SchemaFileReadError {
        path: PathBuf,
        message: String,
    },

    #[error("Failed to parse schema: {message}")]
    SchemaParseError {
        file: Option<PathBuf>,
        message: String,
    },

    #[error("Type `{type_name}` implements `{interface_name}` which is not a defined interface")]
    UndefinedInterface {
        type_name: String,
        interface_name: String,
    },

    #[error("`{referencing_type}` references undefined type `{referenced_type}`")]
    UndefinedTypeReference {
        referencing_type: String,
        referenced_type: String,
        def_location: loc::SchemaDefLocation,
    },
}
