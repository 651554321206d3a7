use crate::document::OperationKind;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaLookup;
use crate::types::GraphType;
use crate::types::SecurityRequirement;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[test]
fn build_without_load() {
    let schema = SchemaBuilder::new().build();
    assert_eq!(schema.unwrap_err(), SchemaBuildError::NoQueryOperationTypeDefined);
}

#[test]
fn builtins_are_injected() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, "type Query { hello: String }")?
        .build()?;

    for scalar_name in ["Boolean", "Float", "ID", "Int", "String"] {
        assert!(matches!(
            schema.find_graph_type(scalar_name),
            Some(GraphType::Scalar(_)),
        ));
    }
    for directive_name in ["skip", "include", "deprecated", "authorize"] {
        assert!(schema.find_directive(directive_name).is_some());
    }
    assert_eq!(schema.all_types().len(), 6);
    Ok(())
}

#[test]
fn root_types_default_to_conventional_names() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, concat!(
            "type Query { a: Int }\n",
            "type Mutation { b: Int }\n",
        ))?
        .build()?;

    assert_eq!(schema.root_type_name(OperationKind::Query), Some("Query"));
    assert_eq!(schema.root_type_name(OperationKind::Mutation), Some("Mutation"));
    assert_eq!(schema.root_type_name(OperationKind::Subscription), None);
    Ok(())
}

#[test]
fn schema_block_overrides_root_type_names() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, concat!(
            "schema { query: RootQuery }\n",
            "type RootQuery { a: Int }\n",
        ))?
        .build()?;

    assert_eq!(schema.query_type().map(|t| t.name()), Some("RootQuery"));
    Ok(())
}

#[test]
fn schema_block_pointing_at_non_object_is_an_error() -> Result<()> {
    let err = SchemaBuilder::new()
        .load_str(None, concat!(
            "schema { query: Foo }\n",
            "scalar Foo\n",
        ))?
        .build()
        .unwrap_err();

    assert_eq!(err, SchemaBuildError::InvalidRootOperationType {
        operation: OperationKind::Query,
        type_name: "Foo".to_string(),
    });
    Ok(())
}

#[test]
fn interface_implementations_are_linked() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, concat!(
            "type Query { node: Node }\n",
            "interface Node { id: ID! }\n",
            "type User implements Node { id: ID! }\n",
            "type Post implements Node { id: ID! }\n",
        ))?
        .build()?;

    match schema.find_graph_type("Node") {
        Some(GraphType::Interface(iface_t)) =>
            assert_eq!(iface_t.implementations, vec!["User", "Post"]),
        other => panic!("expected an interface, found {other:?}"),
    }
    Ok(())
}

#[test]
fn object_type_extension_adds_fields() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, "type Query { a: Int }")?
        .load_str(None, "extend type Query { b: String }")?
        .build()?;

    assert!(schema.find_field("Query", "a").is_some());
    assert!(schema.find_field("Query", "b").is_some());
    Ok(())
}

#[test]
fn extension_of_undefined_type_is_an_error() {
    let err = SchemaBuilder::new()
        .load_str(None, "extend type Missing { b: String }")
        .unwrap_err();

    assert!(matches!(
        err,
        SchemaBuildError::ExtensionOfUndefinedType { ref type_name, .. } if type_name == "Missing",
    ));
}

#[test]
fn duplicate_type_definition_is_an_error() {
    let err = SchemaBuilder::new()
        .load_str(None, "type Query { a: Int }\ntype Query { b: Int }")
        .unwrap_err();

    assert!(matches!(err, SchemaBuildError::DuplicateTypeDefinition { .. }));
}

#[test]
fn undefined_field_type_is_an_error() -> Result<()> {
    let err = SchemaBuilder::new()
        .load_str(None, "type Query { a: Missing }")?
        .build()
        .unwrap_err();

    assert!(matches!(
        err,
        SchemaBuildError::UndefinedTypeReference { ref referenced_type, .. }
            if referenced_type == "Missing",
    ));
    Ok(())
}

#[test]
fn builtin_directive_cannot_be_redefined() {
    let err = SchemaBuilder::new()
        .load_str(None, "directive @skip(if: Boolean!) on FIELD")
        .unwrap_err();

    assert!(matches!(err, SchemaBuildError::RedefinitionOfBuiltinDirective { .. }));
}

#[test]
fn custom_repeatable_directive_is_loaded() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, concat!(
            "directive @tag(name: String!) repeatable on FIELD | QUERY\n",
            "type Query { a: Int }\n",
        ))?
        .build()?;

    let tag = schema.find_directive("tag").unwrap();
    assert!(tag.repeatable());
    assert_eq!(tag.locations().len(), 2);
    assert!(tag.arguments().contains_key("name"));
    Ok(())
}

#[test]
fn authorize_annotations_become_security_requirements() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, concat!(
            "type Query @authorize {\n",
            "  secret: String @authorize(policy: \"staff\", roles: [\"admin\", \"ops\"])\n",
            "  open: String\n",
            "}\n",
        ))?
        .build()?;

    assert_eq!(schema.query_type().unwrap().security(), &[SecurityRequirement::default()]);
    assert_eq!(schema.find_field("Query", "secret").unwrap().security(), &[SecurityRequirement {
        policy: Some("staff".to_string()),
        roles: vec!["admin".to_string(), "ops".to_string()],
    }]);
    assert!(schema.find_field("Query", "open").unwrap().security().is_empty());
    Ok(())
}

#[test]
fn identity_is_derived_from_sources() -> Result<()> {
    let sdl = "type Query { a: Int }";
    let schema1 = SchemaBuilder::new().load_str(None, sdl)?.build()?;
    let schema2 = SchemaBuilder::new().load_str(None, sdl)?.build()?;
    let schema3 = SchemaBuilder::new().load_str(None, "type Query { b: Int }")?.build()?;
    let named = SchemaBuilder::new()
        .load_str(None, sdl)?
        .with_identity("inventory-v2")
        .build()?;

    assert_eq!(schema1.identity(), schema2.identity());
    assert_ne!(schema1.identity(), schema3.identity());
    assert_eq!(named.identity(), "inventory-v2");
    Ok(())
}

#[test]
fn syntax_errors_are_reported() {
    let err = SchemaBuilder::new()
        .load_str(None, "type Query {")
        .unwrap_err();

    assert!(matches!(err, SchemaBuildError::SchemaParseError { file: None, .. }));
}
