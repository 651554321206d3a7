use crate::binding::DocumentBuilder;
use crate::document::QueryDocument;
use crate::messages::GraphMessage;
use crate::messages::MessageSeverity;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaLookup;
use crate::types::DirectiveLocation;
use crate::validation::DocumentValidator;
use crate::validation::ValidationError;
use std::sync::Arc;

fn setup_schema() -> Arc<dyn SchemaLookup> {
    Arc::new(SchemaBuilder::new()
        .load_str(None, concat!(
            "directive @tag(name: String) repeatable on FIELD\n",
            "directive @cached on QUERY\n",
            "type Query {\n",
            "  donut(id: ID!): Donut\n",
            "  donuts(first: Int, glaze: String! = \"plain\"): [Donut]\n",
            "  hello: String\n",
            "}\n",
            "type Donut { id: ID!, name: String, related: [Donut] }\n",
        ))
        .unwrap()
        .build()
        .unwrap())
}

fn bind(query: &str) -> QueryDocument {
    DocumentBuilder::from_str(setup_schema(), query)
        .unwrap()
        .build()
}

fn validate(query: &str) -> Vec<ValidationError> {
    let doc = bind(query);
    DocumentValidator::new(&doc).validate()
}

fn critical(query: &str) -> Vec<ValidationError> {
    validate(query).into_iter().filter(ValidationError::is_critical).collect()
}

#[test]
fn valid_document_has_no_errors() {
    let errors = validate(r#"
        query One($id: ID!) { donut(id: $id) { ...DonutFields } }
        query Two { hello }
        fragment DonutFields on Donut { id name }
    "#);
    assert_eq!(errors, vec![]);
}

#[test]
fn duplicate_operation_names() {
    let errors = critical("query A { hello } query A { hello }");
    assert!(matches!(
        errors.as_slice(),
        [ValidationError::DuplicateOperationName { operation_name, .. }] if operation_name == "A",
    ));
}

#[test]
fn at_most_one_anonymous_operation() {
    assert!(critical("{ hello } query Named { hello }").is_empty());
    assert!(matches!(
        critical("{ hello } { hello }").as_slice(),
        [ValidationError::MultipleAnonymousOperations { .. }],
    ));
}

#[test]
fn duplicate_fragment_names() {
    let errors = critical(r#"
        { donut(id: 1) { ...F } }
        fragment F on Donut { id }
        fragment F on Donut { name }
    "#);
    assert!(matches!(
        errors.as_slice(),
        [ValidationError::DuplicateFragmentName { fragment_name, .. }] if fragment_name == "F",
    ));
}

#[test]
fn unreferenced_fragment_is_only_a_warning() {
    let errors = validate("{ hello } fragment Unused on Donut { id }");
    assert!(matches!(
        errors.as_slice(),
        [ValidationError::UnreferencedFragment { fragment_name, .. }] if fragment_name == "Unused",
    ));
    assert_eq!(GraphMessage::from(&errors[0]).severity(), MessageSeverity::Warning);
}

#[test]
fn undefined_fragment_spread() {
    let errors = critical("{ donut(id: 1) { ...Missing } }");
    assert!(matches!(
        errors.as_slice(),
        [ValidationError::UndefinedFragment { fragment_name, .. }] if fragment_name == "Missing",
    ));
}

#[test]
fn fragment_cycles_are_reported_once_per_cycle() {
    let errors = critical(r#"
        { donut(id: 1) { ...B } }
        fragment A on Donut { related { ...B } }
        fragment B on Donut { related { ...C } }
        fragment C on Donut { related { ...A } }
    "#);
    let cycles: Vec<&Vec<String>> = errors.iter()
        .filter_map(|err| match err {
            ValidationError::FragmentCycle { cycle_path, .. } => Some(cycle_path),
            _ => None,
        })
        .collect();
    assert_eq!(cycles, vec![&vec![
        "A".to_string(),
        "B".to_string(),
        "C".to_string(),
        "A".to_string(),
    ]]);
}

#[test]
fn self_spreading_fragment_is_a_cycle() {
    let errors = critical(r#"
        { donut(id: 1) { ...Loop } }
        fragment Loop on Donut { ...Loop }
    "#);
    assert!(matches!(
        errors.as_slice(),
        [ValidationError::FragmentCycle { cycle_path, .. }] if cycle_path == &["Loop", "Loop"],
    ));
}

#[test]
fn undeclared_variable_inside_fragment() {
    let errors = critical(r#"
        query Q { donut(id: 1) { ...F } }
        fragment F on Donut { related { id } }
        query R { ...G }
        fragment G on Query { donut(id: $missing) { id } }
    "#);
    assert!(matches!(
        errors.as_slice(),
        [ValidationError::UndefinedVariable { variable_name, operation_name, .. }]
            if variable_name == "missing" && operation_name == "R",
    ));
}

#[test]
fn unused_variable_is_only_a_warning() {
    let errors = validate("query Q($unused: Int) { hello }");
    assert!(matches!(
        errors.as_slice(),
        [ValidationError::UnusedVariable { variable_name, .. }] if variable_name == "unused",
    ));
    assert!(!errors[0].is_critical());
}

#[test]
fn incompatible_variable_usage() {
    let errors = critical("query Q($id: ID) { donut(id: $id) { id } }");
    assert!(matches!(
        errors.as_slice(),
        [ValidationError::IncompatibleVariableUsage { variable_name, .. }] if variable_name == "id",
    ));

    assert!(critical("query Q($id: ID = 1) { donut(id: $id) { id } }").is_empty());
    assert!(critical("query Q($id: ID!) { donut(id: $id) { id } }").is_empty());
    assert!(!critical("query Q($id: String!) { donut(id: $id) { id } }").is_empty());
}

#[test]
fn location_default_allows_nullable_variable() {
    assert!(critical("query Q($glaze: String) { donuts(glaze: $glaze) { id } }").is_empty());
}

#[test]
fn unknown_directive() {
    let errors = critical("{ hello @nope }");
    assert!(matches!(
        errors.as_slice(),
        [ValidationError::UnknownDirective { directive_name, .. }] if directive_name == "nope",
    ));
}

#[test]
fn misplaced_directive() {
    let errors = critical("query Q @skip(if: true) { hello @cached }");
    assert_eq!(errors.len(), 2);
    assert!(matches!(
        &errors[0],
        ValidationError::MisplacedDirective { directive_name, directive_location: DirectiveLocation::Query, .. }
            if directive_name == "skip",
    ));
    assert!(matches!(
        &errors[1],
        ValidationError::MisplacedDirective { directive_name, directive_location: DirectiveLocation::Field, .. }
            if directive_name == "cached",
    ));
}

#[test]
fn repeated_non_repeatable_directive() {
    let errors = critical("{ hello @skip(if: false) @skip(if: false) @tag(name: \"a\") @tag(name: \"b\") }");
    assert!(matches!(
        errors.as_slice(),
        [ValidationError::DuplicateDirective { directive_name, .. }] if directive_name == "skip",
    ));
}

#[test]
fn validation_does_not_mutate_the_document() {
    let doc = bind("query A { hello } query A { nope }");
    let before = format!("{:?}", doc.parts);
    let first = DocumentValidator::new(&doc).validate();
    let second = DocumentValidator::new(&doc).validate();
    assert_eq!(first, second);
    assert_eq!(before, format!("{:?}", doc.parts));
}
