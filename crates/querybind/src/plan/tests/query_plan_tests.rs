use crate::binding::DocumentBuilder;
use crate::error_codes;
use crate::messages::GraphMessage;
use crate::plan::PlanError;
use crate::plan::PlanLimits;
use crate::plan::QueryPlan;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaLookup;
use crate::validation::DocumentValidator;
use std::sync::Arc;

fn setup_schema() -> Arc<dyn SchemaLookup> {
    Arc::new(SchemaBuilder::new()
        .load_str(None, concat!(
            "directive @cached on QUERY\n",
            "type Query {\n",
            "  donut(id: ID!): Donut\n",
            "  donuts: [Donut]\n",
            "  hello: String\n",
            "}\n",
            "type Mutation { eat(id: ID!): Donut }\n",
            "type Donut {\n",
            "  id: ID!\n",
            "  name: String\n",
            "  related: [Donut]\n",
            "  secret: String @authorize(roles: [\"baker\"])\n",
            "}\n",
        ))
        .unwrap()
        .build()
        .unwrap())
}

fn plan_with_limits(query: &str, operation_name: Option<&str>, limits: PlanLimits) -> QueryPlan {
    let doc = DocumentBuilder::from_str(setup_schema(), query)
        .unwrap()
        .build();
    let operation = QueryPlan::select_operation(&doc, operation_name).unwrap();
    let mut messages = doc.messages();
    messages.extend(DocumentValidator::new(&doc).validate().iter().map(GraphMessage::from));
    QueryPlan::new(Arc::new(doc), operation, messages, &limits)
}

fn plan(query: &str) -> QueryPlan {
    plan_with_limits(query, None, PlanLimits::default())
}

#[test]
fn single_anonymous_operation_is_selected_without_a_name() {
    let plan = plan("{ hello }");
    assert!(plan.operation_part().name().is_none());
    assert!(plan.is_valid());
}

#[test]
fn operation_selection_by_name() {
    let doc = DocumentBuilder::from_str(
        setup_schema(),
        "query A { hello } query B { donuts { id } }",
    ).unwrap().build();

    let b = QueryPlan::select_operation(&doc, Some("B")).unwrap();
    assert_eq!(doc.part(b).as_operation().unwrap().name(), Some("B"));
    assert_eq!(
        QueryPlan::select_operation(&doc, None),
        Err(PlanError::OperationNameRequired),
    );
    assert_eq!(
        QueryPlan::select_operation(&doc, Some("C")),
        Err(PlanError::UnknownOperation { operation_name: "C".to_string() }),
    );
}

#[test]
fn document_without_operations_has_nothing_to_select() {
    let doc = DocumentBuilder::from_str(setup_schema(), "fragment F on Donut { id }")
        .unwrap()
        .build();
    assert_eq!(QueryPlan::select_operation(&doc, None), Err(PlanError::NoOperations));
}

#[test]
fn plain_valid_plan_is_cacheable() {
    let plan = plan("query Q { donuts { id name } }");
    assert!(plan.is_valid());
    assert!(plan.is_cacheable());
}

#[test]
fn directive_on_operation_prevents_caching() {
    let plan = plan("query Q @cached { hello }");
    assert!(plan.is_valid());
    assert!(!plan.is_cacheable());
}

#[test]
fn directive_inside_spread_fragment_prevents_caching() {
    let plan = plan(r#"
        query Q { donuts { ...F } }
        fragment F on Donut { id name @skip(if: true) }
    "#);
    assert!(plan.is_valid());
    assert!(!plan.is_cacheable());
}

#[test]
fn critical_construction_messages_prevent_caching() {
    let plan = plan("{ donuts { id flavor } }");
    assert!(!plan.is_valid());
    assert!(!plan.is_cacheable());
}

#[test]
fn warnings_alone_keep_a_plan_cacheable() {
    let plan = plan("query Q($unused: Int) { hello }");
    assert!(!plan.messages().is_empty());
    assert!(plan.is_valid());
    assert!(plan.is_cacheable());
}

#[test]
fn depth_and_field_count_are_measured() {
    let plan = plan("{ donuts { id related { name } } hello }");
    assert_eq!(plan.max_depth(), 3);
    assert_eq!(plan.field_count(), 5);
}

#[test]
fn fragment_fields_count_toward_limits() {
    let plan = plan(r#"
        { donuts { ...F } }
        fragment F on Donut { id related { id } }
    "#);
    assert_eq!(plan.max_depth(), 3);
    assert_eq!(plan.field_count(), 4);
}

#[test]
fn exceeding_limits_invalidates_the_plan() {
    let limits = PlanLimits { max_depth: 2, max_field_count: 0 };
    let plan = plan_with_limits("{ donuts { related { id } } }", None, limits);
    assert!(!plan.is_valid());
    assert!(plan.messages().iter().any(|msg| msg.code() == error_codes::QUERY_TOO_COMPLEX));

    let limits = PlanLimits { max_depth: 0, max_field_count: 2 };
    let plan = plan_with_limits("{ donuts { id name } }", None, limits);
    assert!(!plan.is_valid());

    let limits = PlanLimits { max_depth: 2, max_field_count: 3 };
    assert!(plan_with_limits("{ donuts { id name } }", None, limits).is_valid());
}

#[test]
fn secure_fields_of_the_operation() {
    let plan = plan("{ donuts { id secret } }");
    let secure: Vec<&str> = plan.secure_fields()
        .into_iter()
        .map(|id| plan.document().part(id).as_field().unwrap().name())
        .collect();
    assert_eq!(secure, vec!["secret"]);
}

#[test]
fn document_mut_copies_a_shared_document() {
    let original = plan("{ donuts { id name } }");
    let mut copy = original.clone();
    let root_set = copy.root_selection_set().unwrap();
    let donuts = copy.document().children(root_set)[0];
    copy.document_mut().remove_part(donuts);

    assert!(copy.document().children(root_set).is_empty());
    assert_eq!(original.document().children(root_set), &[donuts]);
}
