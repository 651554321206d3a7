use crate::binding::DocumentBuilder;
use crate::document::FieldBinding;
use crate::document::PartData;
use crate::document::PartId;
use crate::document::QueryDocument;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaLookup;
use proptest::prelude::*;
use std::sync::Arc;

fn setup_schema() -> Arc<dyn SchemaLookup> {
    Arc::new(SchemaBuilder::new()
        .load_str(None, concat!(
            "type Query { pastry: Pastry, item: Item, donut: Donut, a: Int, b: Int, c: Int, d: Int }\n",
            "interface Item { price: Float }\n",
            "type Donut implements Item { name: String, price: Float, glaze: String }\n",
            "type Bagel implements Item { name: String, price: Float, seeds: Boolean }\n",
            "union Pastry = Donut | Bagel\n",
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

fn root_set(doc: &QueryDocument) -> PartId {
    doc.selection_set_of(doc.operations()[0]).unwrap()
}

fn first_field_set(doc: &QueryDocument) -> PartId {
    let root = root_set(doc);
    doc.selection_set_of(doc.children(root)[0]).unwrap()
}

/// (response key, target type) for each executable field.
fn describe(doc: &QueryDocument, set: PartId) -> Vec<(String, String)> {
    doc.executable_fields(set)
        .iter()
        .map(|exec_field| {
            let field = doc.part(exec_field.field).as_field().unwrap();
            (field.response_key().to_string(), exec_field.target_type.to_string())
        })
        .collect()
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items.iter().map(|(a, b)| (a.to_string(), b.to_string())).collect()
}

#[test]
fn without_fragments_matches_declaration_order() {
    let doc = bind("{ c a d b }");
    assert_eq!(describe(&doc, root_set(&doc)), pairs(&[
        ("c", "Query"),
        ("a", "Query"),
        ("d", "Query"),
        ("b", "Query"),
    ]));
}

#[test]
fn fields_inline_fragments_and_spreads_interleave_in_order() {
    let doc = bind(r#"
        {
            donut {
                name
                ... on Donut { glaze price }
                ...DonutPrice
                glaze
            }
        }
        fragment DonutPrice on Item { price }
    "#);
    assert_eq!(describe(&doc, first_field_set(&doc)), pairs(&[
        ("name", "Donut"),
        ("glaze", "Donut"),
        ("price", "Donut"),
        ("price", "Donut"),
        ("glaze", "Donut"),
    ]));
}

#[test]
fn inline_fragments_narrow_abstract_scopes() {
    let doc = bind(r#"
        {
            pastry {
                ... on Donut { glaze }
                ... on Bagel { seeds }
                ... on Item { price }
            }
        }
    "#);
    assert_eq!(describe(&doc, first_field_set(&doc)), pairs(&[
        ("glaze", "Donut"),
        ("seeds", "Bagel"),
        ("price", "Item"),
    ]));
}

#[test]
fn inapplicable_type_condition_contributes_nothing() {
    let doc = bind("{ donut { name ... on Bagel { seeds } } }");
    assert_eq!(describe(&doc, first_field_set(&doc)), pairs(&[("name", "Donut")]));
}

#[test]
fn typename_on_abstract_scope_expands_per_concrete_type() {
    let doc = bind(r#"
        {
            pastry { ...PastryFields }
        }
        fragment PastryFields on Pastry {
            __typename
            ... on Donut { glaze }
            ... on Bagel { seeds }
        }
    "#);
    let fields = describe(&doc, first_field_set(&doc));
    assert_eq!(fields, pairs(&[
        ("__typename", "Donut"),
        ("__typename", "Bagel"),
        ("glaze", "Donut"),
        ("seeds", "Bagel"),
    ]));

    let typename_bindings: Vec<FieldBinding> = doc.executable_fields(first_field_set(&doc))
        .iter()
        .filter_map(|exec_field| doc.part(exec_field.field).as_field())
        .filter(|field| field.is_typename())
        .map(|field| field.binding().clone())
        .collect();
    assert_eq!(typename_bindings, vec![
        FieldBinding::TypeName { concrete_type: "Donut".to_string() },
        FieldBinding::TypeName { concrete_type: "Bagel".to_string() },
    ]);
}

#[test]
fn typename_on_concrete_scope_is_single() {
    let doc = bind("{ __typename donut { __typename } }");
    assert_eq!(describe(&doc, root_set(&doc)), pairs(&[
        ("__typename", "Query"),
        ("donut", "Query"),
    ]));
    assert_eq!(describe(&doc, first_field_set(&doc)), pairs(&[("__typename", "Donut")]));
}

#[test]
fn typename_inside_narrowed_scope_only_keeps_matching_types() {
    let doc = bind(r#"
        {
            donut { ...Generic }
        }
        fragment Generic on Pastry { __typename }
    "#);
    assert_eq!(describe(&doc, first_field_set(&doc)), pairs(&[("__typename", "Donut")]));
}

#[test]
fn cyclic_spreads_terminate() {
    let doc = bind(r#"
        { donut { ...A } }
        fragment A on Donut { name ...B }
        fragment B on Donut { glaze ...A }
    "#);
    assert_eq!(describe(&doc, first_field_set(&doc)), pairs(&[
        ("name", "Donut"),
        ("glaze", "Donut"),
    ]));
}

#[test]
fn unresolved_spread_contributes_nothing() {
    let doc = bind("{ donut { name ...Missing } }");
    assert_eq!(describe(&doc, first_field_set(&doc)), pairs(&[("name", "Donut")]));
}

#[test]
fn removing_a_part_invalidates_cached_fields() {
    let mut doc = bind("{ a b c }");
    let set = root_set(&doc);
    assert_eq!(doc.executable_fields(set).len(), 3);

    let b = doc.children(set)[1];
    doc.remove_part(b);
    assert!(!doc.is_attached(b));
    assert_eq!(describe(&doc, set), pairs(&[("a", "Query"), ("c", "Query")]));

    doc.attach_part(set, b, Some(0));
    assert_eq!(describe(&doc, set), pairs(&[
        ("b", "Query"),
        ("a", "Query"),
        ("c", "Query"),
    ]));
}

#[test]
#[should_panic(expected = "is already attached")]
fn attaching_an_attached_part_panics() {
    let mut doc = bind("{ a b }");
    let set = root_set(&doc);
    let a = doc.children(set)[0];
    doc.attach_part(set, a, None);
}

#[test]
#[should_panic(expected = "is not attached")]
fn removing_a_detached_part_panics() {
    let mut doc = bind("{ a b }");
    let set = root_set(&doc);
    let a = doc.children(set)[0];
    doc.remove_part(a);
    doc.remove_part(a);
}

#[test]
fn all_directives_follow_spreads() {
    let doc = bind(r#"
        query Q @tag { donut @skip(if: false) { ...F } }
        fragment F on Donut @frag { name @include(if: true) }
    "#);
    let names: Vec<String> = doc.all_directives(doc.operations()[0])
        .into_iter()
        .filter_map(|id| match &doc.part(id).data {
            PartData::Directive(directive) => Some(directive.name().to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(names, vec!["tag", "skip", "frag", "include"]);
}

proptest! {
    #[test]
    fn flattening_is_idempotent_and_order_preserving(
        order in Just(vec!["a", "b", "c", "d"]).prop_shuffle(),
    ) {
        let query = format!("{{ {} }}", order.join(" "));
        let doc = bind(query.as_str());
        let set = root_set(&doc);

        let first = doc.executable_fields(set).to_vec();
        let second = doc.executable_fields(set).to_vec();
        prop_assert_eq!(&first, &second);

        let keys: Vec<&str> = first.iter()
            .map(|exec_field| doc.part(exec_field.field).as_field().unwrap().name())
            .collect();
        prop_assert_eq!(keys, order);
    }
}
