use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaLookup;

fn setup_schema() -> Schema {
    SchemaBuilder::new()
        .load_str(None, concat!(
            "type Query { bakery: Bakery, pastry: Pastry, item: Item }\n",
            "interface Item { price: Float }\n",
            "type Donut implements Item { price: Float, glaze: String }\n",
            "type Bagel implements Item { price: Float, seeds: Boolean }\n",
            "type Croissant { flaky: Boolean }\n",
            "union Pastry = Donut | Bagel\n",
            "union Bakery = Bagel | Croissant\n",
        ))
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn possible_types_of_object_is_itself() {
    let schema = setup_schema();
    assert_eq!(schema.possible_types("Donut"), vec!["Donut"]);
}

#[test]
fn possible_types_of_union_are_its_members() {
    let schema = setup_schema();
    assert_eq!(schema.possible_types("Pastry"), vec!["Donut", "Bagel"]);
}

#[test]
fn possible_types_of_interface_are_its_implementations() {
    let schema = setup_schema();
    assert_eq!(schema.possible_types("Item"), vec!["Donut", "Bagel"]);
}

#[test]
fn possible_types_of_leaf_is_empty() {
    let schema = setup_schema();
    assert!(schema.possible_types("String").is_empty());
    assert!(schema.possible_types("Nope").is_empty());
}

#[test]
fn types_overlap_through_shared_members() {
    let schema = setup_schema();
    assert!(schema.types_overlap("Pastry", "Item"));
    assert!(schema.types_overlap("Bakery", "Pastry"));
    assert!(schema.types_overlap("Bagel", "Bakery"));
    assert!(!schema.types_overlap("Croissant", "Pastry"));
    assert!(!schema.types_overlap("Donut", "Bagel"));
}

#[test]
fn is_possible_type_checks_membership() {
    let schema = setup_schema();
    assert!(schema.is_possible_type("Pastry", "Donut"));
    assert!(schema.is_possible_type("Donut", "Donut"));
    assert!(!schema.is_possible_type("Pastry", "Croissant"));
}

#[test]
fn find_field_walks_into_type() {
    let schema = setup_schema();
    let field = schema.find_field("Donut", "glaze").unwrap();
    assert_eq!(field.parent_type_name(), "Donut");
    assert_eq!(field.type_annotation().to_string(), "String");
    assert!(schema.find_field("Pastry", "glaze").is_none());
}
