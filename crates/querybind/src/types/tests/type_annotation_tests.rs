use crate::types::TypeAnnotation;

fn string(nullable: bool) -> TypeAnnotation {
    TypeAnnotation::named("String", nullable)
}

#[test]
fn display_renders_graphql_type_syntax() {
    let annot = TypeAnnotation::list(string(false), false);
    assert_eq!(annot.to_string(), "[String!]!");
    assert_eq!(string(true).to_string(), "String");
}

#[test]
fn innermost_name_unwraps_nested_lists() {
    let annot = TypeAnnotation::list(TypeAnnotation::list(string(true), true), false);
    assert_eq!(annot.innermost_name(), "String");
    assert!(annot.is_list());
    assert!(!annot.nullable());
}

#[test]
fn non_null_variable_fits_nullable_location() {
    assert!(string(false).is_compatible_variable_for(&string(true)));
}

#[test]
fn nullable_variable_does_not_fit_non_null_location() {
    assert!(!string(true).is_compatible_variable_for(&string(false)));
}

#[test]
fn differently_named_types_are_incompatible() {
    let int = TypeAnnotation::named("Int", true);
    assert!(!int.is_compatible_variable_for(&string(true)));
}

#[test]
fn list_compatibility_checks_item_types() {
    let var_type = TypeAnnotation::list(string(false), true);
    let loc_type = TypeAnnotation::list(string(true), true);
    assert!(var_type.is_compatible_variable_for(&loc_type));
    assert!(!loc_type.is_compatible_variable_for(&TypeAnnotation::list(string(false), true)));
    assert!(!string(true).is_compatible_variable_for(&loc_type));
}
