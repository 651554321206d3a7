mod schema_builder_tests;
mod schema_lookup_tests;
