mod query_engine_tests;
mod query_request_tests;
