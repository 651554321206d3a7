mod in_memory_query_plan_cache_tests;
mod query_plan_tests;
mod sha256_key_manager_tests;
