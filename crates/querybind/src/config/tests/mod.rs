mod engine_config_tests;
