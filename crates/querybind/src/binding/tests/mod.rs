mod executable_fields_tests;
