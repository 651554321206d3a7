mod execution_monitor_tests;
