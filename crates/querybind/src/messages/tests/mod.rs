mod message_collection_tests;
