mod chat_service_test;
