mod common;
mod validation_api_tests;
mod upload_flow_tests;
mod results_query_properties;
