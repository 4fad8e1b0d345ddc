pub mod validation_api_adapter;
