pub mod config;
pub mod dashboard_config;
pub mod output_config;
pub mod service_config;
pub mod upload_config;
