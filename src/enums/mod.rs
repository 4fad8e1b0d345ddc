pub mod commands;
pub mod rate;
pub mod severity;
pub mod severity_filter;
pub mod sort_key;
pub mod upload_failure;
pub mod upload_phase;
