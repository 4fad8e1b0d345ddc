pub mod cli;
pub mod config;
pub mod file_upload;
pub mod health_status;
pub mod issue;
pub mod issue_groupings;
pub mod query_criteria;
pub mod result_metrics;
pub mod results_summary;
pub mod service_error_body;
pub mod severity_counts;
pub mod type_count;
pub mod validation_result;
pub mod visible_issue;
pub mod workflow_snapshot;
