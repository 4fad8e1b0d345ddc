pub mod csv_exporter;
pub mod progress_ticker;
pub mod results_aggregator;
pub mod results_query;
pub mod upload_workflow;
