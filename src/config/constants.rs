use std::time::Duration;

pub const CONFIG_DIR_NAME: &str = ".sheetval";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_SERVICE_BASE_URL: &str = "http://localhost:8000";
pub const UPLOAD_FIELD_NAME: &str = "file";

pub const DEFAULT_PROGRESS_STEP: u8 = 10;
pub const DEFAULT_PROGRESS_INTERVAL_MS: u64 = 200;
pub const DEFAULT_PROGRESS_CEILING: u8 = 90;
pub const PROGRESS_COMPLETE: u8 = 100;

pub const DEFAULT_DASHBOARD_PORT: u16 = 8080;
pub const DEFAULT_SERVER_PORT_RANGE_START: u16 = 8080;
pub const DEFAULT_SERVER_PORT_RANGE_END: u16 = 8200;
pub const SERVER_SHUTDOWN_GRACE_PERIOD_MS: u64 = 100;
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

pub const EXPORT_FILE_PREFIX: &str = "validation_results_";
pub const CSV_HEADERS: [&str; 7] = [
    "Row",
    "Project Name",
    "Issue Type",
    "Description",
    "Severity",
    "Start Date",
    "End Date",
];

pub const GENERIC_UPLOAD_FAILURE_MESSAGE: &str =
    "Failed to validate file. Please ensure your Excel file contains the required columns: Project Name, Start Date, and End Date.";

pub const DEFAULT_TABLE_WIDTH: usize = 120;

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
