use crate::config::constants::{
    DEFAULT_DASHBOARD_PORT, DEFAULT_PROGRESS_CEILING, DEFAULT_PROGRESS_INTERVAL_MS,
    DEFAULT_PROGRESS_STEP, DEFAULT_SERVICE_BASE_URL,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        DEFAULT_SERVICE_BASE_URL.to_string()
    }

    pub fn default_validate_path() -> String {
        "/api/validate".to_string()
    }

    pub fn default_health_path() -> String {
        "/api/health".to_string()
    }

    pub fn default_progress_step() -> u8 {
        DEFAULT_PROGRESS_STEP
    }

    pub fn default_progress_interval_ms() -> u64 {
        DEFAULT_PROGRESS_INTERVAL_MS
    }

    pub fn default_progress_ceiling() -> u8 {
        DEFAULT_PROGRESS_CEILING
    }

    pub fn default_allowed_extensions() -> Vec<String> {
        vec!["xlsx".to_string(), "xls".to_string()]
    }

    pub fn default_export_dir() -> String {
        ".".to_string()
    }

    pub fn default_dashboard_port() -> u16 {
        DEFAULT_DASHBOARD_PORT
    }

    pub fn default_open_browser() -> bool {
        true
    }
}
