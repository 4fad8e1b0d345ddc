use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UploadConfig {
    #[serde(default = "ConfigHelper::default_progress_step")]
    pub progress_step: u8,

    #[serde(default = "ConfigHelper::default_progress_interval_ms")]
    pub progress_interval_ms: u64,

    #[serde(default = "ConfigHelper::default_progress_ceiling")]
    pub progress_ceiling: u8,

    /// Advisory only: other extensions are still uploaded.
    #[serde(default = "ConfigHelper::default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

impl UploadConfig {
    pub fn progress_interval(&self) -> Duration {
        Duration::from_millis(self.progress_interval_ms)
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            progress_step: ConfigHelper::default_progress_step(),
            progress_interval_ms: ConfigHelper::default_progress_interval_ms(),
            progress_ceiling: ConfigHelper::default_progress_ceiling(),
            allowed_extensions: ConfigHelper::default_allowed_extensions(),
        }
    }
}
