use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceConfig {
    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_validate_path")]
    pub validate_path: String,

    #[serde(default = "ConfigHelper::default_health_path")]
    pub health_path: String,

    /// No timeout unless set; the transport defaults apply.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl ServiceConfig {
    pub fn validate_url(&self) -> String {
        join_url(&self.base_url, &self.validate_path)
    }

    pub fn health_url(&self) -> String {
        join_url(&self.base_url, &self.health_path)
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: ConfigHelper::default_base_url(),
            validate_path: ConfigHelper::default_validate_path(),
            health_path: ConfigHelper::default_health_path(),
            request_timeout_secs: None,
        }
    }
}
