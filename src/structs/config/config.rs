use serde::{Deserialize, Serialize};
use crate::structs::config::dashboard_config::DashboardConfig;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::config::service_config::ServiceConfig;
use crate::structs::config::upload_config::UploadConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub upload: UploadConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,
}
