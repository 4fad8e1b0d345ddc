use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "ConfigHelper::default_export_dir")]
    pub export_dir: String,

    /// 0 sizes the description column from the terminal width.
    #[serde(default)]
    pub max_description_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            export_dir: ConfigHelper::default_export_dir(),
            max_description_width: 0,
        }
    }
}
