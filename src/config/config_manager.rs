use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, PROGRESS_COMPLETE};
use crate::errors::{ResultExt, SheetvalError, SheetvalResult};
use crate::structs::config::config::Config;

pub const SAMPLE_CONFIG: &str = r#"# Sheetval configuration

[service]
# Validation service the spreadsheet is posted to
base_url = "http://localhost:8000"
validate_path = "/api/validate"
health_path = "/api/health"

# Optional request timeout in seconds. Unset means the transport default.
# request_timeout_secs = 120

[upload]
# Simulated progress: add `progress_step` points every `progress_interval_ms`
# while the request is outstanding, never passing `progress_ceiling`.
progress_step = 10
progress_interval_ms = 200
progress_ceiling = 90

# Files with other extensions are still uploaded, with a warning.
allowed_extensions = ["xlsx", "xls"]

[output]
# Where `sheetval validate --export` writes validation_results_<date>.csv
export_dir = "."

# Description column width in the terminal table. 0 = fit the terminal.
max_description_width = 0

[dashboard]
port = 8080
open_browser = true
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn load() -> SheetvalResult<Config> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                log::debug!("No configuration file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> SheetvalResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| SheetvalError::config_file_error(&path.display().to_string(), &e.to_string()))?;
        let config: Config = toml::from_str(&content)
            .with_context(&format!("loading {}", path.display()))?;
        Ok(config)
    }

    pub fn create_sample_config() -> SheetvalResult<PathBuf> {
        let path = Self::config_path().ok_or_else(|| {
            SheetvalError::system_error("init", "Could not determine the home directory")
        })?;
        Self::write_sample_config(&path)?;
        Ok(path)
    }

    pub fn write_sample_config(path: &Path) -> SheetvalResult<()> {
        if path.exists() {
            return Err(SheetvalError::config_error(
                &format!("Configuration already exists at {}", path.display()),
                None,
                Some("Edit the existing file or delete it before running init again"),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| SheetvalError::file_error(&parent.display().to_string(), "create directory", &e.to_string()))?;
        }
        fs::write(path, SAMPLE_CONFIG)
            .map_err(|e| SheetvalError::file_error(&path.display().to_string(), "write", &e.to_string()))?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> SheetvalResult<()> {
        let mut errors = Vec::new();

        if config.service.base_url.trim().is_empty() {
            errors.push(SheetvalError::config_error(
                "Service base URL is empty",
                Some("service.base_url"),
                Some("Set it to the validation service address, e.g. http://localhost:8000"),
            ));
        }

        if config.upload.progress_step == 0 {
            errors.push(SheetvalError::config_error("Progress step must be positive", Some("upload.progress_step"), None));
        }

        if config.upload.progress_interval_ms == 0 {
            errors.push(SheetvalError::config_error("Progress interval must be positive", Some("upload.progress_interval_ms"), None));
        }

        if config.upload.progress_ceiling >= PROGRESS_COMPLETE {
            errors.push(SheetvalError::config_error(
                &format!("Progress ceiling {} must stay below {}", config.upload.progress_ceiling, PROGRESS_COMPLETE),
                Some("upload.progress_ceiling"),
                Some("Use a value below 100 so completion stays distinguishable"),
            ));
        }

        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(SheetvalError::MultipleErrors {
                errors,
                context: "configuration validation".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_config_parses_to_defaults() {
        let config: Config = toml::from_str(SAMPLE_CONFIG).unwrap();

        assert_eq!(config.service.base_url, "http://localhost:8000");
        assert_eq!(config.upload.progress_step, 10);
        assert_eq!(config.upload.progress_interval_ms, 200);
        assert_eq!(config.upload.progress_ceiling, 90);
        assert_eq!(config.dashboard.port, 8080);
        assert!(ConfigManager::validate_config(&config).is_ok());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: Config = toml::from_str("[service]\nbase_url = \"http://validator:9000\"\n").unwrap();

        assert_eq!(config.service.validate_url(), "http://validator:9000/api/validate");
        assert_eq!(config.service.request_timeout_secs, None);
        assert_eq!(config.upload.allowed_extensions, vec!["xlsx", "xls"]);
    }

    #[test]
    fn invalid_values_are_collected() {
        let mut config = Config::default();
        config.upload.progress_step = 0;
        config.upload.progress_ceiling = 120;

        match ConfigManager::validate_config(&config) {
            Err(SheetvalError::MultipleErrors { errors, .. }) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn ceiling_of_one_hundred_is_rejected() {
        let mut config = Config::default();
        config.upload.progress_ceiling = 100;
        assert!(matches!(ConfigManager::validate_config(&config), Err(SheetvalError::ConfigurationError { .. })));

        config.upload.progress_ceiling = 99;
        assert!(ConfigManager::validate_config(&config).is_ok());
    }

    #[test]
    fn write_sample_config_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        ConfigManager::write_sample_config(&path).unwrap();
        let loaded = ConfigManager::load_from(&path).unwrap();
        assert_eq!(loaded.output.export_dir, ".");

        assert!(ConfigManager::write_sample_config(&path).is_err());
    }

    #[test]
    fn malformed_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[upload
progress_step = 10
").unwrap();

        match ConfigManager::load_from(&path) {
            Err(SheetvalError::MultipleErrors { errors, context }) => {
                assert!(context.contains("config.toml"));
                assert!(matches!(errors[0], SheetvalError::ParseError { .. }));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
