use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use crate::adapters::validation_api_adapter::ValidationApiAdapter;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::upload_phase::UploadPhase;
use crate::errors::{SheetvalError, SheetvalResult};
use crate::logger::progress_logger::ProgressLogger;
use crate::logger::results_logger::ResultsLogger;
use crate::services::csv_exporter::CsvExporter;
use crate::services::results_aggregator::ResultsAggregator;
use crate::services::results_query::ResultsQuery;
use crate::services::upload_workflow::UploadWorkflow;
use crate::structs::config::config::Config;
use crate::structs::file_upload::FileUpload;
use crate::structs::query_criteria::QueryCriteria;
use crate::structs::validation_result::ValidationResult;
use crate::traits::validation_service::ValidationService;
use crate::ui::dashboard_server::DashboardServer;

/// Options of the `validate` subcommand.
pub struct ValidateOptions {
    pub file: PathBuf,
    pub criteria: QueryCriteria,
    pub export: bool,
    pub export_dir: Option<PathBuf>,
    pub service_url: Option<String>,
    pub limit: Option<usize>,
}

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> SheetvalResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command().await,
            Commands::Validate { file, severity, search, sort, export, export_dir, service_url, limit } => {
                let options = ValidateOptions {
                    file,
                    criteria: QueryCriteria::new(severity, &search, sort),
                    export,
                    export_dir,
                    service_url,
                    limit,
                };
                self.validate_command(options).await
            }
            Commands::Dashboard { port, no_browser, service_url } => {
                self.dashboard_command(port, no_browser, service_url).await
            }
            Commands::Health { service_url } => self.health_command(service_url).await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn init_command(&self) -> SheetvalResult<()> {
        log::info!("🚀 Initializing sheetval configuration...");

        match ConfigManager::create_sample_config() {
            Ok(path) => {
                log::info!("✅ Configuration file created at {}", path.display());
                log::info!("📝 Edit [service] base_url to point at your validation service.");
                log::info!("🔧 Run 'sheetval health' to check that it is reachable.");
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                return Err(e);
            }
        }

        Ok(())
    }

    async fn validate_command(&self, options: ValidateOptions) -> SheetvalResult<()> {
        if options.limit == Some(0) {
            return Err(SheetvalError::user_input_error("--limit 0", "a positive number of rows", "Omit --limit to show every issue"));
        }

        let config = Self::load_config(options.service_url.as_deref())?;

        let upload = FileUpload::from_path(&options.file).await?;
        if !upload.has_allowed_extension(&config.upload.allowed_extensions) {
            log::warn!(
                "⚠️  {} does not look like a spreadsheet (expected one of: {})",
                upload.file_name,
                config.upload.allowed_extensions.join(", ")
            );
        }

        let service = Self::service(&config)?;
        let workflow = UploadWorkflow::new(service, config.upload.clone());

        let result = Self::run_attempt(&workflow, upload).await?;

        ResultsLogger::print_summary(&ResultsAggregator::summarize(&result));

        let visible = ResultsQuery::visible(&result.issues, &options.criteria);
        let width = ResultsLogger::description_width(config.output.max_description_width);
        ResultsLogger::print_table(&visible, &options.criteria, result.issues.len(), width, options.limit);

        if options.export {
            let dir = options.export_dir.unwrap_or_else(|| PathBuf::from(&config.output.export_dir));
            let path = CsvExporter::save(&dir, &visible)?;
            println!("\n💾 Exported to {}", path.display());
        }

        Ok(())
    }

    /// Runs one attempt with the progress bar drawn, and always finishes the
    /// bar with a success or failure line before returning.
    async fn run_attempt(workflow: &UploadWorkflow, upload: FileUpload) -> SheetvalResult<Arc<ValidationResult>> {
        let file_name = upload.file_name.clone();
        let mut progress = ProgressLogger::start(format!("📤 {}", file_name), workflow.subscribe());

        if let Err(e) = workflow.start(upload).wait().await {
            progress.error(&e.user_message()).await;
            return Err(e);
        }

        let snapshot = workflow.snapshot();
        match (snapshot.phase, snapshot.result) {
            (UploadPhase::Succeeded, Some(result)) => {
                progress.stop(&format!("Validated {}", file_name)).await;
                Ok(result)
            }
            _ => {
                let message = snapshot.error
                    .unwrap_or_else(|| "Validation did not complete".to_string());
                progress.error(&message).await;
                Err(SheetvalError::upload_failed(&file_name, &message))
            }
        }
    }

    async fn dashboard_command(&self, port: Option<u16>, no_browser: bool, service_url: Option<String>) -> SheetvalResult<()> {
        log::info!("🌐 Starting sheetval dashboard...");

        let mut config = Self::load_config(service_url.as_deref())?;
        if let Some(port) = port {
            config.dashboard.port = port;
        }
        if no_browser {
            config.dashboard.open_browser = false;
        }

        let workflow = Arc::new(UploadWorkflow::new(Self::service(&config)?, config.upload.clone()));
        let mut server = DashboardServer::new(workflow, config.dashboard.clone());
        server.start().await?;

        if let Some(url) = server.url() {
            log::info!("🔗 Dashboard available at {}", url);
        }
        server.open_browser();
        log::info!("⏹️  Press Ctrl+C to stop the dashboard");

        tokio::signal::ctrl_c().await
            .map_err(|e| SheetvalError::system_error("wait for Ctrl+C", &e.to_string()))?;

        server.shutdown().await
    }

    async fn health_command(&self, service_url: Option<String>) -> SheetvalResult<()> {
        let config = Self::load_config(service_url.as_deref())?;
        let url = config.service.health_url();
        log::info!("🩺 Checking {}", url);

        let adapter = ValidationApiAdapter::new(&config.service)?;
        match adapter.health().await {
            Ok(status) if status.is_healthy() => {
                println!("✅ Validation service is healthy ({})", status.timestamp.as_deref().unwrap_or("no timestamp"));
                Ok(())
            }
            Ok(status) => Err(SheetvalError::network_error(
                "health check",
                Some(&url),
                None,
                &format!("service reported status '{}'", status.status),
            )),
            Err(failure) => Err(SheetvalError::network_error(
                "health check",
                Some(&url),
                failure.status(),
                &failure.to_string(),
            )),
        }
    }

    fn load_config(service_url: Option<&str>) -> SheetvalResult<Config> {
        let mut config = match ConfigManager::load() {
            Ok(config) => config,
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'sheetval init' to create a fresh configuration file.");
                return Err(e);
            }
        };

        if let Some(url) = service_url {
            config.service.base_url = url.to_string();
        }

        ConfigManager::validate_config(&config)?;
        log::debug!("Using validation service at {}", config.service.validate_url());
        Ok(config)
    }

    fn service(config: &Config) -> SheetvalResult<Arc<dyn ValidationService>> {
        Ok(Arc::new(ValidationApiAdapter::new(&config.service)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::GENERIC_UPLOAD_FAILURE_MESSAGE;
    use crate::enums::upload_failure::UploadFailure;
    use crate::structs::config::upload_config::UploadConfig;
    use crate::traits::validation_service::MockValidationService;

    fn workflow_with(service: MockValidationService) -> UploadWorkflow {
        UploadWorkflow::new(Arc::new(service), UploadConfig::default())
    }

    #[tokio::test]
    async fn panicking_attempt_is_reported_and_leaves_workflow_failed() {
        let mut service = MockValidationService::new();
        service.expect_validate().returning(|_| panic!("response body could not be decoded"));
        let workflow = workflow_with(service);

        let outcome = CommandRunner::run_attempt(&workflow, FileUpload::new("projects.xlsx", None, Vec::new())).await;

        assert!(matches!(outcome, Err(SheetvalError::SystemError { .. })));
        let snapshot = workflow.snapshot();
        assert_eq!(snapshot.phase, UploadPhase::Failed);
        assert!(!snapshot.in_flight);
    }

    #[tokio::test]
    async fn rejected_attempt_becomes_upload_failed() {
        let mut service = MockValidationService::new();
        service.expect_validate()
            .returning(|_| Err(UploadFailure::Transport("connection refused".to_string())));
        let workflow = workflow_with(service);

        let outcome = CommandRunner::run_attempt(&workflow, FileUpload::new("projects.xlsx", None, Vec::new())).await;

        match outcome {
            Err(SheetvalError::UploadFailed { file_name, message }) => {
                assert_eq!(file_name, "projects.xlsx");
                assert_eq!(message, GENERIC_UPLOAD_FAILURE_MESSAGE);
            }
            other => panic!("unexpected outcome: {:?}", other.err()),
        }
    }
}
