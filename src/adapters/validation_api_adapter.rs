use std::time::Duration;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use crate::config::constants::UPLOAD_FIELD_NAME;
use crate::enums::upload_failure::UploadFailure;
use crate::errors::SheetvalResult;
use crate::structs::config::service_config::ServiceConfig;
use crate::structs::file_upload::FileUpload;
use crate::structs::health_status::HealthStatus;
use crate::structs::service_error_body::ServiceErrorBody;
use crate::structs::validation_result::ValidationResult;
use crate::traits::validation_service::ValidationService;

/// HTTP client for the remote validation service.
pub struct ValidationApiAdapter {
    client: Client,
    validate_url: String,
    health_url: String,
}

impl ValidationApiAdapter {

    pub fn new(config: &ServiceConfig) -> SheetvalResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            validate_url: config.validate_url(),
            health_url: config.health_url(),
        })
    }

    fn build_form(upload: FileUpload) -> Result<Form, UploadFailure> {
        let mut part = Part::bytes(upload.contents).file_name(upload.file_name);
        if let Some(content_type) = &upload.content_type {
            part = part.mime_str(content_type)
                .map_err(|e| UploadFailure::Transport(format!("invalid content type '{}': {}", content_type, e)))?;
        }
        Ok(Form::new().part(UPLOAD_FIELD_NAME, part))
    }
}

#[async_trait]
impl ValidationService for ValidationApiAdapter {

    async fn validate(&self, upload: FileUpload) -> Result<ValidationResult, UploadFailure> {
        let file_name = upload.file_name.clone();
        let form = Self::build_form(upload)?;

        log::debug!("POST {} ({})", self.validate_url, file_name);

        let response = match self.client
            .post(&self.validate_url)
            .multipart(form)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                log::error!("Network error while uploading {}: {}", file_name, e);
                return Err(UploadFailure::Transport(e.to_string()));
            }
        };

        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await.map_err(|e| {
                log::error!("Failed to read validation response for {}: {}", file_name, e);
                UploadFailure::Transport(e.to_string())
            })?;

            return serde_json::from_slice::<ValidationResult>(&body).map_err(|e| {
                log::error!("Failed to parse validation result for {}: {}", file_name, e);
                UploadFailure::MalformedResponse(e.to_string())
            });
        }

        let body = response.bytes().await.unwrap_or_default();
        let detail = serde_json::from_slice::<ServiceErrorBody>(&body)
            .ok()
            .and_then(|error_body| error_body.message().map(|s| s.to_string()));

        log::error!(
            "Validation of {} failed with status {}: {}",
            file_name,
            status,
            String::from_utf8_lossy(&body)
        );

        match detail {
            Some(detail) => Err(UploadFailure::Service { status: status.as_u16(), detail }),
            None => Err(UploadFailure::UnstructuredService { status: status.as_u16() }),
        }
    }

    async fn health(&self) -> Result<HealthStatus, UploadFailure> {
        let response = self.client
            .get(&self.health_url)
            .send()
            .await
            .map_err(|e| UploadFailure::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadFailure::UnstructuredService { status: status.as_u16() });
        }

        response.json::<HealthStatus>()
            .await
            .map_err(|e| UploadFailure::MalformedResponse(e.to_string()))
    }
}
