use async_trait::async_trait;
use crate::enums::upload_failure::UploadFailure;
use crate::structs::file_upload::FileUpload;
use crate::structs::health_status::HealthStatus;
use crate::structs::validation_result::ValidationResult;

/// The remote collaborator that validates an uploaded spreadsheet.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ValidationService: Send + Sync {

    async fn validate(&self, upload: FileUpload) -> Result<ValidationResult, UploadFailure>;

    async fn health(&self) -> Result<HealthStatus, UploadFailure>;
}
