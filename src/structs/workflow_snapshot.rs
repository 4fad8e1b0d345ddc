use std::sync::Arc;
use serde::Serialize;
use crate::enums::upload_phase::UploadPhase;
use crate::structs::validation_result::ValidationResult;

/// Observable state of the upload workflow.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSnapshot {
    pub phase: UploadPhase,
    pub progress: u8,
    pub error: Option<String>,
    #[serde(skip)]
    pub result: Option<Arc<ValidationResult>>,
    pub in_flight: bool,
    /// Identifier of the most recently started attempt; 0 before any.
    pub attempt: u64,
    pub file_name: Option<String>,
}

impl WorkflowSnapshot {
    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }
}
