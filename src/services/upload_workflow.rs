use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use crate::config::constants::{GENERIC_UPLOAD_FAILURE_MESSAGE, PROGRESS_COMPLETE};
use crate::enums::upload_failure::UploadFailure;
use crate::enums::upload_phase::UploadPhase;
use crate::errors::{SheetvalError, SheetvalResult};
use crate::services::progress_ticker::ProgressTicker;
use crate::structs::config::upload_config::UploadConfig;
use crate::structs::file_upload::FileUpload;
use crate::structs::validation_result::ValidationResult;
use crate::structs::workflow_snapshot::WorkflowSnapshot;
use crate::traits::validation_service::ValidationService;

/// Drives upload attempts from file selection to a terminal phase and owns
/// the observable state (phase, progress, error, current result).
///
/// Attempts are never cancelled. Each one is tagged with an increasing
/// identifier and only the most recently started attempt may change the
/// observable state; progress ticks and outcomes of superseded attempts are
/// dropped.
pub struct UploadWorkflow {
    service: Arc<dyn ValidationService>,
    settings: UploadConfig,
    state: Arc<watch::Sender<WorkflowSnapshot>>,
}

/// Handle on one started attempt.
pub struct UploadAttempt {
    id: u64,
    handle: JoinHandle<()>,
}

impl UploadAttempt {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Waits until this attempt has settled (or was discarded).
    pub async fn wait(self) -> SheetvalResult<()> {
        self.handle.await.map_err(|e| {
            SheetvalError::system_error("upload attempt", &format!("attempt {} ended abnormally: {}", self.id, e))
        })
    }
}

impl UploadWorkflow {

    pub fn new(service: Arc<dyn ValidationService>, settings: UploadConfig) -> Self {
        let (state, _) = watch::channel(WorkflowSnapshot::default());
        Self {
            service,
            settings,
            state: Arc::new(state),
        }
    }

    pub fn snapshot(&self) -> WorkflowSnapshot {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<WorkflowSnapshot> {
        self.state.subscribe()
    }

    pub fn current_result(&self) -> Option<Arc<ValidationResult>> {
        self.state.borrow().result.clone()
    }

    pub fn dismiss_error(&self) {
        self.state.send_if_modified(|s| s.error.take().is_some());
    }

    /// Starts a new attempt and returns without waiting for the request.
    ///
    /// On return the phase is already `Uploading`, with error, result and
    /// progress cleared. Must be called from within a tokio runtime.
    pub fn start(&self, upload: FileUpload) -> UploadAttempt {
        let file_name = upload.file_name.clone();
        let mut attempt = 0;

        self.state.send_modify(|s| {
            s.attempt += 1;
            attempt = s.attempt;
            s.phase = UploadPhase::Uploading;
            s.progress = 0;
            s.error = None;
            s.result = None;
            s.in_flight = true;
            s.file_name = Some(file_name.clone());
        });

        log::info!("📤 Uploading {} ({:.2} KB, attempt {})", file_name, upload.size_kb(), attempt);

        let step = self.settings.progress_step;
        let ceiling = self.settings.progress_ceiling.min(PROGRESS_COMPLETE);
        let ticker = ProgressTicker::start(self.settings.progress_interval(), {
            let state = Arc::clone(&self.state);
            move || advance_progress(&state, attempt, step, ceiling)
        });

        let service = Arc::clone(&self.service);
        let state = Arc::clone(&self.state);

        let handle = tokio::spawn(async move {
            let _in_flight = InFlightGuard {
                state: Arc::clone(&state),
                attempt,
            };

            let outcome = service.validate(upload).await;
            ticker.stop().await;
            settle(&state, attempt, &file_name, outcome);
        });

        UploadAttempt { id: attempt, handle }
    }
}

fn advance_progress(state: &watch::Sender<WorkflowSnapshot>, attempt: u64, step: u8, ceiling: u8) -> bool {
    let mut keep_running = false;

    state.send_if_modified(|s| {
        if s.attempt != attempt || s.phase != UploadPhase::Uploading || s.progress >= ceiling {
            return false;
        }
        s.progress = s.progress.saturating_add(step).min(ceiling);
        keep_running = s.progress < ceiling;
        true
    });

    keep_running
}

fn settle(
    state: &watch::Sender<WorkflowSnapshot>,
    attempt: u64,
    file_name: &str,
    outcome: Result<ValidationResult, UploadFailure>,
) {
    let summary = match &outcome {
        Ok(result) => format!("{} issues across {} rows", result.issues.len(), result.total_rows),
        Err(failure) => failure.to_string(),
    };
    let succeeded = outcome.is_ok();

    let applied = state.send_if_modified(|s| {
        if s.attempt != attempt {
            return false;
        }
        match outcome {
            Ok(result) => {
                s.progress = PROGRESS_COMPLETE;
                s.result = Some(Arc::new(result));
                s.phase = UploadPhase::Succeeded;
            }
            Err(failure) => {
                s.progress = 0;
                s.error = Some(failure.user_message());
                s.phase = UploadPhase::Failed;
            }
        }
        s.in_flight = false;
        true
    });

    if !applied {
        log::debug!("Discarding outcome of superseded attempt {} for {}", attempt, file_name);
    } else if succeeded {
        log::info!("✅ Validated {}: {}", file_name, summary);
    } else {
        log::warn!("❌ Validation of {} failed: {}", file_name, summary);
    }
}

/// Clears the in-flight flag when the attempt task ends, whichever way it
/// ends. An attempt that never settled is marked failed.
struct InFlightGuard {
    state: Arc<watch::Sender<WorkflowSnapshot>>,
    attempt: u64,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        let attempt = self.attempt;
        self.state.send_if_modified(|s| {
            if s.attempt != attempt || !s.in_flight {
                return false;
            }
            s.in_flight = false;
            if s.phase == UploadPhase::Uploading {
                s.phase = UploadPhase::Failed;
                s.progress = 0;
                s.error = Some(GENERIC_UPLOAD_FAILURE_MESSAGE.to_string());
            }
            true
        });
    }
}
