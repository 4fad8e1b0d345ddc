use std::io::Write;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use crate::structs::workflow_snapshot::WorkflowSnapshot;

const BAR_WIDTH: usize = 30;

/// Draws the workflow's progress on stderr while an upload is in flight.
pub struct ProgressLogger {
    task_handle: Option<JoinHandle<()>>,
}

impl ProgressLogger {
    pub fn start(label: String, mut receiver: watch::Receiver<WorkflowSnapshot>) -> Self {
        let animation_chars = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

        let handle = tokio::spawn(async move {
            let mut frame = 0;

            loop {
                let (progress, terminal) = {
                    let snapshot = receiver.borrow_and_update();
                    (snapshot.progress, snapshot.phase.is_terminal())
                };

                eprint!("\r{} {} {}", label, render_bar(progress, BAR_WIDTH), animation_chars[frame]);
                let _ = std::io::stderr().flush();
                frame = (frame + 1) % animation_chars.len();

                if terminal || receiver.changed().await.is_err() {
                    break;
                }
            }
        });

        Self {
            task_handle: Some(handle),
        }
    }

    pub async fn stop(&mut self, final_message: &str) {
        self.finish().await;
        eprint!("\r\x1b[K✅  {}\n", final_message);
        let _ = std::io::stderr().flush();
    }

    pub async fn error(&mut self, error_message: &str) {
        self.finish().await;
        eprint!("\r\x1b[K❌ {}\n", error_message);
        let _ = std::io::stderr().flush();
    }

    async fn finish(&mut self) {
        if let Some(handle) = self.task_handle.take() {
            handle.abort();
            let _ = handle.await;
        }
    }
}

pub fn render_bar(progress: u8, width: usize) -> String {
    let progress = progress.min(100) as usize;
    let filled = progress * width / 100;
    format!("[{}{}] {:>3}%", "█".repeat(filled), "░".repeat(width - filled), progress)
}
