use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use autosure_logging::{autosure_error, autosure_warn};

use crate::upload::{ReqwestUploader, UploadSettings, Uploader};
use crate::{EngineEvent, FailureKind, UploadError, UploadRequest};

enum EngineCommand {
    Upload(UploadRequest),
}

/// Runs uploads on a background thread that owns a tokio runtime. Commands go
/// in through [`EngineHandle::submit`]; completions come back as
/// [`EngineEvent`]s.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: UploadSettings) -> Self {
        Self::with_uploader(Arc::new(ReqwestUploader::new(settings)))
    }

    pub fn with_uploader(uploader: Arc<dyn Uploader>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    autosure_error!("Failed to start engine runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let uploader = uploader.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(handle_command(uploader, command, event_tx));
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn submit(&self, request: UploadRequest) {
        if self.cmd_tx.send(EngineCommand::Upload(request)).is_err() {
            autosure_warn!("Engine thread is gone; upload dropped");
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event. `None` once the engine has stopped.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    uploader: Arc<dyn Uploader>,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Upload(request) => {
            let submission_id = request.submission_id;
            // Exactly one completion per upload, panics included.
            let task = tokio::spawn(async move { uploader.upload(&request).await });
            let result = match task.await {
                Ok(result) => result,
                Err(err) => {
                    autosure_error!(
                        "Upload task for submission {} failed: {}",
                        submission_id,
                        err
                    );
                    Err(UploadError::new(FailureKind::UploadPanicked, err.to_string()))
                }
            };
            let _ = event_tx.send(EngineEvent::UploadCompleted {
                submission_id,
                result,
            });
        }
    }
}
