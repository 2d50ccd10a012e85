//! AutoSure engine: the network exchange behind an upload effect.
mod engine;
mod types;
mod upload;

pub use engine::EngineHandle;
pub use types::{
    AnalysisPayload, EngineEvent, FailureKind, SubmissionId, UploadError, UploadRequest,
};
pub use upload::{ReqwestUploader, UploadSettings, Uploader, DEFAULT_ENDPOINT, FILE_FIELD};
