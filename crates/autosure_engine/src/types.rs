use std::fmt;

use bytes::Bytes;
use serde::Deserialize;
use thiserror::Error;

pub type SubmissionId = u64;

/// One artifact to send as the multipart field `file`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub submission_id: SubmissionId,
    pub file_name: String,
    pub media_type: String,
    pub bytes: Bytes,
}

/// Response body of `POST /upload`. Exactly these five fields; anything else
/// (including the server's `error` field on failed analyses) is rejected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisPayload {
    pub status: String,
    pub risk: String,
    pub compliance: String,
    pub confidence: f64,
    pub summary: String,
}

impl AnalysisPayload {
    /// Decodes and checks a response body. Confidence must be finite and in
    /// `[0, 1]`.
    pub fn from_json(body: &[u8]) -> Result<Self, UploadError> {
        let payload: Self = serde_json::from_slice(body)
            .map_err(|err| UploadError::new(FailureKind::MalformedBody, err.to_string()))?;
        if !payload.confidence.is_finite() || !(0.0..=1.0).contains(&payload.confidence) {
            return Err(UploadError::new(
                FailureKind::MalformedBody,
                format!("confidence {} outside [0, 1]", payload.confidence),
            ));
        }
        Ok(payload)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    UploadCompleted {
        submission_id: SubmissionId,
        result: Result<AnalysisPayload, UploadError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct UploadError {
    pub kind: FailureKind,
    pub message: String,
}

impl UploadError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    InvalidMediaType,
    HttpStatus(u16),
    Timeout,
    Network,
    ResponseTooLarge { max_bytes: u64, actual: Option<u64> },
    MalformedBody,
    /// The upload task panicked instead of returning a result.
    UploadPanicked,
    /// The engine stopped before reporting a result.
    EngineUnavailable,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::InvalidMediaType => write!(f, "invalid media type"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::ResponseTooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::MalformedBody => write!(f, "malformed response body"),
            FailureKind::UploadPanicked => write!(f, "upload task panicked"),
            FailureKind::EngineUnavailable => write!(f, "engine unavailable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_accepts_integer_confidence() {
        let body = br#"{"status":"Completed","risk":"Low","compliance":"Compliant","confidence":1,"summary":"ok"}"#;
        let payload = AnalysisPayload::from_json(body).unwrap();
        assert_eq!(payload.confidence, 1.0);
    }

    #[test]
    fn payload_rejects_server_error_shape() {
        let body = br#"{"summary":"AI text analysis failed.","risk":"N/A","compliance":"N/A","confidence":0.0,"status":"Failed","error":"boom"}"#;
        let err = AnalysisPayload::from_json(body).unwrap_err();
        assert_eq!(err.kind, FailureKind::MalformedBody);
    }

    #[test]
    fn payload_rejects_out_of_range_confidence() {
        let body = br#"{"status":"Completed","risk":"Low","compliance":"Compliant","confidence":1.5,"summary":"ok"}"#;
        let err = AnalysisPayload::from_json(body).unwrap_err();
        assert_eq!(err.kind, FailureKind::MalformedBody);
        assert!(err.to_string().starts_with("malformed response body: confidence 1.5"));
    }
}
