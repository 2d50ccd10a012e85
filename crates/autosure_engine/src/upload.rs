use std::time::Duration;

use autosure_logging::{autosure_debug, autosure_info};
use futures_util::StreamExt;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Url};

use crate::{AnalysisPayload, FailureKind, UploadError, UploadRequest};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/upload";
/// Name of the single multipart field carrying the artifact.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub endpoint: String,
    /// `None` means the request may wait forever.
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
    pub max_response_bytes: u64,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: None,
            request_timeout: None,
            max_response_bytes: 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait Uploader: Send + Sync {
    async fn upload(&self, request: &UploadRequest) -> Result<AnalysisPayload, UploadError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestUploader {
    settings: UploadSettings,
}

impl ReqwestUploader {
    pub fn new(settings: UploadSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, UploadError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| UploadError::new(FailureKind::Network, err.to_string()))
    }

    fn endpoint(&self) -> Result<Url, UploadError> {
        let url = Url::parse(&self.settings.endpoint)
            .map_err(|err| UploadError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(UploadError::new(
                FailureKind::InvalidEndpoint,
                format!("unsupported scheme {scheme}"),
            )),
        }
    }

    fn too_large(&self, actual: u64) -> UploadError {
        UploadError::new(
            FailureKind::ResponseTooLarge {
                max_bytes: self.settings.max_response_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

fn build_form(request: &UploadRequest) -> Result<Form, UploadError> {
    let length = request.bytes.len() as u64;
    let part = Part::stream_with_length(Body::from(request.bytes.clone()), length)
        .file_name(request.file_name.clone())
        .mime_str(&request.media_type)
        .map_err(|err| UploadError::new(FailureKind::InvalidMediaType, err.to_string()))?;
    Ok(Form::new().part(FILE_FIELD, part))
}

#[async_trait::async_trait]
impl Uploader for ReqwestUploader {
    async fn upload(&self, request: &UploadRequest) -> Result<AnalysisPayload, UploadError> {
        let endpoint = self.endpoint()?;
        let form = build_form(request)?;
        let client = self.build_client()?;

        autosure_info!(
            "POST {} submission={} file={} type={} bytes={}",
            endpoint,
            request.submission_id,
            request.file_name,
            request.media_type,
            request.bytes.len()
        );

        let response = client
            .post(endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_response_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_response_bytes {
                return Err(self.too_large(next_len));
            }
            body.extend_from_slice(&chunk);
        }
        autosure_debug!(
            "submission={} received {} response bytes",
            request.submission_id,
            body.len()
        );

        AnalysisPayload::from_json(&body)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> UploadError {
    if err.is_timeout() {
        return UploadError::new(FailureKind::Timeout, err.to_string());
    }
    UploadError::new(FailureKind::Network, err.to_string())
}
