use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use autosure_core::{Affordance, PickedFile};
use autosure_engine::{UploadSettings, DEFAULT_ENDPOINT};
use autosure_logging::{LevelFilter, LogDestination, DEFAULT_LOG_FILE};
use clap::{Parser, ValueEnum};

const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

#[derive(Parser, Debug)]
#[command(
    name = "autosure",
    version,
    about = "Submit a property document or image for risk analysis"
)]
pub struct Cli {
    #[arg(long, value_name = "PATH", help = "Document to analyze (PDF or DOCX)")]
    pub document: Option<PathBuf>,
    #[arg(long, value_name = "MIME", help = "Declared media type for --document")]
    pub document_type: Option<String>,
    #[arg(long, value_name = "PATH", help = "Image to analyze (PNG or JPG)")]
    pub image: Option<PathBuf>,
    #[arg(long, value_name = "MIME", help = "Declared media type for --image")]
    pub image_type: Option<String>,
    #[arg(
        long,
        value_name = "PATH",
        help = "Document picked through the single-slot picker (also accepts DOC)"
    )]
    pub legacy_document: Option<PathBuf>,
    #[arg(long, value_name = "MIME", help = "Declared media type for --legacy-document")]
    pub legacy_document_type: Option<String>,
    #[arg(long, env = "AUTOSURE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
    #[arg(long, value_name = "SECS", help = "Give up on the request after this long")]
    pub timeout_secs: Option<u64>,
    #[arg(long, value_enum, default_value_t = LogTarget::Off)]
    pub log: LogTarget,
    #[arg(long, help = "Log at debug level")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    Off,
    Terminal,
    File,
    Both,
}

/// A pick requested on the command line, not yet read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickRequest {
    pub affordance: Affordance,
    pub path: PathBuf,
    pub media_type: Option<String>,
}

impl Cli {
    pub fn log_destination(&self) -> LogDestination {
        let file = PathBuf::from(DEFAULT_LOG_FILE);
        match self.log {
            LogTarget::Off => LogDestination::Off,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File(file),
            LogTarget::Both => LogDestination::Both(file),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn upload_settings(&self) -> UploadSettings {
        UploadSettings {
            endpoint: self.endpoint.clone(),
            request_timeout: self.timeout_secs.map(Duration::from_secs),
            ..UploadSettings::default()
        }
    }

    /// Picks in the order image, document, legacy document.
    pub fn picks(&self) -> Vec<PickRequest> {
        [
            (Affordance::Image, &self.image, &self.image_type),
            (Affordance::Document, &self.document, &self.document_type),
            (
                Affordance::LegacyDocument,
                &self.legacy_document,
                &self.legacy_document_type,
            ),
        ]
        .into_iter()
        .filter_map(|(affordance, path, media_type)| {
            path.as_ref().map(|path| PickRequest {
                affordance,
                path: path.clone(),
                media_type: media_type.clone(),
            })
        })
        .collect()
    }
}

impl PickRequest {
    /// Reads the file. The declared media type is the override if given,
    /// otherwise guessed from the extension the way a browser would.
    pub fn load(&self) -> Result<PickedFile> {
        let bytes = fs::read(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let media_type = self
            .media_type
            .clone()
            .unwrap_or_else(|| guess_media_type(&self.path));
        Ok(PickedFile {
            name: file_name(&self.path),
            media_type,
            bytes,
        })
    }
}

pub fn guess_media_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(FALLBACK_MEDIA_TYPE)
        .to_string()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
