use crate::{format_confidence, AnalysisResult, UploadState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionView {
    pub name: String,
    pub media_type: String,
    pub size_bytes: u64,
}

/// Display-ready copy of a routed result; confidence is already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCardView {
    pub title: &'static str,
    pub status: String,
    pub risk: String,
    pub compliance: String,
    pub confidence: String,
    pub summary: String,
}

impl ResultCardView {
    pub(crate) fn new(title: &'static str, result: &AnalysisResult) -> Self {
        Self {
            title,
            status: result.status.clone(),
            risk: result.risk.clone(),
            compliance: result.compliance.clone(),
            confidence: format_confidence(result.confidence),
            summary: result.summary.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub upload: UploadState,
    pub message: Option<String>,
    /// False while a submission is in flight.
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub document: Option<SelectionView>,
    pub image: Option<SelectionView>,
    pub image_result: Option<ResultCardView>,
    pub document_result: Option<ResultCardView>,
    pub dirty: bool,
}
