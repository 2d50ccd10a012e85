use crate::Category;

/// Parsed analysis payload. The same shape comes back for documents and
/// images; nothing inside it says which kind of artifact produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub status: String,
    pub risk: String,
    pub compliance: String,
    /// In `[0, 1]`.
    pub confidence: f64,
    pub summary: String,
}

/// The two independent result locations. Each holds at most one result.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisplaySlots {
    image: Option<AnalysisResult>,
    document: Option<AnalysisResult>,
}

impl DisplaySlots {
    /// Places `result` by the category of the artifact that was submitted.
    /// Anything that is not an image lands in the document slot.
    pub fn route(&mut self, category: Category, result: AnalysisResult) {
        match category {
            Category::Image => self.image = Some(result),
            Category::Document | Category::Rejected => self.document = Some(result),
        }
    }

    pub fn clear(&mut self) {
        self.image = None;
        self.document = None;
    }

    pub fn clear_category(&mut self, category: Category) {
        match category {
            Category::Image => self.image = None,
            Category::Document => self.document = None,
            Category::Rejected => {}
        }
    }

    pub fn image(&self) -> Option<&AnalysisResult> {
        self.image.as_ref()
    }

    pub fn document(&self) -> Option<&AnalysisResult> {
        self.document.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.image.is_none() && self.document.is_none()
    }
}

/// Percentage with one decimal place: `0.873` renders as `87.3%`. Ties round
/// half away from zero, so `0.8725` renders as `87.3%`, not `87.2%`.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", (confidence * 1000.0).round() / 10.0)
}
