use crate::view_model::{AppViewModel, ResultCardView, SelectionView};
use crate::{AnalysisResult, Category, DisplaySlots};

pub type SubmissionId = u64;

pub const MSG_NOTHING_SELECTED: &str = "Please select a document or image.";
pub const MSG_UPLOAD_SUCCEEDED: &str = "Upload successful!";
pub const MSG_UPLOAD_FAILED: &str = "Upload failed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// A file as handed over by a pick event, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSelection {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
    pub category: Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InFlight {
    id: SubmissionId,
    category: Category,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    upload: UploadState,
    document: Option<ArtifactSelection>,
    image: Option<ArtifactSelection>,
    slots: DisplaySlots,
    message: Option<String>,
    in_flight: Option<InFlight>,
    last_submission_id: SubmissionId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upload_state(&self) -> UploadState {
        self.upload
    }

    pub fn slots(&self) -> &DisplaySlots {
        &self.slots
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn selection(&self, category: Category) -> Option<&ArtifactSelection> {
        match category {
            Category::Document => self.document.as_ref(),
            Category::Image => self.image.as_ref(),
            Category::Rejected => None,
        }
    }

    pub fn in_flight_submission(&self) -> Option<SubmissionId> {
        self.in_flight.map(|in_flight| in_flight.id)
    }

    pub fn view(&self) -> AppViewModel {
        let submitting = self.upload == UploadState::Submitting;
        AppViewModel {
            upload: self.upload,
            message: self.message.clone(),
            submit_enabled: !submitting,
            submit_label: if submitting {
                "Analyzing..."
            } else {
                "Upload for Analysis"
            },
            document: self.document.as_ref().map(SelectionView::from),
            image: self.image.as_ref().map(SelectionView::from),
            image_result: self
                .slots
                .image()
                .map(|result| ResultCardView::new("Image Analysis", result)),
            document_result: self
                .slots
                .document()
                .map(|result| ResultCardView::new("Document Analysis", result)),
            dirty: self.dirty,
        }
    }

    /// Returns whether the view changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn hold_selection(&mut self, selection: ArtifactSelection) {
        let category = selection.category;
        match category {
            Category::Document => self.document = Some(selection),
            Category::Image => self.image = Some(selection),
            Category::Rejected => return,
        }
        self.slots.clear_category(category);
        self.message = None;
        self.dirty = true;
    }

    pub(crate) fn reject_selection(&mut self, category: Category, message: &str) {
        match category {
            Category::Document => self.document = None,
            Category::Image => self.image = None,
            Category::Rejected => {}
        }
        self.set_message(message);
    }

    pub(crate) fn set_message(&mut self, message: &str) {
        self.message = Some(message.to_string());
        self.dirty = true;
    }

    /// The artifact a submit would send. Documents win when both are held.
    pub(crate) fn submittable(&self) -> Option<&ArtifactSelection> {
        self.document
            .as_ref()
            .or(self.image.as_ref())
            .filter(|selection| selection.category.is_accepted())
    }

    pub(crate) fn begin_submission(&mut self, category: Category) -> SubmissionId {
        self.last_submission_id += 1;
        let id = self.last_submission_id;
        self.in_flight = Some(InFlight { id, category });
        self.upload = UploadState::Submitting;
        self.slots.clear();
        self.message = None;
        self.dirty = true;
        id
    }

    /// Settles the in-flight submission `id`. Returns `false` when `id` is not
    /// the submission currently in flight.
    pub(crate) fn finish_submission(
        &mut self,
        id: SubmissionId,
        outcome: Result<AnalysisResult, String>,
    ) -> bool {
        let in_flight = match self.in_flight {
            Some(in_flight) if in_flight.id == id => in_flight,
            _ => return false,
        };
        self.in_flight = None;
        match outcome {
            Ok(result) => {
                self.slots.route(in_flight.category, result);
                self.upload = UploadState::Succeeded;
                self.message = Some(MSG_UPLOAD_SUCCEEDED.to_string());
            }
            Err(_) => {
                self.upload = UploadState::Failed;
                self.message = Some(MSG_UPLOAD_FAILED.to_string());
            }
        }
        self.dirty = true;
        true
    }
}

impl From<&ArtifactSelection> for SelectionView {
    fn from(selection: &ArtifactSelection) -> Self {
        SelectionView {
            name: selection.name.clone(),
            media_type: selection.media_type.clone(),
            size_bytes: selection.bytes.len() as u64,
        }
    }
}
