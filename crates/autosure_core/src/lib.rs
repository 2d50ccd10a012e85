//! AutoSure core: pure upload state machine, media type validation and
//! result routing. No IO happens here; the shell executes [`Effect`]s and
//! feeds outcomes back as [`Msg`]s.
mod effect;
mod msg;
mod route;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use route::{format_confidence, AnalysisResult, DisplaySlots};
pub use state::{
    AppState, ArtifactSelection, PickedFile, SubmissionId, UploadState, MSG_NOTHING_SELECTED,
    MSG_UPLOAD_FAILED, MSG_UPLOAD_SUCCEEDED,
};
pub use update::update;
pub use validate::{
    classify, Affordance, Category, DOCUMENT_REJECTED, IMAGE_REJECTED, MEDIA_DOC, MEDIA_DOCX,
    MEDIA_JPEG, MEDIA_PDF, MEDIA_PNG,
};
pub use view_model::{AppViewModel, ResultCardView, SelectionView};
