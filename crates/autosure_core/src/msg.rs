#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User picked a file through one of the upload affordances. `None` when
    /// the pick produced no file.
    FilePicked {
        affordance: crate::Affordance,
        file: Option<crate::PickedFile>,
    },
    /// User clicked the submit button.
    SubmitClicked,
    /// Engine finished the network exchange for a submission.
    UploadFinished {
        submission_id: crate::SubmissionId,
        outcome: Result<crate::AnalysisResult, String>,
    },
}
