#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A pick was accepted. Presentation layers that used to take a
    /// "file selected" callback listen for this instead.
    SelectionAccepted {
        affordance: crate::Affordance,
        category: crate::Category,
        name: String,
    },
    /// Send the artifact as the multipart field `file`.
    Upload {
        submission_id: crate::SubmissionId,
        artifact: crate::ArtifactSelection,
    },
}
