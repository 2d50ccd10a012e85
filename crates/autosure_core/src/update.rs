use autosure_logging::{autosure_debug, autosure_info, autosure_warn};

use crate::{
    Affordance, AppState, ArtifactSelection, Effect, Msg, PickedFile, UploadState,
    MSG_NOTHING_SELECTED,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FilePicked { affordance, file } => pick_file(&mut state, affordance, file),
        Msg::SubmitClicked => submit(&mut state),
        Msg::UploadFinished {
            submission_id,
            outcome,
        } => {
            if let Err(reason) = &outcome {
                autosure_warn!("Submission {} failed: {}", submission_id, reason);
            }
            if !state.finish_submission(submission_id, outcome) {
                autosure_debug!("Ignoring completion for stale submission {}", submission_id);
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn pick_file(
    state: &mut AppState,
    affordance: Affordance,
    file: Option<PickedFile>,
) -> Vec<Effect> {
    let Some(file) = file else {
        state.reject_selection(affordance.category(), affordance.rejection_message());
        return Vec::new();
    };

    match affordance.validate(&file.media_type) {
        Ok(category) => {
            autosure_debug!(
                "Accepted {:?} pick {} ({})",
                affordance,
                file.name,
                file.media_type
            );
            let name = file.name.clone();
            state.hold_selection(ArtifactSelection {
                name: file.name,
                media_type: file.media_type,
                bytes: file.bytes,
                category,
            });
            vec![Effect::SelectionAccepted {
                affordance,
                category,
                name,
            }]
        }
        Err(message) => {
            autosure_debug!(
                "Rejected {:?} pick {} with media type {:?}",
                affordance,
                file.name,
                file.media_type
            );
            state.reject_selection(affordance.category(), message);
            Vec::new()
        }
    }
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    // A second submit while one is in flight is dropped; the view disables
    // the button too, but this is the enforcing check.
    if state.upload_state() == UploadState::Submitting {
        autosure_debug!("Submit ignored: submission already in flight");
        return Vec::new();
    }

    let Some(artifact) = state.submittable().cloned() else {
        state.set_message(MSG_NOTHING_SELECTED);
        return Vec::new();
    };

    let submission_id = state.begin_submission(artifact.category);
    autosure_info!(
        "Submission {} started: {} ({}, {} bytes)",
        submission_id,
        artifact.name,
        artifact.category.as_str(),
        artifact.bytes.len()
    );
    vec![Effect::Upload {
        submission_id,
        artifact,
    }]
}
